//! Localization lookups.
//!
//! Locale files are nested JSON objects, e.g. `{"menu": {"permission": {"role": "Roles"}}}`,
//! which are addressed with dotted keys such as `menu.permission.role`.

use crate::permission::error::Error;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

/// Capability turning a message key into display text.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Flat key -> message table.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    messages: HashMap<String, String>,
}

impl Dictionary {
    pub fn from_json_str(json: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(json)?;
        let mut dictionary = Self::default();
        match value {
            Value::Object(_) => dictionary.flatten_into("", &value),
            _ => {
                return Err(Error::InvalidValues(
                    "locale file must contain a JSON object".to_owned(),
                ))
            }
        }
        Ok(dictionary)
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let json = std::fs::read_to_string(path)?;
        let dictionary = Self::from_json_str(&json)?;
        log::debug!(
            "Loaded {} locale messages from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    pub fn insert(&mut self, key: &str, message: &str) {
        self.messages.insert(key.to_owned(), message.to_owned());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn flatten_into(&mut self, prefix: &str, value: &Value) {
        match value {
            Value::Object(map) => {
                for (key, inner) in map {
                    let path = if prefix.is_empty() {
                        key.to_owned()
                    } else {
                        format!("{}.{}", prefix, key)
                    };
                    self.flatten_into(&path, inner);
                }
            }
            Value::String(message) => {
                self.messages.insert(prefix.to_owned(), message.to_owned());
            }
            // Numbers and booleans are kept as their literal text.
            Value::Number(_) | Value::Bool(_) => {
                self.messages.insert(prefix.to_owned(), value.to_string());
            }
            Value::Null | Value::Array(_) => {}
        }
    }
}

impl Translate for Dictionary {
    /// Unknown keys translate to themselves.
    fn translate(&self, key: &str) -> String {
        match self.get(key) {
            Some(message) => message.to_owned(),
            None => key.to_owned(),
        }
    }
}
