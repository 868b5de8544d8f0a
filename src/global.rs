use crate::locale::Dictionary;
use once_cell::sync::OnceCell;
use std::path::Path;

static BIND_ADDRESS: OnceCell<String> = OnceCell::new();
static DICTIONARY: OnceCell<Dictionary> = OnceCell::new();

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// Address the admin server listens on.
pub fn get_bind_address() -> &'static str {
    BIND_ADDRESS.get_or_init(|| DEFAULT_BIND_ADDRESS.to_owned())
}

/// Active locale messages. Empty until `init` loads a locale file.
pub fn get_dictionary() -> &'static Dictionary {
    DICTIONARY.get_or_init(Dictionary::default)
}

pub fn init() {
    // Init BIND_ADDRESS
    let address = std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_owned());
    if BIND_ADDRESS.set(address).is_err() {
        log::warn!("BIND_ADDRESS was already initialized");
    }

    // Init DICTIONARY
    match std::env::var("LOCALE_FILE") {
        Ok(path) => {
            let dictionary = Dictionary::load(Path::new(&path))
                .unwrap_or_else(|err| panic!("LOCALE_FILE {} cannot be loaded: {}", path, err));
            if DICTIONARY.set(dictionary).is_err() {
                log::warn!("DICTIONARY was already initialized");
            }
        }
        Err(_) => log::info!("LOCALE_FILE not set, permission labels are left untranslated"),
    }
}
