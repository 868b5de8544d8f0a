use crate::locale::Translate;
use phf::phf_map;
use serde::{Deserialize, Serialize};

const DEFAULT_COLOR: &str = "#C9CDD4";

/// Wire name -> hex color used to badge a permission type.
static TYPE_COLOR: phf::Map<&'static str, &'static str> = phf_map! {
    // Navigation, hierarchical.
    "MENU" => "#165DFF",
    // Operation level.
    "BUTTON" => "#00B42A",
    "API" => "#722ED1",
    // Scope control.
    "DATA" => "#FF7D00",
    "PAGE" => "#14C9C9",
    "OTHER" => "#86909C",
};

/// Types offered in selection lists, in display order.
const LISTED_TYPES: [PermissionType; 6] = [
    PermissionType::Catalog,
    PermissionType::Menu,
    PermissionType::Page,
    PermissionType::Button,
    PermissionType::Api,
    PermissionType::Data,
];

/// Kind of resource a permission guards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionType {
    Catalog,
    Menu,
    Page,
    Button,
    Api,
    Data,
    Other,
    /// Anything we do not recognize.
    #[default]
    #[serde(other)]
    Unspecified,
}

impl PermissionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Catalog => "CATALOG",
            Self::Menu => "MENU",
            Self::Page => "PAGE",
            Self::Button => "BUTTON",
            Self::Api => "API",
            Self::Data => "DATA",
            Self::Other => "OTHER",
            Self::Unspecified => "UNSPECIFIED",
        }
    }

    /// Returns the badge color, falling back to neutral grey.
    pub fn color(&self) -> &'static str {
        TYPE_COLOR
            .get(self.as_str())
            .copied()
            .unwrap_or(DEFAULT_COLOR)
    }

    /// Localization key of the type label.
    pub fn label_key(&self) -> String {
        format!("enum.permission.type.{}", self.as_str())
    }
}

/// Selectable type entry for admin forms.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypeOption {
    pub label: String,
    pub value: PermissionType,
    pub color: &'static str,
}

pub fn type_options<T: Translate + ?Sized>(translator: &T) -> Vec<TypeOption> {
    LISTED_TYPES
        .iter()
        .map(|ty| TypeOption {
            label: translator.translate(&ty.label_key()),
            value: *ty,
            color: ty.color(),
        })
        .collect()
}

/// Returns the localized label of a listed type, or an empty string.
pub fn type_name<T: Translate + ?Sized>(ty: PermissionType, translator: &T) -> String {
    type_options(translator)
        .into_iter()
        .find(|option| option.value == ty)
        .map(|option| option.label)
        .unwrap_or_default()
}
