use super::kind::PermissionType;
use serde::{Deserialize, Serialize};

/// Data struct.
/// A single permission entry as delivered by a listing call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub id: u32,
    /// Owning record. `None` and `Some(0)` both mark a root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u32>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, rename = "type")]
    pub permission_type: PermissionType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Permission>,
}

impl Permission {
    pub fn new(id: u32, parent_id: Option<u32>, name: &str) -> Self {
        Self {
            id,
            parent_id,
            name: name.to_owned(),
            ..Default::default()
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self.parent_id, None | Some(0))
    }
}
