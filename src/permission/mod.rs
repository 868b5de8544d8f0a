pub mod error;
pub mod kind;
pub mod memory;
pub mod record;
pub mod store;
pub mod tree;

pub use kind::PermissionType;
pub use record::Permission;
pub use tree::{build_tree, flatten, PermissionForest};
