pub mod global;
pub mod locale;
pub mod permission;
pub mod web;
