//! Command implementations for cfgmeta CLI

pub mod completions;
pub mod list_setters;
pub mod version;
