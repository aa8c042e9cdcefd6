//! Operations module
//!
//! This module provides high-level operations that coordinate:
//! - ListSettersOperation: per-package setter and substitution report
//!
//! The operations coordinate with:
//! - Discovery: package lookup (from discovery module)
//! - Config: metadata file parsing (from config module)
//! - UI: table rendering (from ui module)

pub mod list_setters;

pub use list_setters::{ListOptions, ListSettersOperation, ListStatus};
