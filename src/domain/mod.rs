//! Domain models for cfgmeta
//!
//! This module contains pure domain objects representing the metadata records
//! found in a package and the package they were found in.

pub mod group;
pub mod setter;

pub use group::ResourceGroup;
pub use setter::{ComponentRef, SetterRecord, SubstitutionRecord};
