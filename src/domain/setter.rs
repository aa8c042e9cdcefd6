//! Setter and substitution records
//!
//! Records are produced once by extraction and never mutated afterwards.

use crate::common::ref_normalizer;

/// A named, substitutable field value declared in a metadata file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetterRecord {
    /// Setter name, unique within one metadata file
    pub name: String,

    /// Scalar value; empty when the setter is list-valued
    pub value: String,

    /// List values; empty when the setter is scalar
    pub list_values: Vec<String>,

    /// Free-text provenance of the current value
    pub set_by: String,

    pub description: String,

    /// Number of resource fields referencing this setter
    pub count: usize,

    pub required: bool,
}

impl SetterRecord {
    pub fn is_list(&self) -> bool {
        !self.list_values.is_empty()
    }
}

/// One component of a substitution pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRef {
    /// Namespaced reference as stored (e.g. `#/definitions/io.k8s.cli.setters.image-tag`)
    pub raw_ref: String,
}

impl ComponentRef {
    pub fn new(raw_ref: impl Into<String>) -> Self {
        Self {
            raw_ref: raw_ref.into(),
        }
    }

    /// Reference with its namespace and kind prefix removed
    pub fn display_ref(&self) -> &str {
        ref_normalizer::normalize(&self.raw_ref)
    }
}

/// A named template composed from setter (or nested substitution) references
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionRecord {
    pub name: String,
    pub pattern: String,
    pub values: Vec<ComponentRef>,
}
