//! Reference normalization for substitution components
//!
//! Substitution values point at other definitions with namespaced references
//! such as `#/definitions/io.k8s.cli.setters.replicas`. Reports show the bare
//! identifier instead.

/// Prefix shared by every definition reference
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Kind prefix for setter definitions
pub const SETTER_DEFINITION_PREFIX: &str = "io.k8s.cli.setters.";

/// Kind prefix for substitution definitions
pub const SUBSTITUTION_DEFINITION_PREFIX: &str = "io.k8s.cli.substitutions.";

/// Strip one namespaced setter prefix, or failing that one substitution prefix
///
/// References matching neither are returned unchanged so foreign or malformed
/// references stay visible in the report.
pub fn normalize(raw_ref: &str) -> &str {
    strip_kind(raw_ref, SETTER_DEFINITION_PREFIX)
        .or_else(|| strip_kind(raw_ref, SUBSTITUTION_DEFINITION_PREFIX))
        .unwrap_or(raw_ref)
}

/// Full reference for a setter name
pub fn setter_ref(name: &str) -> String {
    format!("{DEFINITIONS_PREFIX}{SETTER_DEFINITION_PREFIX}{name}")
}

/// Full reference for a substitution name
pub fn substitution_ref(name: &str) -> String {
    format!("{DEFINITIONS_PREFIX}{SUBSTITUTION_DEFINITION_PREFIX}{name}")
}

fn strip_kind<'a>(raw_ref: &'a str, kind_prefix: &str) -> Option<&'a str> {
    raw_ref
        .strip_prefix(DEFINITIONS_PREFIX)
        .and_then(|rest| rest.strip_prefix(kind_prefix))
}
