//! Record extraction for one package
//!
//! Loads a metadata file, applies the optional exact-name filter, and fills in
//! setter usage counts from the package's resource files.

use std::collections::HashMap;
use std::path::Path;

use crate::common::ref_normalizer::{setter_ref, substitution_ref};
use crate::config::MetadataStore;
use crate::domain::{SetterRecord, SubstitutionRecord};
use crate::error::Result;

use super::usage;

/// Records extracted from one metadata file, in authoring order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    pub setters: Vec<SetterRecord>,
    pub substitutions: Vec<SubstitutionRecord>,
}

/// Extract setters and substitutions from the metadata file at `metadata_path`
///
/// With `name_filter`, only records whose name equals it exactly are kept.
/// Usage counts are taken from resource files next to the metadata file.
pub fn extract<S: MetadataStore>(
    metadata_path: &Path,
    name_filter: Option<&str>,
) -> Result<Extracted> {
    let store = S::open(metadata_path)?;

    let mut setters = filter_by_name(store.setters(), name_filter, |s| &s.name);
    let substitutions = filter_by_name(store.substitutions(), name_filter, |s| &s.name);

    if !setters.is_empty() {
        let dir = metadata_path.parent().unwrap_or_else(|| Path::new("."));
        let marker_file = metadata_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let references = usage::collect_references(dir, &marker_file);
        for setter in &mut setters {
            setter.count = usage_count(&setter.name, &references, store.substitutions());
        }
    }

    tracing::debug!(
        "Extracted {} setter(s) and {} substitution(s) from {}",
        setters.len(),
        substitutions.len(),
        metadata_path.display()
    );

    Ok(Extracted {
        setters,
        substitutions,
    })
}

/// Keep records whose name equals `name`; all records when `name` is `None`
pub fn filter_by_name<T: Clone>(
    records: &[T],
    name: Option<&str>,
    name_of: impl Fn(&T) -> &String,
) -> Vec<T> {
    records
        .iter()
        .filter(|record| name.is_none_or(|n| name_of(record) == n))
        .cloned()
        .collect()
}

/// Direct references to the setter plus references to every substitution
/// that uses it, directly or through other substitutions
fn usage_count(
    setter: &str,
    references: &HashMap<String, usize>,
    substitutions: &[SubstitutionRecord],
) -> usize {
    let mut targets = vec![setter_ref(setter)];
    let mut dependents: Vec<&str> = Vec::new();

    loop {
        let mut added = false;
        for substitution in substitutions {
            if dependents.contains(&substitution.name.as_str()) {
                continue;
            }
            if substitution
                .values
                .iter()
                .any(|v| targets.contains(&v.raw_ref))
            {
                dependents.push(&substitution.name);
                targets.push(substitution_ref(&substitution.name));
                added = true;
            }
        }
        if !added {
            break;
        }
    }

    let direct = references.get(setter).copied().unwrap_or(0);
    direct
        + dependents
            .iter()
            .map(|name| references.get(*name).copied().unwrap_or(0))
            .sum::<usize>()
}
