//! YAML metadata file (`openAPI.definitions`)
//!
//! Setters and substitutions are OpenAPI definitions carrying an
//! `x-k8s-cli` extension:
//!
//! ```yaml
//! openAPI:
//!   definitions:
//!     io.k8s.cli.setters.replicas:
//!       description: hello world
//!       x-k8s-cli:
//!         setter:
//!           name: replicas
//!           value: "3"
//! ```
//!
//! Any other top-level fields of the file are ignored.

use serde::Deserialize;
use serde_yaml::Value;
use std::path::Path;

use crate::common::ref_normalizer::{SETTER_DEFINITION_PREFIX, SUBSTITUTION_DEFINITION_PREFIX};
use crate::domain::{ComponentRef, SetterRecord, SubstitutionRecord};
use crate::error::{Result, fs, metadata};

use super::MetadataStore;

#[derive(Debug, Default, Deserialize)]
struct OpenApiDocument {
    #[serde(rename = "openAPI", default)]
    open_api: Option<OpenApiSection>,
}

#[derive(Debug, Default, Deserialize)]
struct OpenApiSection {
    #[serde(default)]
    definitions: serde_yaml::Mapping,
}

#[derive(Debug, Default, Deserialize)]
struct Definition {
    #[serde(default)]
    description: Option<Value>,

    #[serde(rename = "x-k8s-cli", default)]
    extension: Option<CliExtension>,
}

#[derive(Debug, Default, Deserialize)]
struct CliExtension {
    #[serde(default)]
    setter: Option<SetterExtension>,

    #[serde(default)]
    substitution: Option<SubstitutionExtension>,
}

#[derive(Debug, Default, Deserialize)]
struct SetterExtension {
    #[serde(default)]
    name: Option<Value>,

    #[serde(default)]
    value: Option<Value>,

    #[serde(rename = "listValues", default)]
    list_values: Vec<Value>,

    #[serde(rename = "setBy", default)]
    set_by: Option<Value>,

    #[serde(default)]
    required: bool,
}

#[derive(Debug, Default, Deserialize)]
struct SubstitutionExtension {
    #[serde(default)]
    name: Option<Value>,

    #[serde(default)]
    pattern: Option<Value>,

    #[serde(default)]
    values: Vec<SubstitutionValue>,
}

#[derive(Debug, Deserialize)]
struct SubstitutionValue {
    #[serde(rename = "ref")]
    reference: Value,
}

/// A parsed metadata file
#[derive(Debug, Clone, Default)]
pub struct OpenApiFile {
    setters: Vec<SetterRecord>,
    substitutions: Vec<SubstitutionRecord>,
}

impl OpenApiFile {
    /// Parse metadata file content; `path` is only used in error messages
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        let parse_err =
            |e: serde_yaml::Error| metadata::parse_failed(path.display().to_string(), e.to_string());

        let value: Value = serde_yaml::from_str(content).map_err(parse_err)?;
        let mut file = Self::default();
        if value.is_null() {
            return Ok(file);
        }

        let document: OpenApiDocument = serde_yaml::from_value(value).map_err(parse_err)?;
        let Some(section) = document.open_api else {
            return Ok(file);
        };

        for (key, raw) in section.definitions {
            let Some(key) = key.as_str() else {
                continue;
            };
            let definition: Definition = serde_yaml::from_value(raw).map_err(|e| {
                metadata::parse_failed(
                    path.display().to_string(),
                    format!("definition '{key}': {e}"),
                )
            })?;
            let Some(extension) = definition.extension else {
                continue;
            };

            if let Some(setter) = extension.setter {
                file.setters.push(setter_record(
                    key,
                    setter,
                    optional_text(definition.description.as_ref()),
                ));
            }
            if let Some(substitution) = extension.substitution {
                file.substitutions
                    .push(substitution_record(key, substitution));
            }
        }

        Ok(file)
    }
}

impl MetadataStore for OpenApiFile {
    fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| fs::from_io(path, &e))?;
        Self::from_yaml(&content, path)
    }

    fn setters(&self) -> &[SetterRecord] {
        &self.setters
    }

    fn substitutions(&self) -> &[SubstitutionRecord] {
        &self.substitutions
    }
}

fn setter_record(key: &str, ext: SetterExtension, description: String) -> SetterRecord {
    let list_values: Vec<String> = ext.list_values.iter().map(scalar_text).collect();
    // list-valued setters carry no scalar value
    let value = if list_values.is_empty() {
        ext.value.as_ref().map(scalar_text).unwrap_or_default()
    } else {
        String::new()
    };

    SetterRecord {
        name: ext.name.as_ref().map_or_else(
            || bare_name(key, SETTER_DEFINITION_PREFIX),
            scalar_text,
        ),
        value,
        list_values,
        set_by: optional_text(ext.set_by.as_ref()),
        description,
        count: 0,
        required: ext.required,
    }
}

fn substitution_record(key: &str, ext: SubstitutionExtension) -> SubstitutionRecord {
    SubstitutionRecord {
        name: ext.name.as_ref().map_or_else(
            || bare_name(key, SUBSTITUTION_DEFINITION_PREFIX),
            scalar_text,
        ),
        pattern: optional_text(ext.pattern.as_ref()),
        values: ext
            .values
            .iter()
            .map(|v| ComponentRef::new(scalar_text(&v.reference)))
            .collect(),
    }
}

fn bare_name(key: &str, kind_prefix: &str) -> String {
    key.strip_prefix(kind_prefix).unwrap_or(key).to_string()
}

fn optional_text(value: Option<&Value>) -> String {
    value.map(scalar_text).unwrap_or_default()
}

/// Text of a YAML scalar as it would appear in the file
fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
