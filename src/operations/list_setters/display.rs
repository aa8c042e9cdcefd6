//! Report tables for setters and substitutions

use crate::common::string_utils::{bracket_list, yes_no};
use crate::domain::{SetterRecord, SubstitutionRecord};
use crate::ui::{TableFormat, render};

pub const SETTER_HEADERS: [&str; 6] = ["NAME", "VALUE", "SET BY", "DESCRIPTION", "COUNT", "REQUIRED"];

pub const SUBSTITUTION_HEADERS: [&str; 3] = ["SUBSTITUTION", "PATTERN", "REFERENCES"];

/// Table cells for one setter
pub fn setter_row(setter: &SetterRecord) -> Vec<String> {
    let value = if setter.is_list() {
        bracket_list(&setter.list_values)
    } else {
        setter.value.clone()
    };

    vec![
        setter.name.clone(),
        value,
        setter.set_by.clone(),
        setter.description.clone(),
        setter.count.to_string(),
        yes_no(setter.required).to_string(),
    ]
}

/// Table cells for one substitution, references shown without their prefixes
pub fn substitution_row(substitution: &SubstitutionRecord) -> Vec<String> {
    vec![
        substitution.name.clone(),
        substitution.pattern.clone(),
        bracket_list(substitution.values.iter().map(|v| v.display_ref())),
    ]
}

/// Setters table; the header is printed even when there are no setters
pub fn setters_table(setters: &[SetterRecord], format: TableFormat) -> String {
    let rows: Vec<Vec<String>> = setters.iter().map(setter_row).collect();
    render(&SETTER_HEADERS, &rows, format)
}

/// Substitutions table; empty when there are no substitutions
pub fn substitutions_table(substitutions: &[SubstitutionRecord], format: TableFormat) -> String {
    if substitutions.is_empty() {
        return String::new();
    }
    let rows: Vec<Vec<String>> = substitutions.iter().map(substitution_row).collect();
    render(&SUBSTITUTION_HEADERS, &rows, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ComponentRef;

    fn replicas() -> SetterRecord {
        SetterRecord {
            name: "replicas".to_string(),
            value: "3".to_string(),
            set_by: "me".to_string(),
            description: "hello world".to_string(),
            count: 1,
            required: true,
            ..SetterRecord::default()
        }
    }

    fn image() -> SubstitutionRecord {
        SubstitutionRecord {
            name: "image".to_string(),
            pattern: "${image-name}:${image-tag}".to_string(),
            values: vec![
                ComponentRef::new("#/definitions/io.k8s.cli.setters.image-name"),
                ComponentRef::new("#/definitions/io.k8s.cli.substitutions.image-tag"),
            ],
        }
    }

    #[test]
    fn test_setter_row() {
        assert_eq!(
            setter_row(&replicas()),
            vec!["replicas", "3", "me", "hello world", "1", "Yes"]
        );
    }

    #[test]
    fn test_list_setter_row() {
        let args = SetterRecord {
            name: "args".to_string(),
            list_values: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            ..SetterRecord::default()
        };
        assert_eq!(setter_row(&args), vec!["args", "[a,b,c]", "", "", "0", "No"]);
    }

    #[test]
    fn test_substitution_row_normalizes_refs() {
        assert_eq!(
            substitution_row(&image()),
            vec!["image", "${image-name}:${image-tag}", "[image-name,image-tag]"]
        );
    }

    #[test]
    fn test_substitution_row_keeps_foreign_refs() {
        let odd = SubstitutionRecord {
            name: "odd".to_string(),
            pattern: "${x}".to_string(),
            values: vec![ComponentRef::new("#/definitions/other.x")],
        };
        assert_eq!(substitution_row(&odd)[2], "[#/definitions/other.x]");
    }

    #[test]
    fn test_empty_setters_table_has_header() {
        let out = setters_table(&[], TableFormat::Plain);
        assert_eq!(out, "NAME VALUE SET BY DESCRIPTION COUNT REQUIRED\n");
    }

    #[test]
    fn test_empty_substitutions_table_is_suppressed() {
        assert!(substitutions_table(&[], TableFormat::Plain).is_empty());
        assert!(substitutions_table(&[], TableFormat::Markdown).is_empty());
    }

    #[test]
    fn test_setters_table_plain() {
        let out = setters_table(&[replicas()], TableFormat::Plain);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            vec!["replicas", "3", "me", "hello", "world", "1", "Yes"]
        );
    }

    #[test]
    fn test_substitutions_table_markdown() {
        let out = substitutions_table(&[image()], TableFormat::Markdown);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("| SUBSTITUTION |"));
        assert!(lines[1].starts_with("|--------------|"));
        assert!(lines[2].contains("[image-name,image-tag]"));
    }
}
