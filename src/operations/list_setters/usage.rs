//! Field reference counting
//!
//! Resource fields point at setters or substitutions with a trailing line
//! comment holding a small JSON object:
//!
//! ```yaml
//! spec:
//!   replicas: 3 # {"$openapi":"replicas"}
//! ```

use std::collections::HashMap;
use std::path::Path;
use walkdir::WalkDir;

/// Comment keys naming the referenced definition
pub const REFERENCE_KEYS: &[&str] = &["$openapi", "$kpt-set"];

/// Resource file extensions that are scanned
const RESOURCE_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Count field references by definition name for the package rooted at `dir`
///
/// Nested directories holding their own `marker_file` belong to another
/// package and are not descended into.
pub fn collect_references(dir: &Path, marker_file: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();

    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0 || !e.file_type().is_dir() || !e.path().join(marker_file).is_file()
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !is_resource_file(entry.path(), marker_file) {
            continue;
        }

        let content = match std::fs::read_to_string(entry.path()) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };
        for name in content.lines().filter_map(field_reference) {
            *counts.entry(name).or_insert(0) += 1;
        }
    }

    counts
}

fn is_resource_file(path: &Path, marker_file: &str) -> bool {
    if !path.is_file() || path.file_name().is_some_and(|n| n == marker_file) {
        return false;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| RESOURCE_EXTENSIONS.contains(&ext))
}

/// Definition name referenced by a line's comment, if any
pub fn field_reference(line: &str) -> Option<String> {
    comment_starts(line).find_map(|start| {
        let body = line[start + 1..].trim();
        if !body.starts_with('{') {
            return None;
        }
        let object: serde_json::Map<String, serde_json::Value> = serde_json::from_str(body).ok()?;
        REFERENCE_KEYS
            .iter()
            .find_map(|key| object.get(*key).and_then(|v| v.as_str()))
            .map(str::to_string)
    })
}

/// Byte offsets of `#` characters that can open a YAML comment
fn comment_starts(line: &str) -> impl Iterator<Item = usize> + '_ {
    line.char_indices().filter_map(move |(i, c)| {
        let opens = c == '#'
            && line[..i]
                .chars()
                .next_back()
                .is_none_or(char::is_whitespace);
        opens.then_some(i)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_field_reference() {
        assert_eq!(
            field_reference(r#"  replicas: 3 # {"$openapi":"replicas"}"#),
            Some("replicas".to_string())
        );
        assert_eq!(
            field_reference(r#"  image: nginx:1.7.9 # {"$kpt-set":"image"}"#),
            Some("image".to_string())
        );
    }

    #[test]
    fn test_field_reference_ignores_other_comments() {
        assert_eq!(field_reference("replicas: 3 # just a note"), None);
        assert_eq!(field_reference("replicas: 3"), None);
        assert_eq!(field_reference(r#"# {"other":"x"}"#), None);
        assert_eq!(field_reference(r#"url: http://x/#{"$openapi":"a"}"#), None);
    }

    #[test]
    fn test_field_reference_skips_hash_inside_value() {
        assert_eq!(
            field_reference(r#"color: "a #b" # {"$openapi":"color"}"#),
            Some("color".to_string())
        );
    }

    #[test]
    fn test_collect_references_skips_nested_packages() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        std::fs::write(root.join("Krmfile"), r#"# {"$openapi":"replicas"}"#).unwrap();
        std::fs::write(
            root.join("deploy.yaml"),
            "spec:\n  replicas: 3 # {\"$openapi\":\"replicas\"}\n",
        )
        .unwrap();
        std::fs::create_dir_all(root.join("more")).unwrap();
        std::fs::write(
            root.join("more/svc.yml"),
            "port: 80 # {\"$openapi\":\"replicas\"}\n",
        )
        .unwrap();
        std::fs::write(
            root.join("more/notes.txt"),
            "x # {\"$openapi\":\"replicas\"}\n",
        )
        .unwrap();
        std::fs::create_dir_all(root.join("sub")).unwrap();
        std::fs::write(root.join("sub/Krmfile"), "").unwrap();
        std::fs::write(
            root.join("sub/deploy.yaml"),
            "replicas: 1 # {\"$openapi\":\"replicas\"}\n",
        )
        .unwrap();

        let counts = collect_references(root, "Krmfile");
        assert_eq!(counts.get("replicas"), Some(&2));
    }
}
