//! Common test utilities for cfgmeta integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Metadata file with one required setter, one list setter and one substitution
#[allow(dead_code)]
pub const FULL_KRMFILE: &str = r#"apiVersion: config.k8s.io/v1alpha1
kind: Krmfile
openAPI:
  definitions:
    io.k8s.cli.setters.replicas:
      description: hello world
      x-k8s-cli:
        setter:
          name: replicas
          value: "3"
          setBy: me
          required: true
    io.k8s.cli.setters.args:
      x-k8s-cli:
        setter:
          name: args
          listValues: ["a", "b", "c"]
    io.k8s.cli.setters.image-tag:
      x-k8s-cli:
        setter:
          name: image-tag
          value: 1.7.9
    io.k8s.cli.substitutions.image:
      x-k8s-cli:
        substitution:
          name: image
          pattern: nginx:${image-tag}
          values:
          - marker: ${image-tag}
            ref: '#/definitions/io.k8s.cli.setters.image-tag'
"#;

/// Metadata file without any definitions
#[allow(dead_code)]
pub const EMPTY_KRMFILE: &str = "apiVersion: config.k8s.io/v1alpha1\nkind: Krmfile\n";

/// Deployment referencing `replicas` directly and `image-tag` through `image`
#[allow(dead_code)]
pub const DEPLOYMENT: &str = r#"apiVersion: apps/v1
kind: Deployment
metadata:
  name: nginx
spec:
  replicas: 3 # {"$openapi":"replicas"}
  template:
    spec:
      containers:
      - name: nginx
        image: nginx:1.7.9 # {"$openapi":"image"}
"#;

/// A temporary directory tree for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the tree root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new empty tree
    #[allow(dead_code)]
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the tree, creating parent directories
    #[allow(dead_code)]
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Create a package directory holding a `Krmfile` with `content`
    #[allow(dead_code)]
    pub fn create_package(&self, dir: &str, content: &str) -> PathBuf {
        self.write_file(&format!("{dir}/Krmfile"), content);
        self.path.join(dir)
    }

    /// Path of `rel` inside the tree as printed in report headers
    #[allow(dead_code)]
    pub fn header(&self, rel: &str) -> String {
        let dir = if rel.is_empty() {
            self.path.clone()
        } else {
            self.path.join(rel)
        };
        format!("{}/", dir.display())
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the cfgmeta binary with environment overrides cleared
#[allow(deprecated)]
pub fn cfgmeta_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cfgmeta").expect("cfgmeta binary should be built");
    cmd.env_remove("CFGMETA_OPENAPI_FILE");
    cmd.env_remove("CFGMETA_FAIL_ON_EMPTY");
    cmd
}
