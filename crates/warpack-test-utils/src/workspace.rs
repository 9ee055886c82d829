//! [`TestWorkspace`] builder for on-disk configuration fixtures.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding packager documents.
///
/// # Example
///
/// ```rust,no_run
/// use warpack_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::new();
/// let config = ws.write_config("packager-config.yml", "custom-war");
/// let pointer = ws.write_essentials_pointer("essentials.yml", "packager-config.yml");
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the workspace.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a minimal direct configuration for bundle `artifact_id` with one
    /// plugin, one lib patch and one lib exclude.
    pub fn write_config(&self, relative: &str, artifact_id: &str) -> PathBuf {
        self.write(relative, &direct_config(artifact_id))
    }

    /// Write an `essentials.yml` that points at `config_file`.
    pub fn write_essentials_pointer(&self, relative: &str, config_file: &str) -> PathBuf {
        self.write(
            relative,
            &format!("packaging:\n  configFile: \"{config_file}\"\n"),
        )
    }

    /// Write an `essentials.yml` embedding a direct configuration inline.
    pub fn write_essentials_inline(&self, relative: &str, artifact_id: &str) -> PathBuf {
        let inline = direct_config(artifact_id)
            .lines()
            .map(|line| format!("    {line}"))
            .collect::<Vec<_>>()
            .join("\n");
        self.write(relative, &format!("packaging:\n  config:\n{inline}\n"))
    }

    /// Write a BOM document.
    pub fn write_bom(&self, relative: &str, content: &str) -> PathBuf {
        self.write(relative, content)
    }
}

/// A direct configuration document for bundle `artifact_id`.
pub fn direct_config(artifact_id: &str) -> String {
    format!(
        r#"bundle:
  groupId: "io.jenkins.tools.test"
  artifactId: "{artifact_id}"
war:
  groupId: "org.jenkins-ci.main"
  artifactId: "jenkins-war"
  source:
    version: "2.200"
plugins:
  - groupId: "org.jenkins-ci.plugins"
    artifactId: "stale-plugin"
    source:
      version: "0.1"
libPatches:
  - groupId: "org.jenkins-ci.main"
    artifactId: "stale-patch"
    source:
      version: "0.1"
libExcludes:
  - groupId: "org.jenkins-ci.main"
    artifactId: "cli"
"#
    )
}

/// A BOM with two base plugins, one component, and `prod`/`dev` environments.
pub const SAMPLE_BOM: &str = r#"metadata:
  name: "custom-war"
  labels:
    groupId: "io.jenkins.tools.bom"
spec:
  core:
    version: "2.300"
  plugins:
    - groupId: "org.jenkins-ci.plugins"
      artifactId: "matrix-project"
      version: "1.9"
    - groupId: "org.jenkins-ci.plugins"
      artifactId: "git"
      version: "4.8.2"
  components:
    - groupId: "org.jenkins-ci.main"
      artifactId: "remoting"
      version: "4.10"
  environments:
    prod:
      plugins:
        - groupId: "org.jenkins-ci.plugins"
          artifactId: "audit-trail"
          version: "3.10"
      components:
        - groupId: "org.jenkins-ci.modules"
          artifactId: "sshd"
          version: "3.1"
    dev:
      plugins:
        - groupId: "org.jenkins-ci.plugins"
          artifactId: "job-dsl"
          version: "1.77"
"#;
