//! Bill of Materials model
//!
//! A BOM pins the core WAR and every plugin and component by version. It may
//! also carry named environments whose references are appended on top of the
//! base specification when selected.
//!
//! ```yaml
//! metadata:
//!   name: custom-war
//!   labels:
//!     groupId: io.jenkins.tools.demo
//! spec:
//!   core:
//!     version: "2.300"
//!   plugins:
//!     - groupId: org.jenkins-ci.plugins
//!       artifactId: matrix-project
//!       version: "1.9"
//!   environments:
//!     prod:
//!       plugins:
//!         - groupId: org.jenkins-ci.plugins
//!           artifactId: audit-trail
//!           version: "3.10"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use warpack_fs::{ConfigStore, Format, NormalizedPath};

use crate::model::{DependencyInfo, PackageInfo, SourceInfo};
use crate::{Error, Result};

pub const DEFAULT_CORE_GROUP_ID: &str = "org.jenkins-ci.main";
pub const DEFAULT_CORE_ARTIFACT_ID: &str = "jenkins-war";
pub const DEFAULT_BUNDLE_GROUP_ID: &str = "io.jenkins.tools.war-packager.build";

/// A named coordinate inside a BOM
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentReference {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<String>,
    /// Git ref (commit, tag or branch head)
    #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

fn source_of(
    version: &Option<String>,
    git: &Option<String>,
    git_ref: &Option<String>,
    dir: &Option<String>,
) -> Option<SourceInfo> {
    if version.is_none() && git.is_none() && git_ref.is_none() && dir.is_none() {
        return None;
    }
    Some(SourceInfo {
        version: version.clone(),
        git: git.clone(),
        branch: None,
        commit: git_ref.clone(),
        dir: dir.clone(),
    })
}

impl ComponentReference {
    pub fn to_dependency_info(&self) -> DependencyInfo {
        DependencyInfo {
            group_id: self.group_id.clone(),
            artifact_id: self.artifact_id.clone(),
            source: source_of(&self.version, &self.git, &self.git_ref, &self.dir),
        }
    }
}

/// Core WAR reference; identity defaults to `org.jenkins-ci.main:jenkins-war`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git: Option<String>,
    #[serde(default, rename = "ref", skip_serializing_if = "Option::is_none")]
    pub git_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

impl CoreReference {
    pub fn to_war_dependency_info(&self) -> DependencyInfo {
        DependencyInfo {
            group_id: self
                .group_id
                .clone()
                .unwrap_or_else(|| DEFAULT_CORE_GROUP_ID.to_string()),
            artifact_id: self
                .artifact_id
                .clone()
                .unwrap_or_else(|| DEFAULT_CORE_ARTIFACT_ID.to_string()),
            source: source_of(&self.version, &self.git, &self.git_ref, &self.dir),
        }
    }
}

/// Named overlay selected at override time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    #[serde(default)]
    pub plugins: Vec<ComponentReference>,
    #[serde(default)]
    pub components: Vec<ComponentReference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub core: CoreReference,
    #[serde(default)]
    pub plugins: Vec<ComponentReference>,
    #[serde(default)]
    pub components: Vec<ComponentReference>,
    #[serde(default)]
    pub environments: BTreeMap<String, Environment>,
}

impl Specification {
    pub fn environment(&self, name: &str) -> Option<&Environment> {
        self.environments.get(name)
    }

    /// Declared environment names, sorted.
    pub fn environment_names(&self) -> Vec<String> {
        self.environments.keys().cloned().collect()
    }
}

/// BOM metadata, convertible into the bundle identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

impl Metadata {
    /// Derive a complete bundle identity. Every field comes from the BOM;
    /// nothing is carried over from an existing bundle.
    pub fn to_package_info(&self) -> PackageInfo {
        PackageInfo {
            group_id: self
                .labels
                .get("groupId")
                .cloned()
                .unwrap_or_else(|| DEFAULT_BUNDLE_GROUP_ID.to_string()),
            artifact_id: self.name.clone(),
            vendor: self.labels.get("vendor").cloned(),
            title: self.annotations.get("title").cloned(),
            description: self.annotations.get("description").cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bom {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    pub spec: Specification,
    /// Where the document was read from, for error messages
    #[serde(skip)]
    pub origin: Option<NormalizedPath>,
}

impl Bom {
    /// Load a BOM document; the format follows the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = NormalizedPath::new(path);
        if !path.is_file() {
            return Err(Error::FileNotFound {
                path: path.to_native(),
            });
        }
        let mut bom: Bom = ConfigStore::new().load(&path)?;
        tracing::debug!(%path, plugins = bom.spec.plugins.len(), "Loaded BOM");
        bom.origin = Some(path);
        Ok(bom)
    }

    /// Parse a BOM from YAML text not backed by a file.
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(Format::Yaml.parse(content, &NormalizedPath::new("<inline>.yml"))?)
    }

    /// Human-readable origin of this BOM.
    pub fn origin_name(&self) -> String {
        match &self.origin {
            Some(path) => path.to_string(),
            None => "<inline>".to_string(),
        }
    }

    /// Look up an environment, failing with the list of declared ones.
    pub fn environment(&self, name: &str) -> Result<&Environment> {
        self.spec
            .environment(name)
            .ok_or_else(|| Error::EnvironmentNotFound {
                name: name.to_string(),
                bom: self.origin_name(),
                available: self.spec.environment_names(),
            })
    }
}
