use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::{CascConfig, DependencyInfo, GroovyHookInfo};
use crate::{Error, Result};

fn default_tmp_dir() -> PathBuf {
    PathBuf::from("tmp")
}

fn default_version() -> String {
    "1.0-SNAPSHOT".to_string()
}

/// Docker image build settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockerBuildSettings {
    /// Base image
    pub base: String,
    pub tag: String,
    #[serde(default)]
    pub build: bool,
}

/// Build parameters; defaulted when the document omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSettings {
    /// Working directory for the build and its outputs
    #[serde(default = "default_tmp_dir")]
    pub tmp_dir: PathBuf,

    /// Version stamped on the produced artifact
    #[serde(default = "default_version")]
    pub version: String,

    /// BOM document to apply on top of this configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bom: Option<PathBuf>,

    /// BOM environment to apply together with `bom`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mvn_settings_file: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pom: Option<PathBuf>,

    #[serde(default)]
    pub pom_ignore_root: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docker: Option<DockerBuildSettings>,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            tmp_dir: default_tmp_dir(),
            version: default_version(),
            bom: None,
            environment: None,
            mvn_settings_file: None,
            pom: None,
            pom_ignore_root: false,
            docker: None,
        }
    }
}

/// Identity of the produced bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Root of the packaging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub build_settings: BuildSettings,

    /// Bundle identity. May be left to the BOM metadata; required once a build starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle: Option<PackageInfo>,

    /// Core WAR. Required once a build starts; a BOM always replaces it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub war: Option<DependencyInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<DependencyInfo>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lib_patches: Option<Vec<DependencyInfo>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lib_excludes: Option<Vec<DependencyInfo>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_properties: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groovy_hooks: Option<Vec<GroovyHookInfo>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub casc: Option<Vec<CascConfig>>,
}

impl Config {
    /// Minimal configuration for the given bundle identity.
    pub fn new(bundle: PackageInfo) -> Self {
        Self {
            build_settings: BuildSettings::default(),
            bundle: Some(bundle),
            war: None,
            plugins: None,
            lib_patches: None,
            lib_excludes: None,
            system_properties: None,
            groovy_hooks: None,
            casc: None,
        }
    }

    /// The core WAR dependency, or `MissingCore` naming `origin`.
    pub fn core_dependency(&self, origin: impl Into<PathBuf>) -> Result<&DependencyInfo> {
        self.war.as_ref().ok_or_else(|| Error::MissingCore {
            path: origin.into(),
        })
    }

    /// The bundle identity, or `MissingBundle` naming `origin`.
    pub fn bundle_identity(&self, origin: impl Into<PathBuf>) -> Result<&PackageInfo> {
        self.bundle.as_ref().ok_or_else(|| Error::MissingBundle {
            path: origin.into(),
        })
    }

    /// Render the configuration as a YAML document.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
