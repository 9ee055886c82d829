//! Configuration loading with pointer-document indirection
//!
//! Two document shapes are accepted, told apart by file name:
//!
//! - a direct configuration (any name; JSON/TOML by extension, YAML otherwise)
//! - an `essentials.yml` pointer document whose `packaging` section either
//!   embeds the configuration (`config`) or names another file (`configFile`)
//!
//! ```yaml
//! # essentials.yml
//! packaging:
//!   configFile: packager-config.yml
//! ```
//!
//! A `configFile` is loaded through the same entry point, so it may itself be
//! a pointer document. Every followed reference counts as one hop; revisiting
//! a source or going past the hop limit fails with `IndirectionCycle`.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use warpack_fs::{ConfigStore, Format, NormalizedPath, RobustnessConfig};

use crate::model::Config;
use crate::{Error, Result};

/// File name that marks a pointer document.
pub const ESSENTIALS_FILENAME: &str = "essentials.yml";

/// One level of indirection unless configured otherwise.
pub const DEFAULT_MAX_INDIRECTION_HOPS: usize = 1;

const DEMO_CONFIG: &str = include_str!("../resources/sample.yml");
pub(crate) const DEMO_CONFIG_ORIGIN: &str = "<bundled>/sample.yml";

#[derive(Debug, Deserialize)]
struct EssentialsDocument {
    #[serde(default)]
    packaging: Option<PackagingSection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackagingSection {
    #[serde(default)]
    config: Option<Config>,
    #[serde(default)]
    config_file: Option<String>,
}

/// Loader settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Maximum number of `configFile` references followed from the first source
    pub max_indirection_hops: usize,
    /// Retry policy for reading sources
    pub robustness: RobustnessConfig,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            max_indirection_hops: DEFAULT_MAX_INDIRECTION_HOPS,
            robustness: RobustnessConfig::default(),
        }
    }
}

/// Sources visited while following pointer documents
#[derive(Debug)]
struct IndirectionTrail {
    visited: Vec<(String, NormalizedPath)>,
    hops: usize,
    max_hops: usize,
}

impl IndirectionTrail {
    fn new(max_hops: usize) -> Self {
        Self {
            visited: Vec::new(),
            hops: 0,
            max_hops,
        }
    }

    fn chain_with(&self, next: &NormalizedPath) -> Vec<String> {
        self.visited
            .iter()
            .map(|(_, path)| path.to_string())
            .chain(std::iter::once(next.to_string()))
            .collect()
    }

    fn visit(&mut self, source: &NormalizedPath) {
        self.visited.push((source.canonical_key(), source.clone()));
    }

    /// Account for following a reference to `target`.
    ///
    /// Revisits are reported before the hop limit.
    fn follow(&mut self, target: &NormalizedPath) -> Result<()> {
        let key = target.canonical_key();
        if self.visited.iter().any(|(visited, _)| *visited == key) {
            return Err(Error::IndirectionCycle {
                path: target.to_native(),
                chain: self.chain_with(target),
                reason: "source is referenced twice".to_string(),
            });
        }
        self.hops += 1;
        if self.hops > self.max_hops {
            return Err(Error::IndirectionCycle {
                path: target.to_native(),
                chain: self.chain_with(target),
                reason: format!("more than {} indirection hop(s)", self.max_hops),
            });
        }
        Ok(())
    }
}

fn is_essentials(origin: &NormalizedPath) -> bool {
    origin.file_name() == Some(ESSENTIALS_FILENAME)
}

/// Loads [`Config`] trees from direct or pointer documents.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    store: ConfigStore,
    options: LoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LoaderOptions) -> Self {
        Self {
            store: ConfigStore::with_robustness(options.robustness),
            options,
        }
    }

    /// Load a configuration file; `essentials.yml` is treated as a pointer document.
    ///
    /// Fails with `FileNotFound` if the path does not exist or is not a regular file.
    pub fn load_config(&self, path: impl AsRef<Path>) -> Result<Config> {
        let path = NormalizedPath::new(path);
        let mut trail = IndirectionTrail::new(self.options.max_indirection_hops);
        self.load_path(&path, &mut trail)
    }

    /// Load a configuration from text. `origin` selects the format by name and
    /// anchors relative `configFile` references.
    pub fn load(&self, content: &str, origin: impl AsRef<Path>) -> Result<Config> {
        let origin = NormalizedPath::new(origin);
        let mut trail = IndirectionTrail::new(self.options.max_indirection_hops);
        self.load_source(content, &origin, &mut trail)
    }

    /// Load the bundled sample configuration.
    pub fn load_demo_config(&self) -> Result<Config> {
        tracing::warn!(
            origin = DEMO_CONFIG_ORIGIN,
            "Loading the bundled sample configuration"
        );
        self.load(DEMO_CONFIG, DEMO_CONFIG_ORIGIN)
    }

    fn load_path(&self, path: &NormalizedPath, trail: &mut IndirectionTrail) -> Result<Config> {
        if !path.is_file() {
            return Err(Error::FileNotFound {
                path: path.to_native(),
            });
        }
        let content = self.store.read(path)?;
        self.load_source(&content, path, trail)
    }

    fn load_source(
        &self,
        content: &str,
        origin: &NormalizedPath,
        trail: &mut IndirectionTrail,
    ) -> Result<Config> {
        trail.visit(origin);
        if is_essentials(origin) {
            tracing::info!(%origin, "Loading from the essentials.yml format");
            self.resolve_essentials(content, origin, trail)
        } else {
            tracing::debug!(%origin, "Loading direct configuration");
            let format = Format::from_path(origin).unwrap_or_else(|_| {
                tracing::debug!(%origin, "No recognised extension; reading as YAML");
                Format::Yaml
            });
            Ok(format.parse(content, origin)?)
        }
    }

    fn resolve_essentials(
        &self,
        content: &str,
        origin: &NormalizedPath,
        trail: &mut IndirectionTrail,
    ) -> Result<Config> {
        let document: EssentialsDocument = Format::Yaml.parse(content, origin)?;
        let packaging = document.packaging.ok_or_else(|| Error::ConfigFormat {
            path: origin.to_native(),
            message: "essentials.yml does not have the packaging section".to_string(),
        })?;

        match (packaging.config, packaging.config_file) {
            (Some(config), config_file) => {
                if let Some(config_file) = config_file {
                    tracing::warn!(
                        %origin,
                        %config_file,
                        "Both packaging.config and packaging.configFile are set; using the inline config"
                    );
                }
                Ok(config)
            }
            (None, Some(config_file)) => {
                let base = origin.parent().unwrap_or_else(|| NormalizedPath::new("."));
                let target = NormalizedPath::new(&config_file).resolve_against(&base);
                tracing::info!(%origin, %target, "Loading config from external file defined in essentials.yml");
                trail.follow(&target)?;
                self.load_path(&target, trail)
            }
            (None, None) => Err(Error::ConfigFormat {
                path: origin.to_native(),
                message: "essentials.yml does not have `packaging.config` or `packaging.configFile`"
                    .to_string(),
            }),
        }
    }
}

/// Load a configuration file with default loader options.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    ConfigLoader::new().load_config(path)
}

/// Load the bundled sample configuration with default loader options.
pub fn load_demo_config() -> Result<Config> {
    ConfigLoader::new().load_demo_config()
}

/// Directory that relative paths inside `config_path` resolve against.
pub(crate) fn source_dir(config_path: &Path) -> PathBuf {
    NormalizedPath::new(config_path)
        .parent()
        .map(|p| p.to_native())
        .unwrap_or_else(|| PathBuf::from("."))
}
