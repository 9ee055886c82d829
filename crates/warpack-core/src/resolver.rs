//! Build-level resolution: load, apply the BOM once, hand off.
//!
//! The `ConfigResolver` is the only place that invokes the BOM override. The
//! result is wrapped in a [`ResolvedBuild`] that exposes the effective
//! configuration read-only, so nothing downstream can mutate it.

use std::path::{Path, PathBuf};
use warpack_fs::NormalizedPath;

use crate::bom::Bom;
use crate::loader::{ConfigLoader, DEMO_CONFIG_ORIGIN, source_dir};
use crate::model::Config;
use crate::overlay::override_by_bom;
use crate::paths::{output_artifact_path, output_manifest_path};
use crate::{Error, Result};

/// Caller-supplied choices that take precedence over `buildSettings`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOverrides {
    /// BOM document; used as given, not resolved against the config directory
    pub bom: Option<PathBuf>,
    pub environment: Option<String>,
}

/// Effective configuration of one build plus its output locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBuild {
    config: Config,
    bom: Option<Bom>,
    environment: Option<String>,
    artifact_path: PathBuf,
    manifest_path: PathBuf,
}

impl ResolvedBuild {
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The BOM that was applied, if any.
    pub fn bom(&self) -> Option<&Bom> {
        self.bom.as_ref()
    }

    pub fn environment(&self) -> Option<&str> {
        self.environment.as_deref()
    }

    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Take an owned copy of the configuration for a collaborator.
    pub fn into_config(self) -> Config {
        self.config
    }
}

/// Resolves the effective configuration for a build.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    loader: ConfigLoader,
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loader(loader: ConfigLoader) -> Self {
        Self { loader }
    }

    /// Load `config_path` and apply the BOM selected by `overrides` or by the
    /// configuration's own `buildSettings.bom` / `buildSettings.environment`.
    ///
    /// A BOM path taken from `buildSettings` is resolved against the
    /// directory of `config_path`.
    pub fn resolve(
        &self,
        config_path: impl AsRef<Path>,
        overrides: &BuildOverrides,
    ) -> Result<ResolvedBuild> {
        let config_path = config_path.as_ref();
        let config = self.loader.load_config(config_path)?;
        self.finish(config, config_path, &source_dir(config_path), overrides)
    }

    /// Resolve the bundled sample configuration.
    pub fn resolve_demo(&self, overrides: &BuildOverrides) -> Result<ResolvedBuild> {
        let config = self.loader.load_demo_config()?;
        self.finish(config, Path::new(DEMO_CONFIG_ORIGIN), Path::new("."), overrides)
    }

    fn finish(
        &self,
        config: Config,
        origin: &Path,
        base_dir: &Path,
        overrides: &BuildOverrides,
    ) -> Result<ResolvedBuild> {
        let bom_path = match &overrides.bom {
            Some(path) => Some(path.clone()),
            None => config.build_settings.bom.as_ref().map(|path| {
                NormalizedPath::new(path)
                    .resolve_against(&NormalizedPath::new(base_dir))
                    .to_native()
            }),
        };
        let environment = overrides
            .environment
            .clone()
            .or_else(|| config.build_settings.environment.clone());

        let (effective, bom) = match bom_path {
            Some(bom_path) => {
                tracing::debug!(bom = %bom_path.display(), ?environment, "Applying BOM");
                let bom = Bom::load(&bom_path)?;
                let effective = override_by_bom(&config, &bom, environment.as_deref())?;
                (effective, Some(bom))
            }
            None => {
                if let Some(name) = &environment {
                    return Err(Error::EnvironmentWithoutBom {
                        name: name.clone(),
                        path: origin.to_path_buf(),
                    });
                }
                (config, None)
            }
        };

        effective.core_dependency(origin)?;
        let bundle = effective.bundle_identity(origin)?;
        let artifact_path = output_artifact_path(&effective.build_settings, bundle);
        let manifest_path = output_manifest_path(&effective.build_settings, bundle);

        Ok(ResolvedBuild {
            artifact_path,
            manifest_path,
            config: effective,
            bom,
            environment,
        })
    }
}
