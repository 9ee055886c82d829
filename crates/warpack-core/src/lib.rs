//! Configuration resolution for the WAR packager
//!
//! Turns declarative sources into the single effective configuration a
//! packaging run consumes:
//!
//! - **Loading**: direct documents or `essentials.yml` pointer documents,
//!   with cycle and hop-limit protection ([`loader`])
//! - **BOM override**: the BOM replaces the core WAR, bundle identity,
//!   plugins and library patches, optionally extended by a named
//!   environment ([`overlay`])
//! - **Lookups**: plugins and auxiliary resources by identifier ([`index`])
//! - **Output paths**: where the WAR and its BOM manifest are written ([`paths`])
//!
//! ```text
//!   config.yml / essentials.yml        bom.yml
//!              |                          |
//!         ConfigLoader                   Bom
//!              \                        /
//!               +---- override_by_bom -+
//!                          |
//!                    ResolvedBuild  --> ResourceIndex, output paths
//! ```
//!
//! # Example
//!
//! ```no_run
//! use warpack_core::{BuildOverrides, ConfigResolver};
//!
//! let overrides = BuildOverrides {
//!     bom: Some("bom.yml".into()),
//!     environment: Some("prod".into()),
//! };
//! let build = ConfigResolver::new().resolve("packager-config.yml", &overrides)?;
//! println!("{}", build.artifact_path().display());
//! # Ok::<(), warpack_core::Error>(())
//! ```

pub mod bom;
pub mod error;
pub mod index;
pub mod loader;
pub mod model;
pub mod overlay;
pub mod paths;
pub mod resolver;

pub use bom::{Bom, ComponentReference, CoreReference, Environment, Metadata, Specification};
pub use error::{Error, Result};
pub use index::ResourceIndex;
pub use loader::{
    ConfigLoader, DEFAULT_MAX_INDIRECTION_HOPS, ESSENTIALS_FILENAME, LoaderOptions, load_config,
    load_demo_config,
};
pub use model::{
    BuildSettings, CascConfig, Config, DependencyInfo, DockerBuildSettings, ExtraResource,
    GroovyHookInfo, PackageInfo, SourceInfo, WarResource,
};
pub use overlay::override_by_bom;
pub use paths::{output_artifact_path, output_manifest_path};
pub use resolver::{BuildOverrides, ConfigResolver, ResolvedBuild};
