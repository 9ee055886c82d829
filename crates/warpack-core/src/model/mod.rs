//! In-memory configuration tree
//!
//! A [`Config`] is produced once per build by the loader, optionally rewritten
//! once by the BOM override, and then only read. Optional collections are kept
//! as `Option<Vec<_>>` so that an absent section and an explicitly empty one
//! stay distinguishable.

mod config;
mod dependency;
mod resource;

pub use config::{BuildSettings, Config, DockerBuildSettings, PackageInfo};
pub use dependency::{DependencyInfo, SourceInfo};
pub use resource::{CascConfig, ExtraResource, GroovyHookInfo, WarResource};
