//! Command implementations for warpack-cli

pub mod lookup;
pub mod resolve;

pub use lookup::{run_plugin, run_resource};
pub use resolve::{run_demo, run_paths, run_resolve};

use warpack_core::{ConfigLoader, ConfigResolver, LoaderOptions, ResolvedBuild};

use crate::cli::SourceArgs;
use crate::error::Result;

/// Resolve the build described by `source`.
pub(crate) fn resolve_build(source: &SourceArgs) -> Result<ResolvedBuild> {
    let loader = ConfigLoader::with_options(LoaderOptions {
        max_indirection_hops: source.max_hops,
        ..LoaderOptions::default()
    });
    let build = ConfigResolver::with_loader(loader).resolve(&source.config, &source.overrides())?;
    Ok(build)
}
