//! Commands that print the effective configuration

use colored::Colorize;
use warpack_core::{BuildOverrides, Config, ConfigResolver};

use super::resolve_build;
use crate::cli::SourceArgs;
use crate::error::Result;

fn render(config: &Config, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(config)?)
    } else {
        Ok(config.to_yaml()?)
    }
}

/// Run the resolve command
pub fn run_resolve(source: &SourceArgs, json: bool) -> Result<()> {
    let build = resolve_build(source)?;
    if let Some(bom) = build.bom() {
        tracing::debug!(bom = %bom.origin_name(), environment = ?build.environment(), "BOM applied");
    }
    println!("{}", render(build.config(), json)?);
    Ok(())
}

/// Run the paths command
pub fn run_paths(source: &SourceArgs) -> Result<()> {
    let build = resolve_build(source)?;
    println!("{} {}", "war:".green().bold(), build.artifact_path().display());
    println!("{} {}", "bom:".green().bold(), build.manifest_path().display());
    Ok(())
}

/// Run the demo command
pub fn run_demo(json: bool) -> Result<()> {
    let build = ConfigResolver::new().resolve_demo(&BuildOverrides::default())?;
    println!("{}", render(build.config(), json)?);
    Ok(())
}
