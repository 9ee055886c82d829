//! Identifier lookups against the effective configuration

use colored::Colorize;
use warpack_core::{ExtraResource, ResourceIndex, WarResource};

use super::resolve_build;
use crate::cli::SourceArgs;
use crate::error::{CliError, Result};

/// Run the plugin lookup command
pub fn run_plugin(artifact_id: &str, source: &SourceArgs) -> Result<()> {
    let build = resolve_build(source)?;
    let index = ResourceIndex::build(build.config());

    let plugin = index
        .find_plugin(artifact_id)
        .ok_or_else(|| CliError::user(format!("Plugin '{}' is not part of this build", artifact_id)))?;

    println!("{}", plugin.coordinates().green());
    if let Some(src) = &plugin.source {
        if let Some(git) = &src.git {
            println!("  {} {}", "git:".dimmed(), git);
        }
        if let Some(commit) = &src.commit {
            println!("  {} {}", "commit:".dimmed(), commit);
        }
        if let Some(dir) = &src.dir {
            println!("  {} {}", "dir:".dimmed(), dir);
        }
    }
    Ok(())
}

/// Run the resource lookup command
pub fn run_resource(id: &str, source: &SourceArgs) -> Result<()> {
    let build = resolve_build(source)?;
    let index = ResourceIndex::build(build.config());

    let resource = index
        .find_resource_by_id(id)
        .ok_or_else(|| CliError::user(format!("No hook or CasC fragment with id '{}'", id)))?;

    let kind = match resource {
        ExtraResource::Hook(hook) => format!("groovy hook ({})", hook.hook_type),
        ExtraResource::Casc(_) => "casc".to_string(),
    };
    println!("{} {}", id.green(), kind.dimmed());

    let src = resource.source();
    for (label, value) in [("dir:", &src.dir), ("git:", &src.git), ("commit:", &src.commit)] {
        if let Some(value) = value {
            println!("  {} {}", label.dimmed(), value);
        }
    }
    Ok(())
}
