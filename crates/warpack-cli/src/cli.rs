//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use warpack_core::BuildOverrides;

/// WAR packager - resolve the effective packaging configuration
#[derive(Parser, Debug)]
#[command(name = "warpack")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Inputs shared by every resolving command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SourceArgs {
    /// Configuration file (`essentials.yml` is read as a pointer document)
    #[arg(short, long, env = "WARPACK_CONFIG", default_value = "packager-config.yml")]
    pub config: PathBuf,

    /// BOM to apply, overriding `buildSettings.bom`
    #[arg(short, long, env = "WARPACK_BOM")]
    pub bom: Option<PathBuf>,

    /// BOM environment to apply, overriding `buildSettings.environment`
    #[arg(short, long, env = "WARPACK_ENVIRONMENT")]
    pub environment: Option<String>,

    /// Maximum number of `configFile` references to follow
    #[arg(long, default_value_t = warpack_core::DEFAULT_MAX_INDIRECTION_HOPS)]
    pub max_hops: usize,
}

impl SourceArgs {
    pub fn overrides(&self) -> BuildOverrides {
        BuildOverrides {
            bom: self.bom.clone(),
            environment: self.environment.clone(),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the effective configuration
    ///
    /// Examples:
    ///   warpack resolve -c packager-config.yml
    ///   warpack resolve -c essentials.yml -b bom.yml -e prod
    Resolve {
        #[command(flatten)]
        source: SourceArgs,

        /// Output as JSON instead of YAML
        #[arg(long)]
        json: bool,
    },

    /// Print the output WAR and BOM manifest paths
    Paths {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Look up a plugin in the effective configuration
    Plugin {
        /// Plugin artifact id
        artifact_id: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Look up a Groovy hook or CasC fragment by id
    Resource {
        /// Resource id
        id: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Resolve the bundled sample configuration
    Demo {
        /// Output as JSON instead of YAML
        #[arg(long)]
        json: bool,
    },
}
