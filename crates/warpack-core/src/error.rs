//! Error types for warpack-core

use std::path::PathBuf;

/// Result type for warpack-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort configuration resolution
///
/// All of these are deterministic validation failures. None of them leave a
/// partially resolved configuration behind.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed or incomplete indirection document
    #[error("Invalid configuration document {path}: {message}")]
    ConfigFormat { path: PathBuf, message: String },

    /// Source path missing or not a regular file
    #[error("Cannot find the configuration file {path}")]
    FileNotFound { path: PathBuf },

    /// Requested BOM environment is not declared
    #[error(
        "Environment '{name}' is not defined in BOM {bom}; available environments: [{}]",
        .available.join(", ")
    )]
    EnvironmentNotFound {
        name: String,
        bom: String,
        available: Vec<String>,
    },

    /// An environment was requested without a BOM to take it from
    #[error("Environment '{name}' was requested but no BOM is configured for {path}")]
    EnvironmentWithoutBom { name: String, path: PathBuf },

    /// Pointer chain revisits a source or exceeds the hop limit
    #[error("Indirection cycle at {path}: {reason} (chain: {})", .chain.join(" -> "))]
    IndirectionCycle {
        path: PathBuf,
        chain: Vec<String>,
        reason: String,
    },

    /// No core WAR dependency after resolution
    #[error("Configuration {path} does not declare a core WAR and no BOM supplied one")]
    MissingCore { path: PathBuf },

    /// No bundle identity after resolution
    #[error("Configuration {path} does not declare a bundle and no BOM metadata supplied one")]
    MissingBundle { path: PathBuf },

    /// Source reading or parsing error from warpack-fs
    #[error(transparent)]
    Fs(#[from] warpack_fs::Error),

    /// YAML serialization error
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
