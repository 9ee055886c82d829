//! Format-agnostic document loading

use crate::{Error, NormalizedPath, Result, io};
use serde::de::DeserializeOwned;

/// Serialization format of a configuration or BOM document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}

impl Format {
    /// Detect the format from a file extension.
    ///
    /// - `.yml`, `.yaml` -> YAML
    /// - `.json` -> JSON
    /// - `.toml` -> TOML
    pub fn from_path(path: &NormalizedPath) -> Result<Self> {
        let extension = path.extension().unwrap_or("");
        match extension.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Toml => "TOML",
        }
    }

    /// Deserialize `content`; `origin` names the source in error messages.
    pub fn parse<T: DeserializeOwned>(&self, content: &str, origin: &NormalizedPath) -> Result<T> {
        let parsed = match self {
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::ConfigParse {
            path: origin.to_native(),
            format: self.name().into(),
            message,
        })
    }
}

/// Reads documents from disk and deserializes them by extension.
#[derive(Debug, Default, Clone)]
pub struct ConfigStore {
    robustness: io::RobustnessConfig,
}

impl ConfigStore {
    /// Create a new ConfigStore with default robustness settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new ConfigStore with custom robustness settings.
    pub fn with_robustness(robustness: io::RobustnessConfig) -> Self {
        Self { robustness }
    }

    /// Read the raw text of a source.
    pub fn read(&self, path: &NormalizedPath) -> Result<String> {
        io::read_text_with(path, self.robustness)
    }

    /// Load and deserialize a document, detecting the format from its extension.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let format = Format::from_path(path)?;
        let content = self.read(path)?;
        tracing::debug!(%path, format = format.name(), "Parsing document");
        format.parse(&content, path)
    }
}
