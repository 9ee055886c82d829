use serde::{Deserialize, Serialize};

use super::SourceInfo;

/// Capability shared by auxiliary resources bundled into the WAR.
///
/// Lookups by identifier go through this trait so that hooks and
/// configuration-as-code fragments can be searched as one sequence.
pub trait WarResource {
    /// Identifier used for lookups. Entries without one are never matched.
    fn resource_id(&self) -> Option<&str>;

    fn source(&self) -> &SourceInfo;
}

/// Groovy initialization hook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroovyHookInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Hook kind, e.g. `init` or `boot-failure`
    #[serde(rename = "type")]
    pub hook_type: String,

    pub source: SourceInfo,
}

/// Configuration-as-code fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub source: SourceInfo,
}

impl WarResource for GroovyHookInfo {
    fn resource_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn source(&self) -> &SourceInfo {
        &self.source
    }
}

impl WarResource for CascConfig {
    fn resource_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn source(&self) -> &SourceInfo {
        &self.source
    }
}

/// Borrowed view over any auxiliary resource of a [`Config`](super::Config).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraResource<'a> {
    Hook(&'a GroovyHookInfo),
    Casc(&'a CascConfig),
}

impl WarResource for ExtraResource<'_> {
    fn resource_id(&self) -> Option<&str> {
        match self {
            Self::Hook(hook) => hook.resource_id(),
            Self::Casc(casc) => casc.resource_id(),
        }
    }

    fn source(&self) -> &SourceInfo {
        match self {
            Self::Hook(hook) => hook.source(),
            Self::Casc(casc) => casc.source(),
        }
    }
}
