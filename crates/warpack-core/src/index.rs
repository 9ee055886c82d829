//! Identifier lookups over plugins and auxiliary resources
//!
//! Identifiers are expected to be unique but nothing enforces it. When the
//! same identifier appears more than once the first declared entry wins, and
//! hooks are searched before configuration-as-code fragments. An absent
//! collection behaves like an empty one. Lookups never fail.

use std::collections::HashMap;

use crate::model::{Config, DependencyInfo, ExtraResource, GroovyHookInfo, WarResource};

impl Config {
    /// First plugin with the given artifact id.
    pub fn find_plugin(&self, artifact_id: &str) -> Option<&DependencyInfo> {
        self.plugins
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|plugin| plugin.artifact_id == artifact_id)
    }

    /// First Groovy hook with the given id.
    pub fn hook_by_id(&self, id: &str) -> Option<&GroovyHookInfo> {
        self.groovy_hooks
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|hook| hook.resource_id() == Some(id))
    }

    /// Hooks followed by configuration-as-code fragments.
    pub fn extra_resources(&self) -> impl Iterator<Item = ExtraResource<'_>> {
        let hooks = self
            .groovy_hooks
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(ExtraResource::Hook);
        let casc = self
            .casc
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(ExtraResource::Casc);
        hooks.chain(casc)
    }

    /// All auxiliary resources, hooks first.
    pub fn all_extra_resources(&self) -> Vec<ExtraResource<'_>> {
        self.extra_resources().collect()
    }

    /// First hook or fragment with the given id, hooks checked first.
    pub fn find_resource_by_id(&self, id: &str) -> Option<ExtraResource<'_>> {
        self.extra_resources()
            .find(|resource| resource.resource_id() == Some(id))
    }
}

/// Hash-based lookups built once over a resolved configuration.
///
/// Gives the same answers as the linear lookups on [`Config`]; entries are
/// only inserted when the key is still vacant, so first-declared still wins.
#[derive(Debug, Default)]
pub struct ResourceIndex<'a> {
    plugins: HashMap<&'a str, &'a DependencyInfo>,
    hooks: HashMap<&'a str, &'a GroovyHookInfo>,
    resources: HashMap<&'a str, ExtraResource<'a>>,
}

impl<'a> ResourceIndex<'a> {
    pub fn build(config: &'a Config) -> Self {
        let mut index = Self::default();

        for plugin in config.plugins.as_deref().unwrap_or_default() {
            index
                .plugins
                .entry(plugin.artifact_id.as_str())
                .or_insert(plugin);
        }

        for hook in config.groovy_hooks.as_deref().unwrap_or_default() {
            if let Some(id) = hook.id.as_deref() {
                index.hooks.entry(id).or_insert(hook);
            }
        }

        for resource in config.extra_resources() {
            if let Some(id) = resource_key(&resource) {
                index.resources.entry(id).or_insert(resource);
            }
        }

        tracing::debug!(
            plugins = index.plugins.len(),
            hooks = index.hooks.len(),
            resources = index.resources.len(),
            "Built resource index"
        );
        index
    }

    pub fn find_plugin(&self, artifact_id: &str) -> Option<&'a DependencyInfo> {
        self.plugins.get(artifact_id).copied()
    }

    pub fn hook_by_id(&self, id: &str) -> Option<&'a GroovyHookInfo> {
        self.hooks.get(id).copied()
    }

    pub fn find_resource_by_id(&self, id: &str) -> Option<ExtraResource<'a>> {
        self.resources.get(id).copied()
    }
}

// Borrow the id for the full `'a` rather than from the temporary view.
fn resource_key<'a>(resource: &ExtraResource<'a>) -> Option<&'a str> {
    match *resource {
        ExtraResource::Hook(hook) => hook.id.as_deref(),
        ExtraResource::Casc(casc) => casc.id.as_deref(),
    }
}
