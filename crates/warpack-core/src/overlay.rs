//! BOM override of a loaded configuration
//!
//! The BOM is authoritative for everything it pins. The override never merges
//! field by field: the core WAR, the bundle identity (when the BOM has
//! metadata), the plugin list and the library patch list are each replaced
//! wholesale. Lists keep the BOM's declaration order, base specification
//! first and the selected environment after it, without sorting or
//! deduplication.
//!
//! BOM components are all folded into `libPatches`. A BOM cannot say whether
//! a component is a library patch or a script, so components that are really
//! scripts end up in the wrong list.

use crate::bom::{Bom, ComponentReference};
use crate::model::{Config, DependencyInfo};
use crate::Result;

fn convert_all<'a>(
    base: &'a [ComponentReference],
    overlay: Option<&'a [ComponentReference]>,
) -> Vec<DependencyInfo> {
    base.iter()
        .chain(overlay.unwrap_or_default())
        .map(ComponentReference::to_dependency_info)
        .collect()
}

/// Apply `bom`, optionally scoped to `environment`, on top of `config`.
///
/// Returns the effective configuration; `config` itself is never modified, so
/// an unknown environment leaves the caller with exactly what it passed in.
/// `libExcludes` and all other sections are carried over unchanged.
pub fn override_by_bom(config: &Config, bom: &Bom, environment: Option<&str>) -> Result<Config> {
    let spec = &bom.spec;
    let env = environment.map(|name| bom.environment(name)).transpose()?;

    let mut effective = config.clone();
    effective.war = Some(spec.core.to_war_dependency_info());

    if let Some(metadata) = &bom.metadata {
        effective.bundle = Some(metadata.to_package_info());
    }

    effective.plugins = Some(convert_all(
        &spec.plugins,
        env.map(|e| e.plugins.as_slice()),
    ));
    effective.lib_patches = Some(convert_all(
        &spec.components,
        env.map(|e| e.components.as_slice()),
    ));

    tracing::info!(
        bom = %bom.origin_name(),
        environment = environment.unwrap_or("<none>"),
        war = %spec.core.to_war_dependency_info(),
        plugins = effective.plugins.as_ref().map_or(0, Vec::len),
        lib_patches = effective.lib_patches.as_ref().map_or(0, Vec::len),
        "Applied BOM override"
    );

    Ok(effective)
}

impl Config {
    /// See [`override_by_bom`].
    pub fn override_by_bom(&self, bom: &Bom, environment: Option<&str>) -> Result<Config> {
        override_by_bom(self, bom, environment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(artifact_id: &str) -> ComponentReference {
        ComponentReference {
            group_id: "org.jenkins-ci.plugins".into(),
            artifact_id: artifact_id.into(),
            version: Some("1.0".into()),
            git: None,
            git_ref: None,
            dir: None,
        }
    }

    #[test]
    fn convert_all_appends_overlay_after_base() {
        let base = vec![reference("b"), reference("a")];
        let overlay = vec![reference("c")];

        let ids: Vec<String> = convert_all(&base, Some(overlay.as_slice()))
            .into_iter()
            .map(|d| d.artifact_id)
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn convert_all_keeps_duplicates() {
        let base = vec![reference("a"), reference("a")];
        assert_eq!(convert_all(&base, None).len(), 2);
    }
}
