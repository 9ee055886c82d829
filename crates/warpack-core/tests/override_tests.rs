//! Tests for applying a BOM on top of a loaded configuration

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use warpack_core::{Bom, Config, Error, load_config, override_by_bom};
use warpack_test_utils::TestWorkspace;
use warpack_test_utils::workspace::SAMPLE_BOM;

fn artifact_ids(deps: &Option<Vec<warpack_core::DependencyInfo>>) -> Vec<&str> {
    deps.as_deref()
        .unwrap_or_default()
        .iter()
        .map(|d| d.artifact_id.as_str())
        .collect()
}

#[fixture]
fn config() -> Config {
    let ws = TestWorkspace::new();
    let path = ws.write_config("packager-config.yml", "original-war");
    load_config(path).unwrap()
}

#[fixture]
fn bom() -> Bom {
    Bom::from_yaml(SAMPLE_BOM).unwrap()
}

#[rstest]
fn plugins_are_exactly_the_bom_plugins(config: Config, bom: Bom) {
    let effective = override_by_bom(&config, &bom, None).unwrap();

    assert_eq!(artifact_ids(&effective.plugins), vec!["matrix-project", "git"]);
    assert_eq!(artifact_ids(&effective.lib_patches), vec!["remoting"]);
}

#[rstest]
fn environment_plugins_follow_base_plugins(config: Config, bom: Bom) {
    let effective = override_by_bom(&config, &bom, Some("prod")).unwrap();

    assert_eq!(
        artifact_ids(&effective.plugins),
        vec!["matrix-project", "git", "audit-trail"]
    );
    assert_eq!(artifact_ids(&effective.lib_patches), vec!["remoting", "sshd"]);
}

#[rstest]
fn environment_without_components_keeps_base_components(config: Config, bom: Bom) {
    let effective = override_by_bom(&config, &bom, Some("dev")).unwrap();

    assert_eq!(artifact_ids(&effective.plugins), vec!["matrix-project", "git", "job-dsl"]);
    assert_eq!(artifact_ids(&effective.lib_patches), vec!["remoting"]);
}

#[rstest]
fn unknown_environment_fails_and_leaves_config_untouched(config: Config, bom: Bom) {
    let before = config.clone();

    let err = override_by_bom(&config, &bom, Some("missing")).unwrap_err();

    match err {
        Error::EnvironmentNotFound { name, available, .. } => {
            assert_eq!(name, "missing");
            assert_eq!(available, vec!["dev", "prod"]);
        }
        other => panic!("Expected EnvironmentNotFound, got {other:?}"),
    }
    assert_eq!(config, before);
}

#[rstest]
fn war_is_replaced_by_bom_core(config: Config, bom: Bom) {
    assert_eq!(config.war.as_ref().and_then(|w| w.version()), Some("2.200"));

    let effective = override_by_bom(&config, &bom, None).unwrap();
    let war = effective.war.unwrap();

    assert_eq!(war.coordinates(), "org.jenkins-ci.main:jenkins-war:2.300");
}

#[rstest]
fn bundle_is_replaced_wholesale_from_metadata(config: Config, bom: Bom) {
    let mut config = config;
    if let Some(bundle) = config.bundle.as_mut() {
        bundle.vendor = Some("stale vendor".into());
    }

    let effective = override_by_bom(&config, &bom, None).unwrap();
    let bundle = effective.bundle.unwrap();

    assert_eq!(bundle.artifact_id, "custom-war");
    assert_eq!(bundle.group_id, "io.jenkins.tools.bom");
    assert_eq!(bundle.vendor, None);
}

#[rstest]
fn metadata_supplies_missing_bundle(bom: Bom) {
    let config: Config = serde_yaml::from_str("buildSettings:\n  version: \"2.300\"\n").unwrap();
    assert_eq!(config.bundle, None);

    let effective = override_by_bom(&config, &bom, None).unwrap();

    assert_eq!(
        effective.bundle.map(|b| b.artifact_id).as_deref(),
        Some("custom-war")
    );
}

#[rstest]
fn bundle_is_kept_without_metadata(config: Config, bom: Bom) {
    let mut bom = bom;
    bom.metadata = None;

    let effective = override_by_bom(&config, &bom, None).unwrap();
    assert_eq!(effective.bundle, config.bundle);
}

#[rstest]
fn untouched_sections_are_carried_over(config: Config, bom: Bom) {
    let effective = override_by_bom(&config, &bom, Some("prod")).unwrap();

    assert_eq!(effective.lib_excludes, config.lib_excludes);
    assert_eq!(artifact_ids(&effective.lib_excludes), vec!["cli"]);
    assert_eq!(effective.build_settings, config.build_settings);
    assert_eq!(effective.groovy_hooks, config.groovy_hooks);
}

#[rstest]
fn empty_bom_lists_produce_present_empty_collections(config: Config) {
    let bom = Bom::from_yaml("spec:\n  core:\n    version: \"2.300\"\n").unwrap();

    let effective = override_by_bom(&config, &bom, None).unwrap();

    assert_eq!(effective.plugins, Some(Vec::new()));
    assert_eq!(effective.lib_patches, Some(Vec::new()));
}

#[test]
fn duplicates_and_order_are_preserved() {
    let bom = Bom::from_yaml(
        r#"
spec:
  core: {}
  plugins:
    - groupId: "g"
      artifactId: "zeta"
    - groupId: "g"
      artifactId: "alpha"
    - groupId: "g"
      artifactId: "zeta"
"#,
    )
    .unwrap();
    let config: Config =
        serde_yaml::from_str("bundle:\n  groupId: g\n  artifactId: a\n").unwrap();

    let effective = config.override_by_bom(&bom, None).unwrap();

    assert_eq!(artifact_ids(&effective.plugins), vec!["zeta", "alpha", "zeta"]);
    let war = effective.war.unwrap();
    assert_eq!(war.coordinates(), "org.jenkins-ci.main:jenkins-war");
}

#[test]
fn loaded_bom_errors_name_the_file() {
    let ws = TestWorkspace::new();
    let path = ws.write_bom("bom.yml", SAMPLE_BOM);
    let bom = Bom::load(&path).unwrap();

    let err = bom.environment("staging").unwrap_err();
    assert!(err.to_string().contains("bom.yml"));
}

#[test]
fn missing_bom_is_file_not_found() {
    let ws = TestWorkspace::new();
    let err = Bom::load(ws.path("bom.yml")).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}
