//! Tests for output artifact path derivation

use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;
use warpack_core::{BuildSettings, Config, PackageInfo, output_artifact_path, output_manifest_path};

fn bundle(artifact_id: &str) -> PackageInfo {
    PackageInfo {
        group_id: "io.jenkins.tools.test".into(),
        artifact_id: artifact_id.into(),
        vendor: None,
        title: None,
        description: None,
    }
}

fn config(tmp_dir: &str, artifact_id: &str, version: &str) -> Config {
    let mut config = Config::new(bundle(artifact_id));
    config.build_settings.tmp_dir = PathBuf::from(tmp_dir);
    config.build_settings.version = version.into();
    config
}

#[test]
fn artifact_path_is_deterministic() {
    let settings = BuildSettings {
        tmp_dir: PathBuf::from("/tmp/build"),
        version: "2.300".into(),
        ..BuildSettings::default()
    };
    let bundle = bundle("custom-war");

    let first = output_artifact_path(&settings, &bundle);
    let second = output_artifact_path(&settings, &bundle);

    assert_eq!(first, PathBuf::from("/tmp/build/output/target/custom-war-2.300.war"));
    assert_eq!(first, second);
}

#[test]
fn manifest_path_uses_bom_extension() {
    let config = config("/tmp/build", "custom-war", "2.300");
    assert_eq!(
        config.output_manifest_path(),
        Some(PathBuf::from("/tmp/build/output/target/custom-war-2.300.bom.yml"))
    );
    assert_eq!(
        output_manifest_path(&config.build_settings, &bundle("custom-war")),
        PathBuf::from("/tmp/build/output/target/custom-war-2.300.bom.yml")
    );
}

#[rstest]
#[case("/tmp/build/", "/tmp/build/output/target/w-1.war")]
#[case("tmp", "tmp/output/target/w-1.war")]
fn tmp_dir_spelling_does_not_change_layout(#[case] tmp_dir: &str, #[case] expected: &str) {
    let config = config(tmp_dir, "w", "1");
    assert_eq!(config.output_artifact_path(), Some(PathBuf::from(expected)));
}

#[test]
fn paths_do_not_touch_the_filesystem() {
    let config = config("/nonexistent/build-root", "custom-war", "1.0-SNAPSHOT");
    let path = config.output_artifact_path().unwrap();

    assert!(!path.exists());
    assert!(path.ends_with("custom-war-1.0-SNAPSHOT.war"));
}

#[test]
fn no_paths_without_bundle() {
    let mut config = config("/tmp/build", "custom-war", "2.300");
    config.bundle = None;

    assert_eq!(config.output_artifact_path(), None);
    assert_eq!(config.output_manifest_path(), None);
}
