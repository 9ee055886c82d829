//! CLI end-to-end tests that invoke the compiled `warpack` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use warpack_test_utils::TestWorkspace;
use warpack_test_utils::workspace::SAMPLE_BOM;

fn warpack() -> Command {
    let mut cmd = Command::cargo_bin("warpack").unwrap();
    cmd.env_remove("WARPACK_CONFIG")
        .env_remove("WARPACK_BOM")
        .env_remove("WARPACK_ENVIRONMENT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_exits_zero() {
    warpack()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("resolve"));
}

#[test]
fn resolve_prints_bom_plugins_in_order() {
    let ws = TestWorkspace::new();
    let config = ws.write_config("packager-config.yml", "custom-war");
    let bom = ws.write_bom("bom.yml", SAMPLE_BOM);

    warpack()
        .arg("resolve")
        .arg("--config")
        .arg(&config)
        .arg("--bom")
        .arg(&bom)
        .args(["--environment", "prod", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("audit-trail"))
        .stdout(predicate::str::contains("stale-plugin").not())
        .stdout(predicate::str::is_match(r#"(?s)"matrix-project".*"git".*"audit-trail""#).unwrap());
}

#[test]
fn unknown_environment_fails_with_available_names() {
    let ws = TestWorkspace::new();
    let config = ws.write_config("packager-config.yml", "custom-war");
    let bom = ws.write_bom("bom.yml", SAMPLE_BOM);

    warpack()
        .arg("resolve")
        .arg("-c")
        .arg(&config)
        .arg("-b")
        .arg(&bom)
        .args(["-e", "missing"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("missing"))
        .stderr(predicate::str::contains("dev, prod"));
}

#[test]
fn paths_prints_artifact_and_manifest() {
    let ws = TestWorkspace::new();
    let config = ws.write(
        "packager-config.yml",
        r#"
bundle:
  groupId: "io.jenkins.tools.test"
  artifactId: "custom-war"
buildSettings:
  tmpDir: "/tmp/build"
  version: "2.300"
war:
  groupId: "org.jenkins-ci.main"
  artifactId: "jenkins-war"
"#,
    );

    warpack()
        .arg("paths")
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("/tmp/build/output/target/custom-war-2.300.war"))
        .stdout(predicate::str::contains("/tmp/build/output/target/custom-war-2.300.bom.yml"));
}

#[test]
fn plugin_lookup_misses_exit_nonzero() {
    let ws = TestWorkspace::new();
    let config = ws.write_config("packager-config.yml", "custom-war");

    warpack()
        .arg("plugin")
        .arg("stale-plugin")
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("org.jenkins-ci.plugins:stale-plugin:0.1"));

    warpack()
        .arg("plugin")
        .arg("absent")
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent"));
}

#[test]
fn cyclic_pointer_fails() {
    let ws = TestWorkspace::new();
    let a = ws.write_essentials_pointer("a/essentials.yml", "../b/essentials.yml");
    ws.write_essentials_pointer("b/essentials.yml", "../a/essentials.yml");

    warpack()
        .arg("resolve")
        .arg("-c")
        .arg(&a)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Indirection cycle"));
}

#[test]
fn demo_resolves_sample() {
    warpack()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("jenkins-all-latest"));
}

#[test]
fn resource_lookup_prefers_hooks() {
    let ws = TestWorkspace::new();
    let config = ws.write(
        "packager-config.yml",
        r#"
bundle:
  groupId: "io.jenkins.tools.test"
  artifactId: "custom-war"
war:
  groupId: "org.jenkins-ci.main"
  artifactId: "jenkins-war"
groovyHooks:
  - id: "shared"
    type: "init"
    source:
      dir: "hooks/shared"
casc:
  - id: "shared"
    source:
      dir: "casc/shared.yml"
"#,
    );

    warpack()
        .arg("resource")
        .arg("shared")
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("groovy hook (init)"))
        .stdout(predicate::str::contains("hooks/shared"))
        .stdout(predicate::str::contains("casc/shared.yml").not());
}
