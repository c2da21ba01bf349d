use std::fs;

use predicates::prelude::*;

use crate::common::TestEnv;

#[test]
fn namespace_is_required() {
    let env = TestEnv::new();

    env.publish()
        .arg("--dry-run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--namespace"));
}

#[test]
fn dry_run_prints_publish_command() {
    let env = TestEnv::new();

    env.publish()
        .args(["--dry-run", "-n", "acme/templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registry: ghcr.io"))
        .stdout(predicate::str::contains("Update version: No"))
        .stdout(predicate::str::contains("[DRY RUN] Skipping actual publish"))
        .stdout(predicate::str::contains(
            "Would run: devcontainer templates publish ./src -r ghcr.io -n acme/templates",
        ));
}

#[test]
fn registry_comes_from_environment() {
    let env = TestEnv::new();

    env.publish()
        .env("REGISTRY", "registry.example.com")
        .args(["--dry-run", "-n", "acme/templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-r registry.example.com"));
}

#[test]
fn registry_flag_beats_environment() {
    let env = TestEnv::new();

    env.publish()
        .env("REGISTRY", "registry.example.com")
        .args(["--dry-run", "-n", "acme/templates", "-r", "quay.io"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-r quay.io"));
}

#[test]
fn dry_run_with_update_previews_bump() {
    let env = TestEnv::new();
    let original = r#"{"id": "node", "version": "1.0.0"}"#;
    let node = env.add_template("node", original);

    env.publish()
        .args(["-u", "--level", "minor", "--dry-run", "-n", "acme/templates"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1: Bumping versions..."))
        .stdout(predicate::str::contains("New:     1.1.0"))
        .stdout(predicate::str::contains("Would run: devcontainer templates publish"));

    assert_eq!(fs::read_to_string(&node).unwrap(), original);
}

#[test]
fn failed_bump_aborts_publish() {
    let env = TestEnv::new();

    // No templates under ./src, so the bump step fails.
    env.publish()
        .args(["-u", "--dry-run", "-n", "acme/templates"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Would run").not())
        .stderr(predicate::str::contains("version bump failed"));
}

#[test]
fn missing_publisher_fails() {
    let env = TestEnv::new();
    let empty_path = env.root().join("empty-bin");
    fs::create_dir_all(&empty_path).unwrap();

    env.publish()
        .env("PATH", &empty_path)
        .args(["-n", "acme/templates"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Step 1: Publishing templates..."))
        .stderr(predicate::str::contains("devcontainer command not found"));
}
