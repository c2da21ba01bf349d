use std::fs;

use predicates::prelude::*;

use crate::common::TestEnv;

#[test]
fn bumps_all_templates_by_patch() {
    let env = TestEnv::new();
    let node = env.add_template("node", r#"{"id":"node","version":"1.0.0","name":"Node"}"#);
    let python = env.add_template("python", r#"{"id":"python","version":"2.4.9"}"#);

    env.bump()
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 template(s):"))
        .stdout(predicate::str::contains("Template: node"))
        .stdout(predicate::str::contains("New:     2.4.10"))
        .stdout(predicate::str::contains("All templates updated successfully"));

    assert_eq!(env.version_of(&node), "1.0.1");
    assert_eq!(env.version_of(&python), "2.4.10");
    let text = fs::read_to_string(&node).unwrap();
    assert!(text.contains("\"name\": \"Node\""));
}

#[test]
fn minor_and_major_levels() {
    let env = TestEnv::new();
    let node = env.add_template("node", r#"{"id":"node","version":"1.2.3"}"#);

    env.bump().args(["--level", "minor"]).assert().success();
    assert_eq!(env.version_of(&node), "1.3.0");

    env.bump().args(["-l", "major"]).assert().success();
    assert_eq!(env.version_of(&node), "2.0.0");
}

#[test]
fn dry_run_leaves_files_untouched() {
    let env = TestEnv::new();
    let original = r#"{"id": "node", "version": "1.0.0"}"#;
    let node = env.add_template("node", original);

    env.bump()
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: DRY RUN"))
        .stdout(predicate::str::contains("New:     1.0.1"))
        .stdout(predicate::str::contains("[DRY RUN] Skipping actual update"));

    assert_eq!(fs::read_to_string(&node).unwrap(), original);
}

#[test]
fn single_template_target() {
    let env = TestEnv::new();
    let node = env.add_template("node", r#"{"id":"node","version":"1.0.0"}"#);
    let python = env.add_template("python", r#"{"id":"python","version":"1.0.0"}"#);

    env.bump()
        .arg("--target")
        .arg(&node)
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 template(s):"));

    assert_eq!(env.version_of(&node), "1.0.1");
    assert_eq!(env.version_of(&python), "1.0.0");
}

#[test]
fn bad_manifest_fails_run_but_others_update() {
    let env = TestEnv::new();
    let broken = env.add_template("broken", "{ not json");
    let good = env.add_template("good", r#"{"id":"good","version":"0.1.0"}"#);
    env.add_template("unversioned", r#"{"id":"unversioned"}"#);

    env.bump()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("2 template(s) failed to update"))
        .stderr(predicate::str::contains("invalid JSON"))
        .stderr(predicate::str::contains("no version field"));

    assert_eq!(fs::read_to_string(&broken).unwrap(), "{ not json");
    assert_eq!(env.version_of(&good), "0.1.1");
}

#[test]
fn missing_target_fails() {
    let env = TestEnv::new();

    env.bump()
        .args(["--target", "does-not-exist"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: target not found"));
}

#[test]
fn empty_directory_fails() {
    let env = TestEnv::new();
    fs::create_dir_all(env.root().join("src")).unwrap();

    env.bump()
        .assert()
        .failure()
        .stderr(predicate::str::contains("no templates found"));
}

#[test]
fn invalid_level_is_rejected_by_argument_parser() {
    let env = TestEnv::new();
    env.add_template("node", r#"{"id":"node","version":"1.0.0"}"#);

    env.bump()
        .args(["--level", "huge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("huge"));
}

#[test]
fn commit_creates_git_commit() {
    let env = TestEnv::new();
    let node = env.add_template("node", r#"{"id":"node","version":"1.0.0"}"#);
    env.init_git();

    env.bump()
        .args(["--level", "minor", "--commit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes committed"));

    assert_eq!(env.version_of(&node), "1.1.0");
    let log = env.git(&["log", "-1", "--format=%s"]);
    assert_eq!(log.trim(), "chore: bump template versions (minor)");
}

#[test]
fn commit_outside_repository_fails() {
    let env = TestEnv::new();
    env.add_template("node", r#"{"id":"node","version":"1.0.0"}"#);

    // Not a git repository, and GIT_CEILING_DIRECTORIES keeps git from
    // discovering one further up.
    env.bump()
        .arg("--commit")
        .env("GIT_CEILING_DIRECTORIES", env.root())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("git error"));
}
