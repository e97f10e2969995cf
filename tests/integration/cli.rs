//! Integration tests for command-line behavior.

use crate::common::TestProject;
use assert_cmd::Command;
use pomdeps_cli::test_utils::{DependencyFixture, PomBuilder};
use predicates::prelude::*;

#[test]
fn test_missing_argument_prints_usage_and_succeeds() {
    let mut cmd = Command::cargo_bin("pomdeps").unwrap();
    cmd.assert().success().stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_extra_argument_prints_usage_and_succeeds() {
    let mut cmd = Command::cargo_bin("pomdeps").unwrap();
    cmd.args(["one", "two"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("pomdeps").unwrap();
    cmd.arg("--help").assert().success().stdout(predicate::str::contains("pom.xml"));
}

#[test]
fn test_nonexistent_root_fails() {
    let project = TestProject::new().unwrap();
    let mut cmd = Command::cargo_bin("pomdeps").unwrap();
    cmd.arg(project.root().join("missing"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_empty_tree_prints_empty_array() {
    let project = TestProject::new().unwrap();
    project
        .command()
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn test_report_uses_four_space_indent() {
    let project = TestProject::new().unwrap();
    project.add_pom("", &PomBuilder::new("app").group("g").version("1")).unwrap();

    project
        .command()
        .assert()
        .success()
        .stdout(predicate::str::diff("[\n    {\n        \"maven:g:app@1\": []\n    }\n]\n"));
}

#[test]
fn test_unresolvable_property_exits_with_failure() {
    let project = TestProject::new().unwrap();
    project
        .add_pom(
            "broken",
            &PomBuilder::new("broken")
                .group("g")
                .version("1")
                .dependency(DependencyFixture::new("g", "x").version("${nope}")),
        )
        .unwrap();
    project.add_pom("fine", &PomBuilder::new("fine").group("g").version("1")).unwrap();

    project
        .command()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("maven:g:fine@1"))
        .stdout(predicate::str::contains("maven:g:broken@1").not())
        .stderr(predicate::str::contains("Cannot find property \"${nope}\""));
}

#[test]
fn test_missing_parent_warns_on_stderr_only() {
    let project = TestProject::new().unwrap();
    project
        .add_pom("", &PomBuilder::new("orphan").parent("g", "absent", "1").version("2"))
        .unwrap();

    project
        .command()
        .assert()
        .success()
        .stdout(predicate::str::contains("maven::orphan@2"))
        .stderr(predicate::str::contains("cannot find parent"))
        .stderr(predicate::str::contains("maven:g:absent@1"));
}

#[test]
fn test_malformed_descriptor_reported_and_others_resolved() {
    let project = TestProject::new().unwrap();
    project.add_raw_pom("bad", "<project><artifactId>bad</project>").unwrap();
    project.add_pom("good", &PomBuilder::new("good").group("g").version("1")).unwrap();

    project
        .command()
        .assert()
        .failure()
        .stdout(predicate::str::contains("maven:g:good@1"))
        .stderr(predicate::str::contains("bad"));
}

#[test]
fn test_non_utf8_descriptor_reported_with_path() {
    let project = TestProject::new().unwrap();
    project.add_pom_bytes("latin1", b"<project><artifactId>caf\xe9</artifactId></project>").unwrap();
    project.add_pom("good", &PomBuilder::new("good").group("g").version("1")).unwrap();

    project
        .command()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("maven:g:good@1"))
        .stderr(predicate::str::contains("latin1"));
}

#[test]
fn test_debug_logging_via_rust_log() {
    let project = TestProject::new().unwrap();
    project.add_pom("", &PomBuilder::new("app").group("g").version("1")).unwrap();

    project
        .command()
        .env("RUST_LOG", "pomdeps_cli=debug")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["))
        .stderr(predicate::str::contains("DEBUG"));
}
