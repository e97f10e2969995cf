//! Integration tests for inheritance and property substitution across module trees.

use crate::common::{TestProject, dependencies_of};
use pomdeps_cli::test_utils::{DependencyFixture, PomBuilder};

fn parent_with_child(project: &TestProject) {
    project
        .add_pom(
            "",
            &PomBuilder::new("Parent")
                .group("Org.Acme")
                .version("1.0")
                .packaging("pom")
                .property("lib.version", "3.1")
                .managed_dependency(
                    DependencyFixture::new("org.acme", "bom").version("${project.version}").dep_type("pom"),
                ),
        )
        .unwrap();
    project
        .add_pom(
            "child",
            &PomBuilder::new("child")
                .parent("org.acme", "parent", "1.0")
                .dependency(
                    DependencyFixture::new("${project.groupId}", "util")
                        .version("${lib.version}")
                        .scope("test"),
                )
                .dependency(DependencyFixture::new("junit", "junit").version("${project.version}")),
        )
        .unwrap();
}

#[test]
fn test_child_inherits_coordinates_and_properties() {
    let project = TestProject::new().unwrap();
    parent_with_child(&project);

    let report = project.run_json().unwrap();
    let deps = dependencies_of(&report, "maven:org.acme:child@1.0").unwrap();

    assert_eq!(deps.len(), 2);
    assert_eq!(deps[0]["identifier"], "maven:org.acme:util@3.1");
    assert_eq!(deps[0]["scope"], "test");
    assert_eq!(deps[0]["type"], "");
    assert_eq!(deps[0]["snyk_url"], "https://snyk.io/vuln/maven:org.acme:util@3.1");
    assert_eq!(deps[0]["maven_url"], "https://mvnrepository.com/artifact/maven/org.acme/util/3.1");
    assert_eq!(deps[1]["identifier"], "maven:junit:junit@1.0");
}

#[test]
fn test_managed_dependencies_are_reported() {
    let project = TestProject::new().unwrap();
    parent_with_child(&project);

    let report = project.run_json().unwrap();
    let deps = dependencies_of(&report, "maven:org.acme:parent@1.0").unwrap();

    assert_eq!(deps.len(), 1);
    assert_eq!(deps[0]["identifier"], "maven:org.acme:bom@1.0");
    assert_eq!(deps[0]["type"], "pom");
}

#[test]
fn test_projects_reported_in_sorted_discovery_order() {
    // Entries are visited by file name, so subdirectories sort ahead of a sibling pom.xml
    let project = TestProject::new().unwrap();
    parent_with_child(&project);
    project
        .add_pom("child/nested", &PomBuilder::new("nested").parent("org.acme", "child", "1.0"))
        .unwrap();
    project
        .add_pom("another", &PomBuilder::new("another").parent("org.acme", "parent", "1.0"))
        .unwrap();

    let report = project.run_json().unwrap();
    let keys: Vec<&String> = report
        .as_array()
        .unwrap()
        .iter()
        .flat_map(|entry| entry.as_object().unwrap().keys())
        .collect();

    assert_eq!(
        keys,
        [
            "maven:org.acme:another@1.0",
            "maven:org.acme:nested@1.0",
            "maven:org.acme:child@1.0",
            "maven:org.acme:parent@1.0",
        ]
    );
}

#[test]
fn test_grandchild_reads_grandparent_property() {
    let project = TestProject::new().unwrap();
    parent_with_child(&project);
    project
        .add_pom(
            "child/nested",
            &PomBuilder::new("nested")
                .parent("org.acme", "child", "1.0")
                .dependency(DependencyFixture::new("org.acme", "extra").version("${lib.version}")),
        )
        .unwrap();

    let report = project.run_json().unwrap();
    let deps = dependencies_of(&report, "maven:org.acme:nested@1.0").unwrap();
    assert_eq!(deps[0]["identifier"], "maven:org.acme:extra@3.1");
}

#[test]
fn test_child_property_overrides_parent() {
    let project = TestProject::new().unwrap();
    parent_with_child(&project);
    project
        .add_pom(
            "override",
            &PomBuilder::new("override")
                .parent("org.acme", "parent", "1.0")
                .property("lib.version", "4.0")
                .dependency(DependencyFixture::new("org.acme", "util").version("${lib.version}")),
        )
        .unwrap();

    let report = project.run_json().unwrap();
    let deps = dependencies_of(&report, "maven:org.acme:override@1.0").unwrap();
    assert_eq!(deps[0]["identifier"], "maven:org.acme:util@4.0");
}

#[test]
fn test_dependency_without_version_has_no_version_suffix() {
    let project = TestProject::new().unwrap();
    project
        .add_pom(
            "",
            &PomBuilder::new("app")
                .group("g")
                .version("1")
                .dependency(DependencyFixture::new("G", "Lib")),
        )
        .unwrap();

    let report = project.run_json().unwrap();
    let deps = dependencies_of(&report, "maven:g:app@1").unwrap();
    assert_eq!(deps[0]["identifier"], "maven:g:lib");
    assert_eq!(deps[0]["maven_url"], "https://mvnrepository.com/artifact/maven/g/lib");
}

#[test]
fn test_parent_cycle_fails_only_affected_projects() {
    let project = TestProject::new().unwrap();
    project
        .add_pom(
            "a",
            &PomBuilder::new("a")
                .group("g")
                .version("1")
                .parent("g", "b", "1")
                .dependency(DependencyFixture::new("g", "x").version("${loop}")),
        )
        .unwrap();
    project
        .add_pom("b", &PomBuilder::new("b").group("g").version("1").parent("g", "a", "1"))
        .unwrap();
    project.add_pom("c", &PomBuilder::new("c").group("g").version("1")).unwrap();

    let output = project.command().output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(dependencies_of(&report, "maven:g:a@1").is_none());
    assert_eq!(dependencies_of(&report, "maven:g:b@1").unwrap().len(), 0);
    assert_eq!(dependencies_of(&report, "maven:g:c@1").unwrap().len(), 0);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cycle"), "stderr was: {stderr}");
}
