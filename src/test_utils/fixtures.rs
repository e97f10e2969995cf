//! Test fixtures for creating `pom.xml` descriptors
//!
//! [`PomBuilder`] renders a descriptor from coordinates, a parent reference,
//! properties and dependencies, and writes it into a directory tree.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// One `<dependency>` element.
#[derive(Clone, Debug, Default)]
pub struct DependencyFixture {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub scope: Option<String>,
    pub dep_type: Option<String>,
}

impl DependencyFixture {
    pub fn new(group_id: &str, artifact_id: &str) -> Self {
        Self {
            group_id: group_id.to_string(),
            artifact_id: artifact_id.to_string(),
            ..Default::default()
        }
    }

    pub fn version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn scope(mut self, scope: &str) -> Self {
        self.scope = Some(scope.to_string());
        self
    }

    pub fn dep_type(mut self, dep_type: &str) -> Self {
        self.dep_type = Some(dep_type.to_string());
        self
    }

    fn render(&self, indent: &str) -> String {
        let mut xml = format!("{indent}<dependency>\n");
        xml.push_str(&format!("{indent}    <groupId>{}</groupId>\n", self.group_id));
        xml.push_str(&format!("{indent}    <artifactId>{}</artifactId>\n", self.artifact_id));
        for (tag, value) in [("version", &self.version), ("scope", &self.scope), ("type", &self.dep_type)] {
            if let Some(value) = value {
                xml.push_str(&format!("{indent}    <{tag}>{value}</{tag}>\n"));
            }
        }
        xml.push_str(&format!("{indent}</dependency>\n"));
        xml
    }
}

/// Builder for `pom.xml` content.
///
/// Elements left unset are omitted from the output, so a builder without a group
/// produces a descriptor that inherits its group from the parent.
///
/// ```rust,no_run
/// use pomdeps_cli::test_utils::{DependencyFixture, PomBuilder};
///
/// let xml = PomBuilder::new("child")
///     .parent("org.acme", "base", "1.0")
///     .dependency(DependencyFixture::new("org.acme", "util").version("${rev}"))
///     .build();
/// assert!(xml.contains("<parent>"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PomBuilder {
    group_id: Option<String>,
    artifact_id: String,
    version: Option<String>,
    packaging: Option<String>,
    parent: Option<(String, String, String)>,
    properties: Vec<(String, String)>,
    dependencies: Vec<DependencyFixture>,
    managed: Vec<DependencyFixture>,
}

impl PomBuilder {
    pub fn new(artifact_id: &str) -> Self {
        Self {
            artifact_id: artifact_id.to_string(),
            ..Default::default()
        }
    }

    pub fn group(mut self, group_id: &str) -> Self {
        self.group_id = Some(group_id.to_string());
        self
    }

    pub fn version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn packaging(mut self, packaging: &str) -> Self {
        self.packaging = Some(packaging.to_string());
        self
    }

    pub fn parent(mut self, group_id: &str, artifact_id: &str, version: &str) -> Self {
        self.parent = Some((group_id.to_string(), artifact_id.to_string(), version.to_string()));
        self
    }

    pub fn property(mut self, name: &str, value: &str) -> Self {
        self.properties.push((name.to_string(), value.to_string()));
        self
    }

    pub fn dependency(mut self, dependency: DependencyFixture) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn managed_dependency(mut self, dependency: DependencyFixture) -> Self {
        self.managed.push(dependency);
        self
    }

    /// Render the descriptor.
    pub fn build(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<project xmlns=\"http://maven.apache.org/POM/4.0.0\">\n",
        );
        xml.push_str("    <modelVersion>4.0.0</modelVersion>\n");

        if let Some((group, artifact, version)) = &self.parent {
            xml.push_str("    <parent>\n");
            xml.push_str(&format!("        <groupId>{group}</groupId>\n"));
            xml.push_str(&format!("        <artifactId>{artifact}</artifactId>\n"));
            xml.push_str(&format!("        <version>{version}</version>\n"));
            xml.push_str("    </parent>\n");
        }

        if let Some(group) = &self.group_id {
            xml.push_str(&format!("    <groupId>{group}</groupId>\n"));
        }
        xml.push_str(&format!("    <artifactId>{}</artifactId>\n", self.artifact_id));
        if let Some(version) = &self.version {
            xml.push_str(&format!("    <version>{version}</version>\n"));
        }
        if let Some(packaging) = &self.packaging {
            xml.push_str(&format!("    <packaging>{packaging}</packaging>\n"));
        }

        if !self.properties.is_empty() {
            xml.push_str("    <properties>\n");
            for (name, value) in &self.properties {
                xml.push_str(&format!("        <{name}>{value}</{name}>\n"));
            }
            xml.push_str("    </properties>\n");
        }

        if !self.dependencies.is_empty() {
            xml.push_str("    <dependencies>\n");
            for dependency in &self.dependencies {
                xml.push_str(&dependency.render("        "));
            }
            xml.push_str("    </dependencies>\n");
        }

        if !self.managed.is_empty() {
            xml.push_str("    <dependencyManagement>\n        <dependencies>\n");
            for dependency in &self.managed {
                xml.push_str(&dependency.render("            "));
            }
            xml.push_str("        </dependencies>\n    </dependencyManagement>\n");
        }

        xml.push_str("</project>\n");
        xml
    }

    /// Write the descriptor to `dir/pom.xml`, creating `dir` if needed.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
        let path = dir.join("pom.xml");
        fs::write(&path, self.build()).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}
