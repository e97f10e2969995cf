//! Maven project model.
//!
//! A [`Project`] is the structured form of one `pom.xml`: its coordinates, its
//! `<properties>`, an optional `<parent>` reference, and the raw (unresolved)
//! dependency declarations. Values are kept exactly as written, placeholders included;
//! substitution is the resolver's job.
//!
//! # Identifiers
//!
//! Every project and dependency is named by an identifier of the form
//! `maven:<group>:<artifact>@<version>` (or `maven:<group>:<artifact>` when the version
//! is empty). Group and artifact are lowercased; the version keeps its case. See
//! [`make_identifier`].

pub mod parser;
pub mod xml;

pub use parser::{parse_descriptor, parse_file};

use crate::constants::IDENTIFIER_SCHEME;
use std::collections::HashMap;
use std::path::PathBuf;

/// Build a normalized `maven:` identifier from raw coordinates.
///
/// # Examples
///
/// ```rust
/// use pomdeps_cli::pom::make_identifier;
///
/// assert_eq!(make_identifier("Org.Acme", "Base", "1.0-SNAPSHOT"), "maven:org.acme:base@1.0-SNAPSHOT");
/// assert_eq!(make_identifier("org.acme", "base", ""), "maven:org.acme:base");
/// ```
#[must_use]
pub fn make_identifier(group: &str, artifact: &str, version: &str) -> String {
    if version.is_empty() {
        format!("{IDENTIFIER_SCHEME}:{}:{}", group.to_lowercase(), artifact.to_lowercase())
    } else {
        format!(
            "{IDENTIFIER_SCHEME}:{}:{}@{version}",
            group.to_lowercase(),
            artifact.to_lowercase()
        )
    }
}

/// The `groupId`/`artifactId`/`version`/`packaging` of a project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coordinates {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
}

impl Coordinates {
    /// Identifier computed from the current field values.
    #[must_use]
    pub fn identifier(&self) -> String {
        make_identifier(&self.group_id, &self.artifact_id, &self.version)
    }

    /// Value of a queryable attribute.
    #[must_use]
    pub fn attribute(&self, attribute: ProjectAttribute) -> &str {
        match attribute {
            ProjectAttribute::GroupId => &self.group_id,
            ProjectAttribute::ArtifactId => &self.artifact_id,
            ProjectAttribute::Version => &self.version,
            ProjectAttribute::Packaging => &self.packaging,
        }
    }
}

/// The fixed set of project fields reachable through `${project.<name>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectAttribute {
    GroupId,
    ArtifactId,
    Version,
    Packaging,
}

impl ProjectAttribute {
    /// Look up an attribute by name, ignoring case (`groupId`, `GROUPID`, ...).
    ///
    /// Returns `None` for anything outside the fixed set, including nested names such
    /// as `parent.version`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "groupid" => Some(Self::GroupId),
            "artifactid" => Some(Self::ArtifactId),
            "version" => Some(Self::Version),
            "packaging" => Some(Self::Packaging),
            _ => None,
        }
    }
}

/// The `<parent>` element of a descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentRef {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl ParentRef {
    /// Identifier the parent project is expected to have.
    #[must_use]
    pub fn identifier(&self) -> String {
        make_identifier(&self.group_id, &self.artifact_id, &self.version)
    }
}

/// A raw `<dependency>` entry. Every field may contain `${...}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyDeclaration {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub scope: String,
    pub dep_type: String,
}

/// One parsed `pom.xml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    /// Descriptor the project was read from. Empty for projects built in memory.
    pub path: PathBuf,
    pub coordinates: Coordinates,
    /// Keys are lowercased property names; values are raw.
    pub properties: HashMap<String, String>,
    pub parent_ref: Option<ParentRef>,
    pub dependencies: Vec<DependencyDeclaration>,
    pub managed_dependencies: Vec<DependencyDeclaration>,
}

impl Project {
    /// Identifier computed from the current coordinates.
    ///
    /// Never cached: after the linker back-fills group or version the identifier
    /// changes accordingly.
    #[must_use]
    pub fn identifier(&self) -> String {
        self.coordinates.identifier()
    }

    /// Case-insensitive property lookup.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Dependency declarations followed by dependency-management declarations.
    pub fn all_declarations(&self) -> impl Iterator<Item = &DependencyDeclaration> {
        self.dependencies.iter().chain(self.managed_dependencies.iter())
    }
}
