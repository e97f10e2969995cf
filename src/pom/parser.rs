//! `pom.xml` parsing.
//!
//! Turns a descriptor into a [`Project`]. Only the elements the resolver needs are
//! read, and only as direct children of their container:
//!
//! | Element | Read from |
//! |---------|-----------|
//! | `groupId`, `artifactId`, `version`, `packaging` | `<project>` |
//! | `parent` (`groupId`, `artifactId`, `version`) | `<project>` |
//! | property entries | `<project>/<properties>` |
//! | `dependency` | `<project>/<dependencies>` |
//! | `dependency` | `<project>/<dependencyManagement>/<dependencies>` |
//!
//! Property entries holding child elements, or no text at all, are skipped. Missing
//! elements read as empty strings.

use super::xml::{XmlElement, parse_document};
use super::{Coordinates, DependencyDeclaration, ParentRef, Project};
use crate::core::PomError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Read and parse a descriptor file.
///
/// Every failure, unreadable or non-UTF-8 files included, is reported as
/// [`PomError::DescriptorParseError`] naming `path`.
pub fn parse_file(path: &Path) -> Result<Project, PomError> {
    let content = fs::read_to_string(path).map_err(|e| PomError::DescriptorParseError {
        file: path.display().to_string(),
        reason: format!("cannot read file: {e}"),
    })?;
    let mut project = parse_descriptor(&content).map_err(|e| attribute_to_file(e, path))?;
    project.path = path.to_path_buf();
    tracing::debug!("Parsed {} as {}", path.display(), project.identifier());
    Ok(project)
}

/// Parse descriptor content held in memory.
pub fn parse_descriptor(content: &str) -> Result<Project, PomError> {
    let root = parse_document(content)?;
    if root.name != "project" {
        return Err(PomError::DescriptorParseError {
            file: String::new(),
            reason: format!("expected <project> root element, found <{}>", root.name),
        });
    }

    let mut managed_dependencies = Vec::new();
    if let Some(management) = root.child("dependencyManagement") {
        for block in management.children_named("dependencies") {
            managed_dependencies.extend(read_dependencies(block));
        }
    }

    Ok(Project {
        path: Default::default(),
        coordinates: Coordinates {
            group_id: root.child_text("groupId"),
            artifact_id: root.child_text("artifactId"),
            version: root.child_text("version"),
            packaging: root.child_text("packaging"),
        },
        properties: root.child("properties").map(read_properties).unwrap_or_default(),
        parent_ref: root.child("parent").map(|parent| ParentRef {
            group_id: parent.child_text("groupId"),
            artifact_id: parent.child_text("artifactId"),
            version: parent.child_text("version"),
        }),
        dependencies: root.child("dependencies").map(read_dependencies).unwrap_or_default(),
        managed_dependencies,
    })
}

fn read_properties(properties: &XmlElement) -> HashMap<String, String> {
    properties
        .children
        .iter()
        .filter(|prop| prop.is_leaf() && !prop.text.is_empty())
        .map(|prop| (prop.name.clone(), prop.text.clone()))
        .collect()
}

fn read_dependencies(block: &XmlElement) -> Vec<DependencyDeclaration> {
    block
        .children_named("dependency")
        .map(|dep| DependencyDeclaration {
            group_id: dep.child_text("groupId"),
            artifact_id: dep.child_text("artifactId"),
            version: dep.child_text("version"),
            scope: dep.child_text("scope"),
            dep_type: dep.child_text("type"),
        })
        .collect()
}

fn attribute_to_file(error: PomError, path: &Path) -> PomError {
    let reason = match error {
        PomError::DescriptorParseError { reason, .. } => reason,
        other => other.to_string(),
    };
    PomError::DescriptorParseError {
        file: path.display().to_string(),
        reason,
    }
}
