//! Project registry.
//!
//! Owns every [`Project`] parsed during a run and the parent/child links between them.
//! Links are stored as [`ProjectId`] indices into the registry rather than references,
//! so the registry stays the single owner and the linker can wire parents after all
//! projects are registered.

use crate::pom::Project;
use std::collections::HashMap;

/// Stable handle to a registered project. Only valid for the registry that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(usize);

#[derive(Debug)]
struct Entry {
    project: Project,
    parent: Option<ProjectId>,
    children: Vec<ProjectId>,
}

/// All projects of one run, in registration order.
#[derive(Debug, Default)]
pub struct ProjectRegistry {
    entries: Vec<Entry>,
}

impl ProjectRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a project, preserving input order.
    ///
    /// Duplicate identifiers are accepted; lookups return the first one registered.
    /// Identifiers change when the linker back-fills coordinates, so duplicates are
    /// only meaningful after linking (see [`duplicate_identifiers`](Self::duplicate_identifiers)).
    pub fn register(&mut self, project: Project) -> ProjectId {
        let id = ProjectId(self.entries.len());
        self.entries.push(Entry {
            project,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// First project whose *current* identifier equals `identifier`.
    pub fn find_by_identifier(&self, identifier: &str) -> Option<ProjectId> {
        self.iter().find(|(_, project)| project.identifier() == identifier).map(|(id, _)| id)
    }

    /// Identifiers currently shared by more than one project, in first-seen order.
    pub fn duplicate_identifiers(&self) -> Vec<String> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut order = Vec::new();
        for (_, project) in self.iter() {
            let identifier = project.identifier();
            let count = counts.entry(identifier.clone()).or_default();
            *count += 1;
            if *count == 2 {
                order.push(identifier);
            }
        }
        order
    }

    /// The project behind `id`.
    pub fn get(&self, id: ProjectId) -> &Project {
        &self.entries[id.0].project
    }

    pub(crate) fn get_mut(&mut self, id: ProjectId) -> &mut Project {
        &mut self.entries[id.0].project
    }

    /// Linked parent, if the linker found one.
    pub fn parent_of(&self, id: ProjectId) -> Option<ProjectId> {
        self.entries[id.0].parent
    }

    /// Projects that declared `id` as their parent, in linking order.
    pub fn children_of(&self, id: ProjectId) -> &[ProjectId] {
        &self.entries[id.0].children
    }

    /// Record `parent` as the parent of `child`.
    pub(crate) fn set_parent(&mut self, child: ProjectId, parent: ProjectId) {
        self.entries[child.0].parent = Some(parent);
        self.entries[parent.0].children.push(child);
    }

    /// Handles of all projects in registration order.
    pub fn ids(&self) -> impl Iterator<Item = ProjectId> + use<> {
        (0..self.entries.len()).map(ProjectId)
    }

    /// All projects in registration order.
    pub fn all(&self) -> impl Iterator<Item = &Project> {
        self.entries.iter().map(|entry| &entry.project)
    }

    /// Handles paired with projects, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (ProjectId, &Project)> {
        self.entries.iter().enumerate().map(|(index, entry)| (ProjectId(index), &entry.project))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pom::Coordinates;

    fn project(group: &str, artifact: &str, version: &str) -> Project {
        Project {
            coordinates: Coordinates {
                group_id: group.to_string(),
                artifact_id: artifact.to_string(),
                version: version.to_string(),
                packaging: String::new(),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_register_preserves_order() {
        let mut registry = ProjectRegistry::new();
        registry.register(project("g", "b", "1"));
        registry.register(project("g", "a", "1"));

        let ids: Vec<_> = registry.all().map(Project::identifier).collect();
        assert_eq!(ids, vec!["maven:g:b@1", "maven:g:a@1"]);
        assert_eq!(registry.len(), 2);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_find_by_identifier() {
        let mut registry = ProjectRegistry::new();
        let first = registry.register(project("Org.Acme", "Base", "1.0"));

        assert_eq!(registry.find_by_identifier("maven:org.acme:base@1.0"), Some(first));
        assert_eq!(registry.find_by_identifier("maven:org.acme:base"), None);
    }

    #[test]
    fn test_duplicate_identifier_first_wins() {
        let mut registry = ProjectRegistry::new();
        let first = registry.register(project("g", "a", "1"));
        let second = registry.register(project("g", "a", "1"));

        assert_ne!(first, second);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find_by_identifier("maven:g:a@1"), Some(first));
    }

    #[test]
    fn test_lookup_reflects_current_coordinates() {
        let mut registry = ProjectRegistry::new();
        let id = registry.register(project("", "child", "1"));
        assert_eq!(registry.find_by_identifier("maven::child@1"), Some(id));

        registry.get_mut(id).coordinates.group_id = "org.acme".to_string();
        assert_eq!(registry.find_by_identifier("maven:org.acme:child@1"), Some(id));
        assert_eq!(registry.find_by_identifier("maven::child@1"), None);
    }

    #[test]
    fn test_parent_and_children() {
        let mut registry = ProjectRegistry::new();
        let parent = registry.register(project("g", "parent", "1"));
        let child = registry.register(project("g", "child", "1"));
        registry.set_parent(child, parent);

        assert_eq!(registry.parent_of(child), Some(parent));
        assert_eq!(registry.parent_of(parent), None);
        assert_eq!(registry.children_of(parent), &[child]);
        assert!(registry.children_of(child).is_empty());
    }

    #[test]
    fn test_duplicate_identifiers_use_current_coordinates() {
        let mut registry = ProjectRegistry::new();
        let first = registry.register(project("", "child", ""));
        let second = registry.register(project("", "child", ""));
        registry.register(project("g", "other", "1"));
        registry.register(project("g", "other", "1"));

        assert_eq!(registry.duplicate_identifiers(), vec!["maven::child", "maven:g:other@1"]);

        registry.get_mut(first).coordinates.group_id = "org.a".to_string();
        registry.get_mut(second).coordinates.group_id = "org.b".to_string();
        assert_eq!(registry.duplicate_identifiers(), vec!["maven:g:other@1"]);
    }
}
