//! Lookup helpers for hosts resolving handles out of a loaded project.

use pbx_model::{GroupId, NodeId, Project, TargetId};

/// First main-group child group whose on-disk path equals `name`.
pub fn find_group_by_name(project: &Project, name: &str) -> Option<GroupId> {
    project
        .group(project.main_group())
        .children()
        .iter()
        .find_map(|&node| match node {
            NodeId::Group(g) if project.group(g).path() == name => Some(g),
            _ => None,
        })
}

/// First target with the given name.
pub fn find_target_by_name(project: &Project, name: &str) -> Option<TargetId> {
    project
        .targets()
        .find(|&t| project.target(t).name() == name)
}
