//! The folder-to-group synchronization core.
//!
//! Every public operation funnels into [`ProjectTreeSync::sync_path`]:
//! materialize the source into the group's sandbox directory, then
//! either add it as a single file reference or expand it into a group
//! subtree by walking the physical directory depth-first.

use std::path::Path;

use pbx_model::{FileRefId, GroupId, Project, TargetId};
use tracing::{debug, info};

use crate::{Error, Result, classify, fsops, membership, resolve};

/// What a sync operation produced: a flat file reference, or a group
/// subtree rooted at the returned group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddedNode {
    Group(GroupId),
    File(FileRefId),
}

impl AddedNode {
    pub fn as_group(self) -> Option<GroupId> {
        match self {
            AddedNode::Group(g) => Some(g),
            AddedNode::File(_) => None,
        }
    }

    pub fn as_file(self) -> Option<FileRefId> {
        match self {
            AddedNode::File(f) => Some(f),
            AddedNode::Group(_) => None,
        }
    }
}

/// Per-entry verdict of the directory walk.
enum Visit {
    /// Recurse into the entry's children.
    Descend,
    /// Skip the entry's entire subtree.
    Prune,
}

/// One-shot mutator wiring filesystem artifacts into a project model.
///
/// Owns nothing: the project is an explicit collaborator borrowed for
/// the duration of the run. Callers serialize runs; the model and the
/// sandbox are assumed exclusively held while a call is in flight.
pub struct ProjectTreeSync<'a> {
    project: &'a mut Project,
}

impl<'a> ProjectTreeSync<'a> {
    pub fn new(project: &'a mut Project) -> Self {
        Self { project }
    }

    /// Add a static library to `group` and link it into `target`'s
    /// frameworks phase. The library is copied into the group's sandbox
    /// directory if it is not already there.
    pub fn add_static_lib(
        &mut self,
        target: TargetId,
        group: GroupId,
        lib_path: &Path,
    ) -> Result<AddedNode> {
        self.sync_path(group, lib_path, &[target], true, true)
    }

    /// Add a resource bundle to `group` as a flat file reference (never
    /// expanded into a sub-group) and ship it with `target`.
    pub fn add_bundle(
        &mut self,
        target: TargetId,
        group: GroupId,
        bundle_path: &Path,
    ) -> Result<AddedNode> {
        self.sync_path(group, bundle_path, &[target], true, false)
    }

    /// Mirror a header directory into `group` as a group subtree. No
    /// target membership: headers belong to no build phase here.
    pub fn add_header_tree(&mut self, group: GroupId, header_path: &Path) -> Result<AddedNode> {
        self.sync_path(group, header_path, &[], true, true)
    }

    /// General entry point: add any file or folder under `group`,
    /// attaching resulting references to each of `targets`.
    pub fn add_file_or_folder(
        &mut self,
        group: GroupId,
        path: &Path,
        targets: &[TargetId],
        copy_if_needed: bool,
        as_group: bool,
    ) -> Result<AddedNode> {
        self.sync_path(group, path, targets, copy_if_needed, as_group)
    }

    fn sync_path(
        &mut self,
        group: GroupId,
        path: &Path,
        targets: &[TargetId],
        copy_if_needed: bool,
        as_group: bool,
    ) -> Result<AddedNode> {
        let name = basename(path)?;
        if self.project.child_named(group, &name).is_some() {
            return Err(Error::DuplicateEntry {
                group: self.project.group(group).name().to_string(),
                name,
            });
        }
        if !path.exists() {
            return Err(Error::NotFound {
                path: path.to_path_buf(),
            });
        }

        let group_real = self.project.real_path(group);
        let mut path = path.to_path_buf();

        // Materialize into the sandbox. Known sharp edge, preserved from
        // the original behavior: the test is path identity, so a source
        // that already sits at the destination is reused as-is even if
        // its content is stale.
        if copy_if_needed {
            if group_has_file(&group_real, &path, &name)? {
                debug!(path = %path.display(), "already in sandbox, copy skipped");
            } else {
                info!(src = %path.display(), dst = %group_real.display(), "copying into sandbox");
                std::fs::create_dir_all(&group_real).map_err(|e| Error::io(&group_real, e))?;
                path = fsops::copy_recursive(&path, &group_real)?;
            }
        }

        if !path.is_dir() || !as_group || classify::treat_as_file(&path) {
            let fref = self.add_normal_file(group, &path, targets)?;
            return Ok(AddedNode::File(fref));
        }

        let relative = fsops::relative_path_from(&path, &group_real)?;
        let top = self
            .project
            .new_group(group, &name, &rel_string(&relative));
        info!(group = %name, "expanding folder into group subtree");

        self.walk_dir(top, &path, &path, targets)?;
        Ok(AddedNode::Group(top))
    }

    fn walk_dir(
        &mut self,
        top: GroupId,
        root: &Path,
        dir: &Path,
        targets: &[TargetId],
    ) -> Result<()> {
        for entry in fsops::sorted_entries(dir)? {
            match self.visit(top, root, &entry, targets)? {
                Visit::Descend => self.walk_dir(top, root, &entry, targets)?,
                Visit::Prune => {}
            }
        }
        Ok(())
    }

    /// Visit one walked entry and report whether to descend below it.
    ///
    /// Symlinks are resolved in place first, so a link masquerading as a
    /// bundle is a real directory by the time the atomic check runs.
    fn visit(
        &mut self,
        top: GroupId,
        root: &Path,
        entry: &Path,
        targets: &[TargetId],
    ) -> Result<Visit> {
        let meta = std::fs::symlink_metadata(entry).map_err(|e| Error::io(entry, e))?;
        if meta.file_type().is_symlink() {
            fsops::resolve_link(entry)?;
        }

        let name = basename(entry)?;
        if name.starts_with('.') {
            debug!(path = %entry.display(), "pruning hidden entry");
            return Ok(Visit::Prune);
        }

        if !entry.is_dir() || classify::treat_as_file(entry) {
            let parent = entry.parent().unwrap_or(root);
            let rel = parent
                .strip_prefix(root)
                .map(rel_string)
                .unwrap_or_else(|_| ".".to_string());
            let sub_group = resolve::group_for_path(self.project, top, &rel, true)?
                .ok_or(Error::GroupExpected { path: rel })?;

            let fref = self.add_normal_file(sub_group, entry, targets)?;

            // An atomic path (a nested .framework, .xcassets, ...) was
            // added whole; never expand its internals.
            if classify::treat_as_file(&self.project.file_real_path(fref)) {
                debug!(path = %entry.display(), "pruning atomic entry");
            }
            return Ok(Visit::Prune);
        }

        Ok(Visit::Descend)
    }

    /// Create a single file reference for `path` under `group`, tag its
    /// explicit file type, and attach it to each target's build phases.
    fn add_normal_file(
        &mut self,
        group: GroupId,
        path: &Path,
        targets: &[TargetId],
    ) -> Result<FileRefId> {
        let name = basename(path)?;
        if self.project.child_named(group, &name).is_some() {
            return Err(Error::DuplicateEntry {
                group: self.project.group(group).name().to_string(),
                name,
            });
        }
        if !path.exists() || (path.is_dir() && !classify::treat_as_file(path)) {
            return Err(Error::InvalidFile {
                path: path.to_path_buf(),
            });
        }

        let fref = self.project.new_file_reference(group, &name);
        self.project.set_explicit_file_type(fref);
        debug!(group = %self.project.group(group).name(), file = %name, "added file reference");

        for &target in targets {
            membership::attach(self.project, target, fref);
        }
        Ok(fref)
    }
}

/// Final path segment as a string, lossily decoded.
fn basename(path: &Path) -> Result<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| Error::InvalidFile {
            path: path.to_path_buf(),
        })
}

/// `/`-joined string form of a relative path, `"."` when empty.
fn rel_string(path: &Path) -> String {
    if path.as_os_str().is_empty() {
        return ".".to_string();
    }
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// True iff `path` already is the file at `group_real/name`, by lexical
/// absolute-path equality (no symlink chasing).
fn group_has_file(group_real: &Path, path: &Path, name: &str) -> Result<bool> {
    let lhs = std::path::absolute(path).map_err(|e| Error::io(path, e))?;
    let rhs_src = group_real.join(name);
    let rhs = std::path::absolute(&rhs_src).map_err(|e| Error::io(&rhs_src, e))?;
    Ok(lhs == rhs)
}
