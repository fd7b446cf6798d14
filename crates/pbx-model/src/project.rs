//! Arena-owned project tree: groups, file references, targets.

use std::path::{Path, PathBuf};

use crate::file_types;

/// Index of a [`Group`] inside a [`Project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(usize);

/// Index of a [`FileReference`] inside a [`Project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileRefId(usize);

/// Index of a [`Target`] inside a [`Project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(usize);

/// A child slot of a group: either a nested group or a file reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeId {
    Group(GroupId),
    File(FileRefId),
}

/// Logical folder node in the project hierarchy.
///
/// `path` is the on-disk location relative to the parent group's real
/// path. It is usually a single segment but may be deeper (or contain
/// `..`) when a source was referenced in place rather than copied.
#[derive(Debug)]
pub struct Group {
    name: String,
    path: String,
    parent: Option<GroupId>,
    children: Vec<NodeId>,
}

impl Group {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<GroupId> {
        self.parent
    }
}

/// Leaf node referencing a file on disk, relative to its owning group.
#[derive(Debug)]
pub struct FileReference {
    path: String,
    parent: GroupId,
    explicit_file_type: Option<&'static str>,
}

impl FileReference {
    /// Display name: the final path segment.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn parent(&self) -> GroupId {
        self.parent
    }

    pub fn explicit_file_type(&self) -> Option<&'static str> {
        self.explicit_file_type
    }
}

/// A build-phase entry. `weak` mirrors the settings flag Xcode stores
/// for optional linking / compilation entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildFile {
    pub file_ref: FileRefId,
    pub weak: bool,
}

/// A buildable unit with its three phase membership lists.
#[derive(Debug, Default)]
pub struct Target {
    name: String,
    sources: Vec<BuildFile>,
    frameworks: Vec<BuildFile>,
    resources: Vec<FileRefId>,
}

impl Target {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sources_phase(&self) -> &[BuildFile] {
        &self.sources
    }

    pub fn frameworks_phase(&self) -> &[BuildFile] {
        &self.frameworks
    }

    pub fn resources_phase(&self) -> &[FileRefId] {
        &self.resources
    }
}

/// Owner of every node in the manifest.
///
/// `root_dir` is the sandbox directory the main group physically maps
/// to; every group's real path resolves beneath it unless a group was
/// created with an out-of-tree relative path.
#[derive(Debug)]
pub struct Project {
    root_dir: PathBuf,
    groups: Vec<Group>,
    file_refs: Vec<FileReference>,
    targets: Vec<Target>,
    main_group: GroupId,
}

impl Project {
    /// Create an empty project whose main group maps to `root_dir`.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        let main = Group {
            name: "Main".to_string(),
            path: String::new(),
            parent: None,
            children: Vec::new(),
        };
        Self {
            root_dir: root_dir.into(),
            groups: vec![main],
            file_refs: Vec::new(),
            targets: Vec::new(),
            main_group: GroupId(0),
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn main_group(&self) -> GroupId {
        self.main_group
    }

    pub fn group(&self, id: GroupId) -> &Group {
        &self.groups[id.0]
    }

    pub fn file_ref(&self, id: FileRefId) -> &FileReference {
        &self.file_refs[id.0]
    }

    pub fn target(&self, id: TargetId) -> &Target {
        &self.targets[id.0]
    }

    /// Ids of all targets, in creation order.
    pub fn targets(&self) -> impl Iterator<Item = TargetId> + '_ {
        (0..self.targets.len()).map(TargetId)
    }

    /// Create a child group under `parent`.
    ///
    /// The model does not police name collisions; callers that require
    /// unique names check via [`Project::child_named`] first.
    pub fn new_group(&mut self, parent: GroupId, name: &str, path: &str) -> GroupId {
        let id = GroupId(self.groups.len());
        self.groups.push(Group {
            name: name.to_string(),
            path: path.to_string(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.groups[parent.0].children.push(NodeId::Group(id));
        id
    }

    /// Create a file reference under `parent` at `path` (relative to the
    /// parent group's real path).
    pub fn new_file_reference(&mut self, parent: GroupId, path: &str) -> FileRefId {
        let id = FileRefId(self.file_refs.len());
        self.file_refs.push(FileReference {
            path: path.to_string(),
            parent,
            explicit_file_type: None,
        });
        self.groups[parent.0].children.push(NodeId::File(id));
        id
    }

    pub fn new_target(&mut self, name: &str) -> TargetId {
        let id = TargetId(self.targets.len());
        self.targets.push(Target {
            name: name.to_string(),
            ..Target::default()
        });
        id
    }

    /// Look up a child by name, or a nested descendant by a `/`-joined
    /// name path (`"a/b/c"`). Intermediate segments must be groups.
    pub fn child_named(&self, group: GroupId, path: &str) -> Option<NodeId> {
        let mut current = group;
        let mut segments = path.split('/').filter(|s| !s.is_empty()).peekable();
        loop {
            let segment = segments.next()?;
            let child = self.groups[current.0]
                .children
                .iter()
                .copied()
                .find(|&node| self.node_name(node) == segment)?;
            if segments.peek().is_none() {
                return Some(child);
            }
            match child {
                NodeId::Group(g) => current = g,
                NodeId::File(_) => return None,
            }
        }
    }

    /// Display name of a node.
    pub fn node_name(&self, node: NodeId) -> &str {
        match node {
            NodeId::Group(g) => self.groups[g.0].name(),
            NodeId::File(f) => self.file_refs[f.0].name(),
        }
    }

    /// Absolute on-disk directory a group corresponds to.
    pub fn real_path(&self, group: GroupId) -> PathBuf {
        let mut chain = Vec::new();
        let mut current = Some(group);
        while let Some(id) = current {
            let g = &self.groups[id.0];
            if !g.path.is_empty() {
                chain.push(g.path.as_str());
            }
            current = g.parent;
        }
        let mut path = self.root_dir.clone();
        for segment in chain.into_iter().rev() {
            path.push(segment);
        }
        path
    }

    /// Absolute on-disk path of a file reference.
    pub fn file_real_path(&self, id: FileRefId) -> PathBuf {
        let fref = &self.file_refs[id.0];
        self.real_path(fref.parent).join(&fref.path)
    }

    /// Tag a reference with the file type derived from its extension.
    pub fn set_explicit_file_type(&mut self, id: FileRefId) {
        let file_type = {
            let extension = Path::new(&self.file_refs[id.0].path)
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("");
            file_types::for_extension(extension)
        };
        self.file_refs[id.0].explicit_file_type = Some(file_type);
    }

    /// Add a reference to a target's frameworks phase. Idempotent per
    /// (target, reference).
    pub fn add_to_frameworks_phase(&mut self, target: TargetId, file_ref: FileRefId, weak: bool) {
        let phase = &mut self.targets[target.0].frameworks;
        if !phase.iter().any(|bf| bf.file_ref == file_ref) {
            phase.push(BuildFile { file_ref, weak });
        }
    }

    /// Add a reference to a target's sources phase. Idempotent per
    /// (target, reference).
    pub fn add_to_sources_phase(&mut self, target: TargetId, file_ref: FileRefId, weak: bool) {
        let phase = &mut self.targets[target.0].sources;
        if !phase.iter().any(|bf| bf.file_ref == file_ref) {
            phase.push(BuildFile { file_ref, weak });
        }
    }

    /// Add references to a target's resources phase. Idempotent per
    /// (target, reference).
    pub fn add_resources(&mut self, target: TargetId, refs: &[FileRefId]) {
        for &file_ref in refs {
            let phase = &mut self.targets[target.0].resources;
            if !phase.contains(&file_ref) {
                phase.push(file_ref);
            }
        }
    }
}
