//! In-memory Xcode project manifest model.
//!
//! Holds the group/file-reference tree and the target list that the sync
//! layer mutates. The model is a passive collaborator: it enforces no
//! naming policy of its own (duplicate checks belong to the caller) and
//! never touches the filesystem. The host process is responsible for
//! loading and persisting the on-disk pbxproj representation.
//!
//! All nodes live in arenas owned by [`Project`] and are addressed by
//! copyable typed ids, so callers can hold ids across mutations without
//! interior mutability.

pub mod file_types;
pub mod project;

pub use project::{
    BuildFile, FileRefId, FileReference, Group, GroupId, NodeId, Project, Target, TargetId,
};
