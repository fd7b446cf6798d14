//! Find-or-create group resolution by relative path.

use pbx_model::{GroupId, NodeId, Project};
use tracing::debug;

use crate::{Error, Result};

/// Resolve `path` (a `/`-separated relative path, never absolute) to a
/// group under `start`, creating missing segments when
/// `create_if_needed` is set.
///
/// `"."` returns `start` unchanged. An existing nested path is returned
/// as-is; otherwise the walk descends segment by segment, creating each
/// missing child group with its name and on-disk subpath equal to that
/// segment. Returns `Ok(None)` only when `create_if_needed` is false and
/// a segment is missing. A segment that resolves to a file reference is
/// a [`Error::GroupExpected`] — groups are never created over an
/// existing child of a different kind.
pub fn group_for_path(
    project: &mut Project,
    start: GroupId,
    path: &str,
    create_if_needed: bool,
) -> Result<Option<GroupId>> {
    if path == "." {
        return Ok(Some(start));
    }

    match project.child_named(start, path) {
        Some(NodeId::Group(g)) => return Ok(Some(g)),
        Some(NodeId::File(_)) => {
            return Err(Error::GroupExpected {
                path: path.to_string(),
            });
        }
        None => {}
    }

    if !create_if_needed {
        return Ok(None);
    }

    let mut current = start;
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        current = match project.child_named(current, segment) {
            Some(NodeId::Group(g)) => g,
            Some(NodeId::File(_)) => {
                return Err(Error::GroupExpected {
                    path: path.to_string(),
                });
            }
            None => {
                debug!(group = %project.group(current).name(), segment, "creating group");
                project.new_group(current, segment, segment)
            }
        };
    }
    Ok(Some(current))
}
