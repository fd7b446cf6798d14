//! Filesystem primitives used by the synchronization walk.
//!
//! None of these are transactional: a failure mid-copy leaves whatever
//! was written so far on disk. The sync layer propagates the error and
//! performs no cleanup (documented limitation).

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// Copy `src` (file, directory tree, or symlink) into the directory
/// `dst_dir`, preserving the source's basename. Returns the destination
/// path.
pub fn copy_recursive(src: &Path, dst_dir: &Path) -> Result<PathBuf> {
    let name = src.file_name().ok_or_else(|| Error::InvalidFile {
        path: src.to_path_buf(),
    })?;
    let dst = dst_dir.join(name);
    copy_entry(src, &dst)?;
    Ok(dst)
}

fn copy_entry(src: &Path, dst: &Path) -> Result<()> {
    let meta = fs::symlink_metadata(src).map_err(|e| Error::io(src, e))?;

    if meta.file_type().is_symlink() {
        copy_symlink(src, dst)
    } else if meta.is_dir() {
        fs::create_dir_all(dst).map_err(|e| Error::io(dst, e))?;
        for child in sorted_entries(src)? {
            let Some(name) = child.file_name() else {
                continue;
            };
            copy_entry(&child, &dst.join(name))?;
        }
        Ok(())
    } else {
        fs::copy(src, dst).map_err(|e| Error::io(dst, e))?;
        Ok(())
    }
}

#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    let target = fs::read_link(src).map_err(|e| Error::io(src, e))?;
    std::os::unix::fs::symlink(&target, dst).map_err(|e| Error::io(dst, e))
}

#[cfg(not(unix))]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    // No portable symlink creation; copy the referent instead.
    fs::copy(src, dst).map_err(|e| Error::io(dst, e))?;
    Ok(())
}

/// Replace a symlink with the file or directory it points at.
///
/// The link is unlinked and its target moved into the link's former
/// location, so the tree becomes self-contained. Relative link targets
/// are resolved against the link's parent directory. A dangling target
/// surfaces as an I/O error.
pub fn resolve_link(link: &Path) -> Result<()> {
    let raw = fs::read_link(link).map_err(|e| Error::io(link, e))?;
    let target = if raw.is_absolute() {
        raw
    } else {
        link.parent().map(|p| p.join(&raw)).unwrap_or(raw)
    };
    debug!(link = %link.display(), target = %target.display(), "resolving symlink in place");

    fs::remove_file(link).map_err(|e| Error::io(link, e))?;
    if fs::rename(&target, link).is_err() {
        // Cross-device move: fall back to copy + remove.
        copy_entry(&target, link)?;
        if target.is_dir() {
            fs::remove_dir_all(&target).map_err(|e| Error::io(&target, e))?;
        } else {
            fs::remove_file(&target).map_err(|e| Error::io(&target, e))?;
        }
    }
    Ok(())
}

/// Directory entries sorted by name, for a deterministic walk order.
pub fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let read = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    let mut entries = Vec::new();
    for entry in read {
        entries.push(entry.map_err(|e| Error::io(dir, e))?.path());
    }
    entries.sort();
    Ok(entries)
}

/// Relative path from `base` to `path`, with `..` segments where `path`
/// is not beneath `base`. Both are absolutized lexically first (no
/// symlink resolution).
pub fn relative_path_from(path: &Path, base: &Path) -> Result<PathBuf> {
    let path = std::path::absolute(path).map_err(|e| Error::io(path, e))?;
    let base = std::path::absolute(base).map_err(|e| Error::io(base, e))?;

    let path_parts: Vec<_> = path.components().collect();
    let base_parts: Vec<_> = base.components().collect();
    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for part in &path_parts[common..] {
        rel.push(part);
    }
    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    Ok(rel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_path_from_child() {
        let rel = relative_path_from(Path::new("/a/b/c"), Path::new("/a/b")).unwrap();
        assert_eq!(rel, PathBuf::from("c"));
    }

    #[test]
    fn test_relative_path_from_sibling() {
        let rel = relative_path_from(Path::new("/a/x/y"), Path::new("/a/b")).unwrap();
        assert_eq!(rel, PathBuf::from("../x/y"));
    }

    #[test]
    fn test_relative_path_from_same() {
        let rel = relative_path_from(Path::new("/a/b"), Path::new("/a/b")).unwrap();
        assert_eq!(rel, PathBuf::from("."));
    }
}
