//! File-role classification by extension.
//!
//! Pure predicates over filesystem paths. Absence is never an error
//! here: a path that does not exist simply classifies as nothing.

use std::path::Path;

/// Extensions always treated as a single indivisible file reference,
/// even when the path is physically a directory (`.framework`,
/// `.xcassets`, ...). This list is the single source of truth for
/// "stop recursing here" during folder synchronization.
pub const ATOMIC_EXTENSIONS: &[&str] = &[
    "a",
    "app",
    "bundle",
    "dylib",
    "framework",
    "h",
    "m",
    "mm",
    "markdown",
    "mdimporter",
    "octest",
    "pch",
    "plist",
    "sh",
    "swift",
    "xcassets",
    "xcconfig",
    "xcdatamodel",
    "xcodeproj",
    "xctest",
    "xib",
];

/// Extensions compiled by a target's sources phase.
pub const COMPILE_EXTENSIONS: &[&str] = &["c", "cpp", "m", "mm"];

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

/// True iff `path` exists, is a regular file, and is a `.a` archive.
pub fn is_static_lib(path: &Path) -> bool {
    extension(path) == Some("a") && path.exists() && !path.is_dir()
}

/// True iff `path` exists and is a `.bundle` directory.
pub fn is_bundle(path: &Path) -> bool {
    extension(path) == Some("bundle") && path.is_dir()
}

/// True iff `path` exists, is a regular file, and has a compile-source
/// extension.
pub fn is_compile_source(path: &Path) -> bool {
    extension(path).is_some_and(|ext| COMPILE_EXTENSIONS.contains(&ext))
        && path.exists()
        && !path.is_dir()
}

/// True iff the path's final extension is in [`ATOMIC_EXTENSIONS`],
/// regardless of what (if anything) sits on disk.
pub fn treat_as_file(path: &Path) -> bool {
    extension(path).is_some_and(|ext| ATOMIC_EXTENSIONS.contains(&ext))
}
