//! Shared test utilities for the pbxwire workspace.
//!
//! Provides [`TestProject`], a tempdir-backed project sandbox plus a
//! separate "vendor" directory for staging out-of-sandbox source
//! artifacts. Dev-dependency only — never published.

use std::fs;
use std::path::{Path, PathBuf};

use pbx_model::Project;
use tempfile::TempDir;

/// A project rooted in a temporary sandbox directory, with a second
/// temporary directory standing in for an external artifact location
/// (the place a dependency manager would download payloads to).
///
/// # Example
///
/// ```rust,no_run
/// use pbx_test_utils::TestProject;
///
/// let mut fixture = TestProject::new();
/// let lib = fixture.vendor_file("libFoo.a", b"!<arch>\n");
/// let group = fixture.project.new_group(fixture.project.main_group(), "Libs", "Libs");
/// ```
pub struct TestProject {
    sandbox: TempDir,
    vendor: TempDir,
    pub project: Project,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create a fresh sandbox and an empty project rooted in it.
    pub fn new() -> Self {
        let sandbox = TempDir::new().expect("TestProject: failed to create sandbox dir");
        let vendor = TempDir::new().expect("TestProject: failed to create vendor dir");
        let project = Project::new(sandbox.path());
        Self {
            sandbox,
            vendor,
            project,
        }
    }

    /// Root of the project sandbox (the main group's real path).
    pub fn sandbox(&self) -> &Path {
        self.sandbox.path()
    }

    /// Root of the external vendor directory.
    pub fn vendor(&self) -> &Path {
        self.vendor.path()
    }

    /// Write a file under the vendor directory, creating parents.
    pub fn vendor_file(&self, rel: &str, content: &[u8]) -> PathBuf {
        write_file(self.vendor.path(), rel, content)
    }

    /// Create a directory under the vendor directory.
    pub fn vendor_dir(&self, rel: &str) -> PathBuf {
        let path = self.vendor.path().join(rel);
        fs::create_dir_all(&path).expect("TestProject: failed to create vendor dir");
        path
    }

    /// Write a file under the sandbox, creating parents.
    pub fn sandbox_file(&self, rel: &str, content: &[u8]) -> PathBuf {
        write_file(self.sandbox.path(), rel, content)
    }

    /// Create a directory under the sandbox.
    pub fn sandbox_dir(&self, rel: &str) -> PathBuf {
        let path = self.sandbox.path().join(rel);
        fs::create_dir_all(&path).expect("TestProject: failed to create sandbox dir");
        path
    }

    /// Create a symlink at `link_rel` inside the vendor directory. The
    /// target string is stored as-is, so relative targets survive a
    /// recursive copy of the containing tree.
    #[cfg(unix)]
    pub fn vendor_symlink(&self, raw_target: &str, link_rel: &str) -> PathBuf {
        let link = self.vendor.path().join(link_rel);
        if let Some(parent) = link.parent() {
            fs::create_dir_all(parent).expect("TestProject: failed to create link parent");
        }
        std::os::unix::fs::symlink(raw_target, &link)
            .expect("TestProject: failed to create symlink");
        link
    }

    /// Assert a path relative to the sandbox exists on disk.
    pub fn assert_sandbox_has(&self, rel: &str) {
        assert!(
            self.sandbox.path().join(rel).exists(),
            "expected sandbox to contain {rel}"
        );
    }

    /// Assert a path relative to the sandbox does not exist on disk.
    pub fn assert_sandbox_missing(&self, rel: &str) {
        assert!(
            !self.sandbox.path().join(rel).exists(),
            "expected sandbox not to contain {rel}"
        );
    }
}

fn write_file(root: &Path, rel: &str, content: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("TestProject: failed to create parent dirs");
    }
    fs::write(&path, content).expect("TestProject: failed to write file");
    path
}
