//! tests/sandbox_tests.rs
//!
//! Sandbox materialization: when a source is copied into the group's
//! real directory, and when the copy is skipped because the source
//! already sits there.

use assert_fs::prelude::*;
use pbx_model::Project;
use pbx_sync::{Error, ProjectTreeSync};
use predicates::prelude::*;

#[test]
fn test_copy_materializes_source_into_sandbox() {
    let sandbox = assert_fs::TempDir::new().unwrap();
    let vendor = assert_fs::TempDir::new().unwrap();
    vendor
        .child("Assets.bundle/strings.txt")
        .write_str("hello")
        .unwrap();

    let mut project = Project::new(sandbox.path());
    let main = project.main_group();
    let target = project.new_target("App");

    ProjectTreeSync::new(&mut project)
        .add_bundle(target, main, &vendor.path().join("Assets.bundle"))
        .unwrap();

    sandbox.child("Assets.bundle").assert(predicate::path::is_dir());
    sandbox.child("Assets.bundle/strings.txt").assert("hello");
    // The vendor copy is untouched.
    vendor.child("Assets.bundle/strings.txt").assert("hello");
}

#[test]
fn test_source_already_at_destination_is_not_recopied() {
    let sandbox = assert_fs::TempDir::new().unwrap();
    sandbox.child("Libs/libFoo.a").write_str("payload").unwrap();

    let mut project = Project::new(sandbox.path());
    let main = project.main_group();
    let libs = project.new_group(main, "Libs", "Libs");
    let target = project.new_target("App");

    // The source path is the destination path: the copy must be
    // skipped (a real copy onto itself would truncate the file), while
    // reference creation proceeds as normal.
    let in_place = sandbox.path().join("Libs/libFoo.a");
    let added = ProjectTreeSync::new(&mut project)
        .add_static_lib(target, libs, &in_place)
        .unwrap();

    assert!(added.as_file().is_some());
    sandbox.child("Libs/libFoo.a").assert("payload");
    assert_eq!(project.target(target).frameworks_phase().len(), 1);
}

#[test]
fn test_in_place_source_still_hits_duplicate_check() {
    let sandbox = assert_fs::TempDir::new().unwrap();
    sandbox.child("Libs/libFoo.a").write_str("payload").unwrap();

    let mut project = Project::new(sandbox.path());
    let main = project.main_group();
    let libs = project.new_group(main, "Libs", "Libs");
    let target = project.new_target("App");

    let in_place = sandbox.path().join("Libs/libFoo.a");
    ProjectTreeSync::new(&mut project)
        .add_static_lib(target, libs, &in_place)
        .unwrap();
    let err = ProjectTreeSync::new(&mut project)
        .add_static_lib(target, libs, &in_place)
        .unwrap_err();

    assert!(matches!(err, Error::DuplicateEntry { .. }));
    sandbox.child("Libs/libFoo.a").assert("payload");
}
