//! End-to-end scenarios: wiring a vendored SDK payload into a project
//! the way a dependency manager's post-install step would.

use pbx_model::NodeId;
use pbx_sync::{ProjectTreeSync, find_group_by_name, find_target_by_name, group_for_path};
use pbx_test_utils::TestProject;
use pretty_assertions::assert_eq;

/// Stage a typical third-party SDK payload in the vendor directory.
fn stage_sdk(fixture: &TestProject) {
    fixture.vendor_file("FooSDK/libFooSDK.a", b"!<arch>\n");
    fixture.vendor_file("FooSDK/FooResources.bundle/icon.png", b"\x89PNG");
    fixture.vendor_file("FooSDK/include/FooSDK.h", b"// umbrella\n");
    fixture.vendor_file("FooSDK/include/detail/Impl.h", b"// detail\n");
}

#[test]
fn test_wire_sdk_into_project() {
    let mut fixture = TestProject::new();
    stage_sdk(&fixture);

    let main = fixture.project.main_group();
    fixture.project.new_group(main, "Vendor", "Vendor");
    fixture.project.new_target("App");
    fixture.project.new_target("AppTests");

    let vendor_group = find_group_by_name(&fixture.project, "Vendor").unwrap();
    let app = find_target_by_name(&fixture.project, "App").unwrap();
    assert!(find_target_by_name(&fixture.project, "Nope").is_none());

    let lib_path = fixture.vendor().join("FooSDK/libFooSDK.a");
    let bundle_path = fixture.vendor().join("FooSDK/FooResources.bundle");
    let include_path = fixture.vendor().join("FooSDK/include");

    let mut sync = ProjectTreeSync::new(&mut fixture.project);
    let lib = sync.add_static_lib(app, vendor_group, &lib_path).unwrap();
    let bundle = sync.add_bundle(app, vendor_group, &bundle_path).unwrap();
    let headers = sync.add_header_tree(vendor_group, &include_path).unwrap();

    // Everything landed inside the sandbox.
    fixture.assert_sandbox_has("Vendor/libFooSDK.a");
    fixture.assert_sandbox_has("Vendor/FooResources.bundle/icon.png");
    fixture.assert_sandbox_has("Vendor/include/detail/Impl.h");

    // Tree shape: lib + bundle flat, headers as a nested group.
    let lib_ref = lib.as_file().unwrap();
    assert!(bundle.as_file().is_some());
    let include = headers.as_group().unwrap();
    assert_eq!(fixture.project.group(vendor_group).children().len(), 3);
    assert!(matches!(
        fixture.project.child_named(include, "detail/Impl.h"),
        Some(NodeId::File(_))
    ));

    // Phase membership: lib links, bundle ships, headers build nothing.
    let target = fixture.project.target(app);
    assert_eq!(target.frameworks_phase().len(), 1);
    assert_eq!(target.frameworks_phase()[0].file_ref, lib_ref);
    assert_eq!(target.resources_phase().len(), 1);
    assert_eq!(target.sources_phase().len(), 0);

    // The second target was never wired.
    let tests_target = find_target_by_name(&fixture.project, "AppTests").unwrap();
    assert_eq!(fixture.project.target(tests_target).frameworks_phase().len(), 0);
}

#[test]
fn test_wire_source_drop_with_mixed_content() {
    let mut fixture = TestProject::new();
    fixture.vendor_file("Drop/Core.m", b"// core\n");
    fixture.vendor_file("Drop/util/helper.cpp", b"// helper\n");
    fixture.vendor_file("Drop/Skin.xcassets/Contents.json", b"{}");
    fixture.vendor_file("Drop/.DS_Store", b"junk");

    let main = fixture.project.main_group();
    let target = fixture.project.new_target("App");
    let drop_path = fixture.vendor().join("Drop");

    let added = ProjectTreeSync::new(&mut fixture.project)
        .add_file_or_folder(main, &drop_path, &[target], true, true)
        .unwrap();

    let top = added.as_group().unwrap();
    // Core.m, util group, Skin.xcassets — the hidden file is gone.
    assert_eq!(fixture.project.group(top).children().len(), 3);
    assert_eq!(fixture.project.child_named(top, ".DS_Store"), None);
    assert_eq!(
        fixture.project.child_named(top, "Skin.xcassets/Contents.json"),
        None
    );

    // Both sources compile; the asset catalog ships as a resource.
    let t = fixture.project.target(target);
    assert_eq!(t.sources_phase().len(), 2);
    assert_eq!(t.resources_phase().len(), 1);
    assert_eq!(t.frameworks_phase().len(), 0);
}

#[test]
fn test_resolver_reuses_groups_across_operations() {
    let mut fixture = TestProject::new();
    fixture.sandbox_file("ThirdParty/Foo/keep.txt", b"keep\n");
    let main = fixture.project.main_group();

    let first = group_for_path(&mut fixture.project, main, "ThirdParty/Foo", true)
        .unwrap()
        .unwrap();
    let second = group_for_path(&mut fixture.project, main, "ThirdParty/Foo", true)
        .unwrap()
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(
        fixture.project.real_path(first),
        fixture.sandbox().join("ThirdParty/Foo")
    );
}
