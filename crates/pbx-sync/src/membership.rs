//! Build-phase membership for file references.

use pbx_model::{FileRefId, Project, TargetId};
use tracing::debug;

use crate::classify;

/// Attach `file_ref` to the build phases of `target` that its on-disk
/// role calls for: static libraries link (frameworks phase, weak),
/// bundles and physical directories ship (resources phase), compile
/// sources build (sources phase, weak).
///
/// The phases are not assumed mutually exclusive; a reference matching
/// nothing is left out of every phase, which is not an error.
pub fn attach(project: &mut Project, target: TargetId, file_ref: FileRefId) {
    let real = project.file_real_path(file_ref);

    if classify::is_static_lib(&real) {
        debug!(target = %project.target(target).name(), path = %real.display(), "frameworks phase");
        project.add_to_frameworks_phase(target, file_ref, true);
    }

    if classify::is_bundle(&real) || real.is_dir() {
        debug!(target = %project.target(target).name(), path = %real.display(), "resources phase");
        project.add_resources(target, &[file_ref]);
    }

    if classify::is_compile_source(&real) {
        debug!(target = %project.target(target).name(), path = %real.display(), "sources phase");
        project.add_to_sources_phase(target, file_ref, true);
    }
}
