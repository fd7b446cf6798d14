//! Folder-to-group synchronization for Xcode project manifests.
//!
//! Wires third-party artifacts — static libraries, resource bundles,
//! header trees, arbitrary files and folders — into a consumer's
//! project model, mirroring physical directory trees into the logical
//! group hierarchy and attaching references to the right build phases.
//!
//! The project model itself is a collaborator ([`pbx_model::Project`]);
//! this crate performs one-shot mutations against it and against the
//! sandbox directory the model maps to. See [`sync::ProjectTreeSync`]
//! for the entry points.
//!
//! # Example
//!
//! ```no_run
//! use pbx_model::Project;
//! use pbx_sync::ProjectTreeSync;
//! use std::path::Path;
//!
//! let mut project = Project::new("/path/to/AppSandbox");
//! let group = project.new_group(project.main_group(), "Vendor", "Vendor");
//! let target = project.new_target("App");
//!
//! let mut sync = ProjectTreeSync::new(&mut project);
//! sync.add_static_lib(target, group, Path::new("/artifacts/libFoo.a"))?;
//! # Ok::<(), pbx_sync::Error>(())
//! ```

pub mod classify;
pub mod error;
pub mod fsops;
pub mod logging;
pub mod lookup;
pub mod membership;
pub mod resolve;
pub mod sync;

pub use error::{Error, Result};
pub use lookup::{find_group_by_name, find_target_by_name};
pub use resolve::group_for_path;
pub use sync::{AddedNode, ProjectTreeSync};
