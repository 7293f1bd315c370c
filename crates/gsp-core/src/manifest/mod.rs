//! Package manifest transformation
//!
//! After materialization the copied `package.json` gets its `name` set from
//! the project name and receives the dependency entries declared by the
//! selected axis options. Unrelated fields and key order are preserved.

pub mod augment;
pub mod package;

pub use augment::{Augmentation, DependencyTable};
pub use package::{package_name, transform_manifest, PackageManifest, MANIFEST_FILE};
