pub mod manifest;
pub mod version;

pub use manifest::{MANIFEST_FILE, TemplateManifest, VersionField};
pub use version::{BumpLevel, SemanticVersion, increment_version, parse_version};
