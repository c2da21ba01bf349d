pub mod locator;
pub mod template;

pub use locator::find_templates;
pub use template::{UpdateOutcome, VersionChange, update_template};
