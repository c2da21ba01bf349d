//! Version bumping and registry publishing for collections of devcontainer
//! templates.
//!
//! Each template directory holds a `devcontainer-template.json` manifest.
//! [`store::find_templates`] locates them, [`store::update_template`] bumps
//! their `version` in place, and [`cli::publish`] pushes the result to an
//! OCI registry through the `devcontainer` CLI.

pub mod cli;
pub mod error;
pub mod git;
pub mod model;
pub mod output;
pub mod process;
pub mod publish;
pub mod store;

pub use error::TemplateError;
