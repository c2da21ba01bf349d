use std::io;
use std::path::{Path, PathBuf};

use crate::error::TemplateError;
use crate::model::BumpLevel;
use crate::process::{CommandLine, OutputMode, ProcessRunner};

pub const PUBLISH_TOOL: &str = "devcontainer";
pub const DEFAULT_REGISTRY: &str = "ghcr.io";
pub const BUMP_BINARY: &str = "bump-version";

/// Everything the publish workflow needs to know, resolved from flags and
/// environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub target: String,
    pub registry: String,
    pub namespace: String,
    /// Bump versions first, at this level.
    pub bump: Option<BumpLevel>,
    pub dry_run: bool,
}

impl PublishRequest {
    /// The `bump-version` invocation for the version step, or `None` when no
    /// bump was requested. It previews when we are dry-running and commits
    /// otherwise.
    pub fn bump_command(&self, bump_exe: &Path) -> Option<CommandLine> {
        let level = self.bump?;
        let mode = if self.dry_run { "--dry-run" } else { "--commit" };
        Some(
            CommandLine::new(bump_exe.to_string_lossy())
                .args(["--level", level.as_str(), "--target", self.target.as_str(), mode]),
        )
    }

    pub fn publish_command(&self) -> CommandLine {
        CommandLine::new(PUBLISH_TOOL).args([
            "templates",
            "publish",
            self.target.as_str(),
            "-r",
            self.registry.as_str(),
            "-n",
            self.namespace.as_str(),
        ])
    }

    pub fn view_url(&self) -> String {
        format!("https://{}/{}", self.registry, self.namespace)
    }
}

/// Locates the `bump-version` executable installed alongside the current one.
pub fn sibling_bump_exe() -> io::Result<PathBuf> {
    let current = std::env::current_exe()?;
    Ok(current.with_file_name(format!("{BUMP_BINARY}{}", std::env::consts::EXE_SUFFIX)))
}

/// Runs `command` with inherited output, mapping a missing program to
/// `ToolNotFound` and a non-zero exit to `SubprocessFailed`.
pub fn run_step(runner: &dyn ProcessRunner, command: &CommandLine, tool: &str) -> Result<(), TemplateError> {
    let outcome = runner
        .run(command, OutputMode::Inherit)
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => TemplateError::ToolNotFound {
                tool: tool.to_string(),
            },
            _ => TemplateError::SubprocessFailed {
                program: tool.to_string(),
                status: e.to_string(),
            },
        })?;

    if !outcome.is_success() {
        return Err(TemplateError::SubprocessFailed {
            program: tool.to_string(),
            status: outcome.status_text(),
        });
    }
    Ok(())
}
