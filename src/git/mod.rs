use std::io;

use crate::error::TemplateError;
use crate::model::BumpLevel;
use crate::process::{CommandLine, OutputMode, ProcessRunner};

/// Pathspec staged by [`commit_templates`]; git expands the glob.
pub const STAGE_PATTERN: &str = "src/*/devcontainer-template.json";

pub fn commit_message(level: BumpLevel) -> String {
    format!("chore: bump template versions ({level})")
}

/// Stages the template manifests and commits them.
///
/// The two steps are not transactional: if the commit fails, whatever was
/// staged stays staged.
pub fn commit_templates(runner: &dyn ProcessRunner, level: BumpLevel) -> Result<(), TemplateError> {
    run_git(runner, &["add", STAGE_PATTERN])?;
    run_git(runner, &["commit", "-m", &commit_message(level)])?;
    Ok(())
}

fn run_git(runner: &dyn ProcessRunner, args: &[&str]) -> Result<(), TemplateError> {
    let command = CommandLine::new("git").args(args.iter().copied());
    let outcome = runner
        .run(&command, OutputMode::Capture)
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => TemplateError::CommitFailed("git command not found".to_string()),
            _ => TemplateError::CommitFailed(e.to_string()),
        })?;

    if !outcome.is_success() {
        let reason = if outcome.stderr.is_empty() {
            format!("`{command}` failed with {}", outcome.status_text())
        } else {
            outcome.stderr
        };
        return Err(TemplateError::CommitFailed(reason));
    }
    Ok(())
}
