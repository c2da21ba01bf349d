use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::PublishCli;
use crate::output::{self, emphasis};
use crate::process::ProcessRunner;
use crate::publish::{self, BUMP_BINARY, PUBLISH_TOOL, PublishRequest};

impl From<&PublishCli> for PublishRequest {
    fn from(cli: &PublishCli) -> Self {
        Self {
            target: cli.target.clone(),
            registry: cli.registry.clone(),
            namespace: cli.namespace.clone(),
            bump: cli.update_version.then_some(cli.level),
            dry_run: cli.dry_run,
        }
    }
}

pub fn run(cli: &PublishCli, runner: &dyn ProcessRunner) -> Result<()> {
    let request = PublishRequest::from(cli);
    execute(&request, runner, publish::sibling_bump_exe)
}

/// Runs the bump step (when requested) and then the publish step, stopping
/// at the first failure. A dry run prints the publish command instead of
/// running it. `locate_bump` is only called when a bump was requested.
pub fn execute(
    request: &PublishRequest,
    runner: &dyn ProcessRunner,
    locate_bump: impl FnOnce() -> io::Result<PathBuf>,
) -> Result<()> {
    output::header("=== DevContainer Template Publisher ===");
    println!("Target: {}", request.target);
    println!("Registry: {}", request.registry);
    println!("Namespace: {}", request.namespace);
    match request.bump {
        Some(level) => println!("Update version: {} (level: {level})", emphasis("Yes")),
        None => println!("Update version: {}", emphasis("No")),
    }
    println!();

    let mut step = 1;
    if request.bump.is_some() {
        let bump_exe = locate_bump().context("failed to locate the bump-version executable")?;
        if let Some(command) = request.bump_command(&bump_exe) {
            output::header(format!("Step {step}: Bumping versions..."));
            publish::run_step(runner, &command, BUMP_BINARY).context("version bump failed")?;
        }
        println!();
        step += 1;
    }

    let command = request.publish_command();
    if request.dry_run {
        output::notice("[DRY RUN] Skipping actual publish");
        println!("Would run: {command}");
        return Ok(());
    }

    output::header(format!("Step {step}: Publishing templates..."));
    output::notice(format!(
        "Publishing to {}/{}...",
        request.registry, request.namespace
    ));
    publish::run_step(runner, &command, PUBLISH_TOOL).context("publish failed")?;

    println!();
    output::success("Templates published successfully!");
    println!("View at: {}", request.view_url());
    Ok(())
}
