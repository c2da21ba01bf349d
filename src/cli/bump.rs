use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use tracing::debug;

use crate::cli::BumpCli;
use crate::git;
use crate::model::BumpLevel;
use crate::output::{self, emphasis, highlight};
use crate::process::ProcessRunner;
use crate::store::{UpdateOutcome, find_templates, update_template};

/// Totals for one bump run; the exit code is derived from these.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BumpSummary {
    pub updated: usize,
    pub failed: usize,
    pub commit_failed: bool,
}

impl BumpSummary {
    pub fn exit_code(&self) -> ExitCode {
        if self.failed == 0 && !self.commit_failed {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

pub fn run(cli: &BumpCli, runner: &dyn ProcessRunner) -> Result<BumpSummary> {
    output::header("=== DevContainer Template Version Bumper ===");
    println!("Level: {}", emphasis(cli.level));
    println!("Target: {}", cli.target.display());
    if cli.dry_run {
        println!("Mode: {}", emphasis("DRY RUN"));
    }
    println!();

    let templates = find_templates(&cli.target)?;

    println!("Found {} template(s):", templates.len());
    println!();

    let mut summary = BumpSummary::default();
    for template in &templates {
        if update_one(template, cli.level, cli.dry_run) {
            summary.updated += 1;
        } else {
            summary.failed += 1;
        }
        println!();
    }

    if cli.commit {
        if cli.dry_run {
            debug!("dry run, not committing");
        } else if summary.failed > 0 {
            debug!("{} failure(s), not committing", summary.failed);
        } else {
            output::header("Committing changes...");
            match git::commit_templates(runner, cli.level) {
                Ok(()) => output::success("Changes committed"),
                Err(e) => {
                    output::error(e);
                    summary.commit_failed = true;
                }
            }
        }
    }

    output::header("=== Summary ===");
    if summary.failed == 0 {
        output::success("All templates updated successfully");
    } else {
        output::failure(format!("{} template(s) failed to update", summary.failed));
    }
    if summary.commit_failed {
        output::failure("Commit failed");
    }

    Ok(summary)
}

/// Updates a single manifest, reporting progress on stdout and failures on
/// stderr. Returns whether it succeeded.
fn update_one(template: &Path, level: BumpLevel, dry_run: bool) -> bool {
    let result = update_template(template, level, dry_run, |change| {
        output::header(format!("Template: {}", change.id));
        println!("  Current: {}", change.current);
        println!("  New:     {}", highlight(&change.new));
    });

    match result {
        Ok(UpdateOutcome::Previewed(_)) => {
            println!("  {}", emphasis("[DRY RUN] Skipping actual update"));
            true
        }
        Ok(UpdateOutcome::Written(_)) => {
            println!("  {}", highlight("✓ Updated"));
            true
        }
        Err(e) => {
            output::error(format!("{:#}", anyhow::Error::new(e)));
            false
        }
    }
}
