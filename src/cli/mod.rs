pub mod bump;
pub mod publish;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::model::BumpLevel;
use crate::output::ColorChoice;
use crate::publish::DEFAULT_REGISTRY;

#[derive(Debug, Parser)]
#[command(
    name = "bump-version",
    about = "DevContainer Template Version Bumper",
    version,
    after_help = "\
Examples:
  # Bump patch version for all templates (1.0.0 -> 1.0.1)
  bump-version

  # Bump minor version for all templates (1.0.0 -> 1.1.0)
  bump-version --level minor

  # Preview changes without applying
  bump-version --dry-run

  # Bump and commit to git
  bump-version --level patch --commit

  # Bump single template
  bump-version --target src/nanodev-node"
)]
pub struct BumpCli {
    /// Version level to bump
    #[arg(short, long, value_enum, default_value_t = BumpLevel::Patch)]
    pub level: BumpLevel,

    /// Target template or directory
    #[arg(short, long, default_value = "src")]
    pub target: PathBuf,

    /// Show changes without applying them
    #[arg(short, long)]
    pub dry_run: bool,

    /// Commit changes to git with automatic message
    #[arg(short, long)]
    pub commit: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// When to use terminal colors
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

#[derive(Debug, Parser)]
#[command(
    name = "publish-templates",
    about = "DevContainer Template Publisher",
    version,
    after_help = "\
Examples:
  # Publish all templates (no version bump)
  publish-templates --namespace myorg/myrepo

  # Publish specific template only
  publish-templates src/nanodev-python --namespace myorg/myrepo

  # Bump patch version for all templates and publish
  publish-templates -u --namespace myorg/myrepo

  # Bump minor version for specific template and publish
  publish-templates -u --level minor src/nanodev-node --namespace myorg/myrepo

  # Dry run with version bump
  publish-templates -u --dry-run --namespace myorg/myrepo"
)]
pub struct PublishCli {
    /// Target template directory or specific template
    #[arg(default_value = "./src")]
    pub target: String,

    /// Update version before publishing
    #[arg(short = 'u', long)]
    pub update_version: bool,

    /// Version bump level (only used with -u)
    #[arg(short, long, value_enum, default_value_t = BumpLevel::Patch)]
    pub level: BumpLevel,

    /// Registry namespace (e.g., owner/repo)
    #[arg(short, long)]
    pub namespace: String,

    /// OCI registry
    #[arg(short, long, env = "REGISTRY", default_value = DEFAULT_REGISTRY)]
    pub registry: String,

    /// Show what would happen without publishing
    #[arg(short, long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// When to use terminal colors
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "template_release=debug"
        } else {
            "template_release=warn"
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
