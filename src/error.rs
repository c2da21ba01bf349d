use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("invalid semver format: {0}")]
    MalformedVersion(String),

    #[error("version {0} has a component outside the supported range (0..=18446744073709551615)")]
    VersionOverflow(String),

    #[error("unknown level '{0}'; use: patch, minor, or major")]
    UnknownLevel(String),

    #[error("target not found: {}", .0.display())]
    TargetNotFound(PathBuf),

    #[error("no templates found in {}", .0.display())]
    NoTemplatesFound(PathBuf),

    #[error("invalid target: {}", .0.display())]
    InvalidTarget(PathBuf),

    #[error("failed to read file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} does not contain a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    #[error("no version field in {}", path.display())]
    MissingVersion { path: PathBuf },

    #[error("failed to update {}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("git error: {0}")]
    CommitFailed(String),

    #[error("{program} exited with {status}")]
    SubprocessFailed { program: String, status: String },

    #[error("{tool} command not found")]
    ToolNotFound { tool: String },
}
