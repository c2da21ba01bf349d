use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::TemplateError;
use crate::model::{BumpLevel, SemanticVersion, TemplateManifest, VersionField};

/// The version change computed for one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    pub id: String,
    pub current: String,
    pub new: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Dry run: the change was computed and reported, nothing was written.
    Previewed(VersionChange),
    /// The manifest on disk now carries the new version.
    Written(VersionChange),
}

impl UpdateOutcome {
    pub fn change(&self) -> &VersionChange {
        match self {
            Self::Previewed(change) | Self::Written(change) => change,
        }
    }
}

/// Bumps the `version` of the manifest at `path`.
///
/// `report` is called with the computed change before anything is written,
/// in dry-run mode too. On any error the file at `path` is left as it was.
pub fn update_template(
    path: &Path,
    level: BumpLevel,
    dry_run: bool,
    report: impl FnOnce(&VersionChange),
) -> Result<UpdateOutcome, TemplateError> {
    let mut manifest = load_manifest(path)?;

    let current = match manifest.version() {
        VersionField::Missing => {
            return Err(TemplateError::MissingVersion {
                path: path.to_path_buf(),
            });
        }
        VersionField::Other(value) => {
            return Err(TemplateError::MalformedVersion(value.to_string()));
        }
        VersionField::Text(v) => v.to_string(),
    };

    let new = current.parse::<SemanticVersion>()?.bump(level)?.to_string();
    let change = VersionChange {
        id: manifest.id(),
        current,
        new,
    };
    report(&change);

    if dry_run {
        return Ok(UpdateOutcome::Previewed(change));
    }

    manifest.set_version(change.new.clone());
    write_atomic(path, &manifest).map_err(|source| TemplateError::WriteError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(UpdateOutcome::Written(change))
}

fn load_manifest(path: &Path) -> Result<TemplateManifest, TemplateError> {
    let content = fs::read(path).map_err(|source| TemplateError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_slice(&content).map_err(|source| TemplateError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;
    TemplateManifest::from_value(value).ok_or_else(|| TemplateError::NotAnObject {
        path: path.to_path_buf(),
    })
}

/// Writes `manifest` to a sibling temp file, re-parses it, then renames it
/// over `path`. The rename is the only step that touches `path`.
fn write_atomic(path: &Path, manifest: &TemplateManifest) -> io::Result<()> {
    let dir = parent_dir(path);
    let content = manifest.to_pretty_json()?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".devcontainer-template.")
        .suffix(".tmp")
        .tempfile_in(&dir)?;
    debug!("writing {} via {}", path.display(), tmp.path().display());

    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;

    let written = fs::read(tmp.path())?;
    serde_json::from_slice::<serde_json::Value>(&written)?;

    let permissions = fs::metadata(path)?.permissions();
    fs::set_permissions(tmp.path(), permissions)?;

    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
