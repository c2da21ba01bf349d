use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::TemplateError;
use crate::model::MANIFEST_FILE;

/// Resolves `target` to the manifest files it names.
///
/// A manifest file resolves to itself. A directory is searched recursively
/// and the matches are returned sorted by path.
pub fn find_templates(target: &Path) -> Result<Vec<PathBuf>, TemplateError> {
    if !target.exists() {
        return Err(TemplateError::TargetNotFound(target.to_path_buf()));
    }

    if target.is_file() && target.file_name() == Some(OsStr::new(MANIFEST_FILE)) {
        return Ok(vec![target.to_path_buf()]);
    }

    if !target.is_dir() {
        return Err(TemplateError::InvalidTarget(target.to_path_buf()));
    }

    let mut templates = Vec::new();
    for entry in WalkDir::new(target) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry under {}: {e}", target.display());
                continue;
            }
        };
        // `Path::is_file` follows symlinks, matching the single-file branch.
        if entry.file_name() == MANIFEST_FILE && entry.path().is_file() {
            debug!("found template manifest {}", entry.path().display());
            templates.push(entry.into_path());
        }
    }

    if templates.is_empty() {
        return Err(TemplateError::NoTemplatesFound(target.to_path_buf()));
    }

    templates.sort();
    Ok(templates)
}
