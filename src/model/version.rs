use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::TemplateError;

/// Which component of a version to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BumpLevel {
    Patch,
    Minor,
    Major,
}

impl BumpLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patch => "patch",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpLevel {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patch" => Ok(Self::Patch),
            "minor" => Ok(Self::Minor),
            "major" => Ok(Self::Major),
            other => Err(TemplateError::UnknownLevel(other.to_string())),
        }
    }
}

/// A `major.minor.patch` version with no pre-release or build metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemanticVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Fails with `VersionOverflow` when the bumped component would exceed
    /// `u64::MAX`.
    pub fn bump(self, level: BumpLevel) -> Result<Self, TemplateError> {
        let overflow = || TemplateError::VersionOverflow(self.to_string());
        let bumped = match level {
            BumpLevel::Patch => {
                let patch = self.patch.checked_add(1).ok_or_else(overflow)?;
                Self::new(self.major, self.minor, patch)
            }
            BumpLevel::Minor => {
                let minor = self.minor.checked_add(1).ok_or_else(overflow)?;
                Self::new(self.major, minor, 0)
            }
            BumpLevel::Major => {
                let major = self.major.checked_add(1).ok_or_else(overflow)?;
                Self::new(major, 0, 0)
            }
        };
        Ok(bumped)
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemanticVersion {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        let well_formed = parts.len() == 3
            && parts
                .iter()
                .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()));
        if !well_formed {
            return Err(TemplateError::MalformedVersion(s.to_string()));
        }

        // Digits only at this point, so the sole parse failure is overflow.
        let component = |part: &str| {
            part.parse::<u64>()
                .map_err(|_| TemplateError::VersionOverflow(s.to_string()))
        };
        Ok(Self::new(
            component(parts[0])?,
            component(parts[1])?,
            component(parts[2])?,
        ))
    }
}

pub fn parse_version(version: &str) -> Result<SemanticVersion, TemplateError> {
    version.parse()
}

/// Increments `version` by `level` and returns the new canonical string.
pub fn increment_version(version: &str, level: &str) -> Result<String, TemplateError> {
    let current = parse_version(version)?;
    let level: BumpLevel = level.parse()?;
    Ok(current.bump(level)?.to_string())
}
