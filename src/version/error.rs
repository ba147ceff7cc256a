use std::fmt;

use thiserror::Error;

/// Which part of a version a bounds error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionPart {
    Major,
    Minor,
    Patch,
}

impl VersionPart {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionPart::Major => "Major",
            VersionPart::Minor => "Minor",
            VersionPart::Patch => "Patch",
        }
    }
}

impl fmt::Display for VersionPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of [`VersionError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value is outside its domain, or the input was absent
    InvalidArgument,
    /// The version string does not match the dotted-decimal grammar
    MalformedFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("{part} version part should be in range between 0 and {max}.")]
    OutOfRange { part: VersionPart, max: u32 },

    #[error("Version code should be in range between 0 and 2147483647.")]
    NegativeCode,

    #[error("Version string cannot be null.")]
    NullInput,

    #[error("Invalid version string '{0}'")]
    Malformed(String),
}

impl VersionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VersionError::OutOfRange { .. } | VersionError::NegativeCode | VersionError::NullInput => {
                ErrorKind::InvalidArgument
            }
            VersionError::Malformed(_) => ErrorKind::MalformedFormat,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Json(#[from] serde_json::Error),
}
