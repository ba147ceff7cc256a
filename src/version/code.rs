//! Semantic version packed into a single Android `versionCode`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::version::error::VersionError;
use crate::version::packing::{
    check_code, check_major, check_minor, check_patch, pack, unpack,
};
use crate::version::parser::{Arity, parse_version_string};

/// A `major.minor.patch` version and its packed version code.
///
/// The packed code is the only stored field and the parts are decoded from it
/// on read, so both representations always agree. Every setter validates its
/// argument before touching the value.
///
/// Serialized as the packed integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct VersionCode {
    code: i32,
}

impl VersionCode {
    pub fn new(major: u32, minor: u32, patch: u32) -> Result<Self, VersionError> {
        let major = check_major(major)?;
        let minor = check_minor(minor)?;
        let patch = check_patch(patch)?;
        Ok(Self {
            code: pack(major, minor, patch),
        })
    }

    pub fn from_code(code: i32) -> Result<Self, VersionError> {
        Ok(Self {
            code: check_code(code)?,
        })
    }

    /// Parse a full `major.minor.patch` string.
    pub fn parse(version: &str) -> Result<Self, VersionError> {
        Self::parse_optional(Some(version))
    }

    /// Parse a string that may be absent, failing with
    /// [`VersionError::NullInput`] when it is.
    pub fn parse_optional(version: Option<&str>) -> Result<Self, VersionError> {
        let parsed = parse_version_string(version, Arity::MajorMinorPatch)?;
        Self::new(parsed.major, parsed.minor, parsed.patch.unwrap_or_default())
    }

    /// Parse a `major.minor` string and combine it with a separate patch.
    pub fn parse_with_patch(major_minor: &str, patch: u32) -> Result<Self, VersionError> {
        let parsed = parse_version_string(Some(major_minor), Arity::MajorMinor)?;
        Self::new(parsed.major, parsed.minor, patch)
    }

    pub fn major(&self) -> u32 {
        unpack(self.code).0
    }

    pub fn minor(&self) -> u32 {
        unpack(self.code).1
    }

    pub fn patch(&self) -> u32 {
        unpack(self.code).2
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn set_major(&mut self, major: u32) -> Result<(), VersionError> {
        let major = check_major(major)?;
        self.code = pack(major, self.minor(), self.patch());
        Ok(())
    }

    pub fn set_minor(&mut self, minor: u32) -> Result<(), VersionError> {
        let minor = check_minor(minor)?;
        self.code = pack(self.major(), minor, self.patch());
        Ok(())
    }

    pub fn set_patch(&mut self, patch: u32) -> Result<(), VersionError> {
        let patch = check_patch(patch)?;
        self.code = pack(self.major(), self.minor(), patch);
        Ok(())
    }

    pub fn set_code(&mut self, code: i32) -> Result<(), VersionError> {
        self.code = check_code(code)?;
        Ok(())
    }

    /// Render `<prefix><major>.<minor>.<patch><suffix>`.
    ///
    /// An absent prefix or suffix renders as nothing.
    pub fn version_name(&self, prefix: Option<&str>, suffix: Option<&str>) -> String {
        format!(
            "{}{}{}",
            prefix.unwrap_or_default(),
            self,
            suffix.unwrap_or_default()
        )
    }
}

impl fmt::Display for VersionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (major, minor, patch) = unpack(self.code);
        write!(f, "{}.{}.{}", major, minor, patch)
    }
}

impl FromStr for VersionCode {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<i32> for VersionCode {
    type Error = VersionError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<VersionCode> for i32 {
    fn from(version: VersionCode) -> Self {
        version.code
    }
}
