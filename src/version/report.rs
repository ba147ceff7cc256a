//! Machine-readable summary of a version

use serde::Serialize;

use crate::version::code::VersionCode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionReport {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub version_code: i32,
    pub version_name: String,
}

impl VersionReport {
    pub fn new(version: VersionCode, prefix: Option<&str>, suffix: Option<&str>) -> Self {
        Self {
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            version_code: version.code(),
            version_name: version.version_name(prefix, suffix),
        }
    }
}
