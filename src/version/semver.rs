//! Conversions between [`VersionCode`] and `semver::Version`
//!
//! Pre-release and build metadata have no place in the packed layout and are
//! dropped when converting from `semver::Version`.

use semver::Version;

use crate::version::code::VersionCode;
use crate::version::error::VersionError;

impl From<VersionCode> for Version {
    fn from(version: VersionCode) -> Self {
        Version::new(
            u64::from(version.major()),
            u64::from(version.minor()),
            u64::from(version.patch()),
        )
    }
}

impl TryFrom<&Version> for VersionCode {
    type Error = VersionError;

    fn try_from(version: &Version) -> Result<Self, Self::Error> {
        VersionCode::new(
            saturating_u32(version.major),
            saturating_u32(version.minor),
            saturating_u32(version.patch),
        )
    }
}

fn saturating_u32(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::error::VersionPart;
    use rstest::rstest;

    #[test]
    fn converts_to_semver() {
        let version = VersionCode::new(2, 12, 122).unwrap();
        assert_eq!(Version::from(version), Version::new(2, 12, 122));
    }

    #[rstest]
    #[case("2.12.122", 2, 12, 122)]
    #[case("1.0.0-beta.1", 1, 0, 0)]
    #[case("3.4.5+build.7", 3, 4, 5)]
    fn converts_from_semver_ignoring_prerelease_and_build(
        #[case] input: &str,
        #[case] major: u32,
        #[case] minor: u32,
        #[case] patch: u32,
    ) {
        let semver = Version::parse(input).unwrap();
        assert_eq!(
            VersionCode::try_from(&semver),
            VersionCode::new(major, minor, patch)
        );
    }

    #[rstest]
    #[case("256.0.0", VersionPart::Major, 255)]
    #[case("1.1024.0", VersionPart::Minor, 1023)]
    #[case("1.0.8192", VersionPart::Patch, 8191)]
    #[case("1.0.99999999999", VersionPart::Patch, 8191)]
    fn rejects_semver_outside_packed_range(
        #[case] input: &str,
        #[case] part: VersionPart,
        #[case] max: u32,
    ) {
        let semver = Version::parse(input).unwrap();
        assert_eq!(
            VersionCode::try_from(&semver),
            Err(VersionError::OutOfRange { part, max })
        );
    }
}
