//! Bit layout of the packed version code
//!
//! A version code is a non-negative `i32`, so 31 bits are usable:
//!
//! ```text
//!  30        23 22          13 12            0
//! ┌────────────┬──────────────┬───────────────┐
//! │ major (8)  │  minor (10)  │  patch (13)   │
//! └────────────┴──────────────┴───────────────┘
//! ```

use crate::version::error::{VersionError, VersionPart};

pub const MAJOR_SHIFT: u32 = 23;
pub const MINOR_SHIFT: u32 = 13;

pub const MAJOR_MASK: i32 = 0xFF;
pub const MINOR_MASK: i32 = 0x3FF;
pub const PATCH_MASK: i32 = 0x1FFF;

/// Largest major part (8 bits)
pub const MAJOR_MAX: u32 = 255;

/// Largest minor part (10 bits)
pub const MINOR_MAX: u32 = 1023;

/// Largest patch part (13 bits)
///
/// Earlier releases of this layout advertised 8191 but rejected anything above
/// [`LEGACY_PATCH_CHECK_MAX`]. The full 13-bit range is accepted here.
pub const PATCH_MAX: u32 = 8191;

/// Upper bound enforced by the legacy patch check, kept for reference only
pub const LEGACY_PATCH_CHECK_MAX: u32 = 8131;

/// Largest version code
pub const CODE_MAX: i32 = i32::MAX;

/// Pack already validated parts into a version code.
pub fn pack(major: u32, minor: u32, patch: u32) -> i32 {
    ((major << MAJOR_SHIFT) | (minor << MINOR_SHIFT) | patch) as i32
}

/// Split a version code into `(major, minor, patch)`.
pub fn unpack(code: i32) -> (u32, u32, u32) {
    let patch = code & PATCH_MASK;
    let minor = (code >> MINOR_SHIFT) & MINOR_MASK;
    let major = (code >> MAJOR_SHIFT) & MAJOR_MASK;
    (major as u32, minor as u32, patch as u32)
}

pub fn check_major(major: u32) -> Result<u32, VersionError> {
    check_part(VersionPart::Major, major, MAJOR_MAX)
}

pub fn check_minor(minor: u32) -> Result<u32, VersionError> {
    check_part(VersionPart::Minor, minor, MINOR_MAX)
}

pub fn check_patch(patch: u32) -> Result<u32, VersionError> {
    check_part(VersionPart::Patch, patch, PATCH_MAX)
}

/// Only the sign is checked; the upper bound is the width of `i32`.
pub fn check_code(code: i32) -> Result<i32, VersionError> {
    if code < 0 {
        return Err(VersionError::NegativeCode);
    }
    Ok(code)
}

fn check_part(part: VersionPart, value: u32, max: u32) -> Result<u32, VersionError> {
    if value > max {
        return Err(VersionError::OutOfRange { part, max });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 0, 0)]
    #[case(1, 0, 0, 8_388_608)]
    #[case(2, 12, 122, 16_777_216 + 98_304 + 122)]
    #[case(MAJOR_MAX, MINOR_MAX, PATCH_MAX, CODE_MAX)]
    fn pack_and_unpack_agree(
        #[case] major: u32,
        #[case] minor: u32,
        #[case] patch: u32,
        #[case] code: i32,
    ) {
        assert_eq!(pack(major, minor, patch), code);
        assert_eq!(unpack(code), (major, minor, patch));
    }

    #[test]
    fn unpack_then_pack_is_identity_on_sampled_codes() {
        for code in (0..=CODE_MAX).step_by(65_521) {
            let (major, minor, patch) = unpack(code);
            assert_eq!(pack(major, minor, patch), code);
        }
    }

    #[rstest]
    #[case(VersionPart::Major, MAJOR_MAX)]
    #[case(VersionPart::Minor, MINOR_MAX)]
    #[case(VersionPart::Patch, PATCH_MAX)]
    fn bounds_are_inclusive(#[case] part: VersionPart, #[case] max: u32) {
        let check: fn(u32) -> Result<u32, VersionError> = match part {
            VersionPart::Major => check_major,
            VersionPart::Minor => check_minor,
            VersionPart::Patch => check_patch,
        };

        assert_eq!(check(0), Ok(0));
        assert_eq!(check(max), Ok(max));
        assert_eq!(check(max + 1), Err(VersionError::OutOfRange { part, max }));
    }

    #[test]
    fn patch_accepts_values_above_legacy_check() {
        for patch in LEGACY_PATCH_CHECK_MAX + 1..=PATCH_MAX {
            assert!(check_patch(patch).is_ok(), "patch {patch} rejected");
        }
    }

    #[test]
    fn check_code_rejects_only_negative_values() {
        assert_eq!(check_code(0), Ok(0));
        assert_eq!(check_code(CODE_MAX), Ok(CODE_MAX));
        assert_eq!(check_code(-1), Err(VersionError::NegativeCode));
        assert_eq!(check_code(i32::MIN), Err(VersionError::NegativeCode));
    }
}
