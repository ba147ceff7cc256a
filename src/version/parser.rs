//! Strict parser for dotted version strings
//!
//! Accepted grammar, with no signs, whitespace or empty groups:
//! - `Arity::MajorMinorPatch`: `digits.digits.digits`
//! - `Arity::MajorMinor`: `digits.digits`
//!
//! The whole string is checked structurally before any numeric bound is
//! applied, so a well-formed string with an oversized group reports the
//! bounds error for that part.

use crate::version::error::VersionError;
use crate::version::packing::{check_major, check_minor, check_patch};

/// Number of dot-separated groups a version string must contain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// `major.minor`, patch supplied separately
    MajorMinor,
    /// `major.minor.patch`
    MajorMinorPatch,
}

impl Arity {
    fn groups(self) -> usize {
        match self {
            Arity::MajorMinor => 2,
            Arity::MajorMinorPatch => 3,
        }
    }
}

/// Validated parts of a version string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedVersion {
    pub major: u32,
    pub minor: u32,
    /// `None` when parsed with [`Arity::MajorMinor`]
    pub patch: Option<u32>,
}

#[derive(Debug, Clone, Copy)]
enum State {
    /// At the start of the string or right after a dot
    ExpectDigit,
    /// Inside a digit group that began at `start`
    InDigits { start: usize },
}

/// Parse `input` into version parts.
///
/// `None` stands for an absent string and fails with [`VersionError::NullInput`].
pub fn parse_version_string(
    input: Option<&str>,
    arity: Arity,
) -> Result<ParsedVersion, VersionError> {
    let input = input.ok_or(VersionError::NullInput)?;
    let malformed = || VersionError::Malformed(input.to_string());

    let expected = arity.groups();
    let mut groups = [0u32; 3];
    let mut count = 0;
    let mut state = State::ExpectDigit;

    for (i, byte) in input.bytes().enumerate() {
        state = match (state, byte) {
            (State::ExpectDigit, b'0'..=b'9') => State::InDigits { start: i },
            (State::InDigits { start }, b'0'..=b'9') => State::InDigits { start },
            (State::InDigits { start }, b'.') => {
                if count + 1 >= expected {
                    return Err(malformed());
                }
                groups[count] = group_value(&input[start..i]);
                count += 1;
                State::ExpectDigit
            }
            _ => return Err(malformed()),
        };
    }

    // Empty input and a trailing dot both end while expecting a digit
    let State::InDigits { start } = state else {
        return Err(malformed());
    };
    groups[count] = group_value(&input[start..]);
    count += 1;

    if count != expected {
        return Err(malformed());
    }

    let major = check_major(groups[0])?;
    let minor = check_minor(groups[1])?;
    let patch = match arity {
        Arity::MajorMinorPatch => Some(check_patch(groups[2])?),
        Arity::MajorMinor => None,
    };

    Ok(ParsedVersion {
        major,
        minor,
        patch,
    })
}

/// Groups too large for `u32` saturate and then fail the bound check.
fn group_value(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::error::VersionPart;
    use rstest::rstest;

    #[rstest]
    #[case("2.12.122", Arity::MajorMinorPatch, 2, 12, Some(122))]
    #[case("0.0.0", Arity::MajorMinorPatch, 0, 0, Some(0))]
    #[case("255.1023.8191", Arity::MajorMinorPatch, 255, 1023, Some(8191))]
    #[case("007.010.0001", Arity::MajorMinorPatch, 7, 10, Some(1))]
    #[case("2.12", Arity::MajorMinor, 2, 12, None)]
    fn parses_well_formed_strings(
        #[case] input: &str,
        #[case] arity: Arity,
        #[case] major: u32,
        #[case] minor: u32,
        #[case] patch: Option<u32>,
    ) {
        assert_eq!(
            parse_version_string(Some(input), arity),
            Ok(ParsedVersion {
                major,
                minor,
                patch
            })
        );
    }

    #[rstest]
    #[case("", Arity::MajorMinorPatch)]
    #[case("2", Arity::MajorMinorPatch)]
    #[case(".", Arity::MajorMinorPatch)]
    #[case("2.", Arity::MajorMinorPatch)]
    #[case("2.12", Arity::MajorMinorPatch)]
    #[case("2.12.", Arity::MajorMinorPatch)]
    #[case("2.12.122.", Arity::MajorMinorPatch)]
    #[case("2.12.122.34", Arity::MajorMinorPatch)]
    #[case(".2.12", Arity::MajorMinorPatch)]
    #[case("2..12", Arity::MajorMinorPatch)]
    #[case("v2.12.122", Arity::MajorMinorPatch)]
    #[case("2.12.122-beta", Arity::MajorMinorPatch)]
    #[case(" 2.12.122", Arity::MajorMinorPatch)]
    #[case("2.12.122 ", Arity::MajorMinorPatch)]
    #[case("+2.12.122", Arity::MajorMinorPatch)]
    #[case("2.-12.122", Arity::MajorMinorPatch)]
    #[case("２.12.122", Arity::MajorMinorPatch)] // fullwidth digit
    #[case("", Arity::MajorMinor)]
    #[case("2", Arity::MajorMinor)]
    #[case("2.", Arity::MajorMinor)]
    #[case("2.12.", Arity::MajorMinor)]
    #[case("2.12.122", Arity::MajorMinor)]
    fn rejects_malformed_strings_with_verbatim_message(
        #[case] input: &str,
        #[case] arity: Arity,
    ) {
        let err = parse_version_string(Some(input), arity).unwrap_err();
        assert_eq!(err, VersionError::Malformed(input.to_string()));
        assert_eq!(err.to_string(), format!("Invalid version string '{input}'"));
    }

    #[test]
    fn rejects_absent_input_with_null_error() {
        assert_eq!(
            parse_version_string(None, Arity::MajorMinorPatch),
            Err(VersionError::NullInput)
        );
        assert_eq!(
            parse_version_string(None, Arity::MajorMinor),
            Err(VersionError::NullInput)
        );
    }

    #[rstest]
    #[case("256.0.0", VersionPart::Major, 255)]
    #[case("999.12.122", VersionPart::Major, 255)]
    #[case("2.1024.0", VersionPart::Minor, 1023)]
    #[case("2.12.8192", VersionPart::Patch, 8191)]
    #[case("2.12.99999999999999999999", VersionPart::Patch, 8191)]
    fn well_formed_but_out_of_domain_reports_bounds_error(
        #[case] input: &str,
        #[case] part: VersionPart,
        #[case] max: u32,
    ) {
        assert_eq!(
            parse_version_string(Some(input), Arity::MajorMinorPatch),
            Err(VersionError::OutOfRange { part, max })
        );
    }

    #[test]
    fn structure_is_checked_before_bounds() {
        // Oversized major, but too few groups wins
        assert_eq!(
            parse_version_string(Some("999.1"), Arity::MajorMinorPatch),
            Err(VersionError::Malformed("999.1".to_string()))
        );
    }
}
