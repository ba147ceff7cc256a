//! Version code layer
//!
//! Converts between a `major.minor.patch` version and the packed 31-bit
//! integer Android uses as `versionCode`.
//!
//! # Architecture
//!
//! ```text
//! "2.12.122" ──▶ ┌──────────┐     ┌─────────────┐     ┌──────────┐
//!                │  Parser  │────▶│ VersionCode │────▶│ Packing  │──▶ 16777338
//!                └──────────┘     └─────────────┘◀────└──────────┘
//!                                        │
//!                                        ▼
//!                                 "v2.12.122-beta"
//! ```
//!
//! # Modules
//!
//! - [`code`]: The `VersionCode` value type
//! - [`packing`]: Bit layout, pack/unpack and bounds checks
//! - [`parser`]: Strict dotted version string parser
//! - [`error`]: Error types for version and config handling
//! - [`semver`]: Conversions to and from `semver::Version`
//! - [`report`]: Serializable summary used by the CLI

pub mod code;
pub mod error;
pub mod packing;
pub mod parser;
pub mod report;
pub mod semver;

pub use code::VersionCode;
pub use error::{ErrorKind, VersionError};
