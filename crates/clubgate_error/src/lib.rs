//! Error types for clubgate.
//!
//! Every area follows the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use clubgate_error::{ClubApiError, ClubApiErrorKind, ClubgateResult};
//!
//! fn fetch() -> ClubgateResult<String> {
//!     Err(ClubApiError::new(ClubApiErrorKind::Status {
//!         status: 404,
//!         body: "notFound".to_string(),
//!     }))?
//! }
//!
//! assert!(fetch().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod club_api;
mod config;
mod error;
mod platform;
mod server;
mod verification;

pub use club_api::{ClubApiError, ClubApiErrorKind};
pub use config::ConfigError;
pub use error::{ClubgateError, ClubgateErrorKind, ClubgateResult};
pub use platform::{PlatformError, PlatformErrorKind};
pub use server::{ServerError, ServerErrorKind};
pub use verification::{FailureCategory, VerificationError, VerificationErrorKind};
