//! Verification failures.
//!
//! Rejections of a user's claim are *not* errors; they are valid outcomes.
//! The kinds below cover everything that stops an attempt from reaching an
//! outcome at all.

use crate::{ClubApiError, PlatformError};

/// The user-facing category a failure is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureCategory {
    /// Invalid tag or the club API failed.
    InvalidTagOrApi,
    /// Something went wrong on our side or in external data; not the user's fault.
    Generic,
    /// The roles we need are not configured on the platform.
    RoleNotFound,
}

/// Reasons a verification attempt aborted.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum VerificationErrorKind {
    /// The club API failed or rejected the lookup.
    #[display("{_0}")]
    Api(crate::ClubApiErrorKind),

    /// The player record claims club membership but the roster disagrees.
    #[display("Player {tag} claims club {club_tag} but is missing from its roster")]
    InconsistentRoster {
        /// Verified player tag
        tag: String,
        /// Club tag that was queried
        club_tag: String,
    },

    /// None of the target roles exist on the platform.
    #[display("No platform role configured for any of {_0:?}")]
    RoleNotConfigured(Vec<String>),

    /// The platform failed while reading or mutating member state.
    #[display("{_0}")]
    Platform(crate::PlatformErrorKind),
}

impl VerificationErrorKind {
    /// Category this failure is surfaced to the user as.
    pub fn category(&self) -> FailureCategory {
        match self {
            Self::Api(_) => FailureCategory::InvalidTagOrApi,
            Self::InconsistentRoster { .. } | Self::Platform(_) => FailureCategory::Generic,
            Self::RoleNotConfigured(_) => FailureCategory::RoleNotFound,
        }
    }
}

/// Verification error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Verification Error: {} at line {} in {}", kind, line, file)]
pub struct VerificationError {
    /// The error kind
    pub kind: VerificationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl VerificationError {
    /// Create a new VerificationError at the current location.
    #[track_caller]
    pub fn new(kind: VerificationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Category this failure is surfaced to the user as.
    pub fn category(&self) -> FailureCategory {
        self.kind.category()
    }
}

impl From<ClubApiError> for VerificationError {
    #[track_caller]
    fn from(err: ClubApiError) -> Self {
        Self::new(VerificationErrorKind::Api(err.kind))
    }
}

impl From<PlatformError> for VerificationError {
    #[track_caller]
    fn from(err: PlatformError) -> Self {
        Self::new(VerificationErrorKind::Platform(err.kind().clone()))
    }
}
