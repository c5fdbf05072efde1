//! Chat platform error types.

use derive_getters::Getters;

/// Failures reported by the chat platform's role/profile API.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum PlatformErrorKind {
    /// Listing the guild's roles failed.
    #[display("Failed to list roles: {_0}")]
    RoleListFailed(String),

    /// The member could not be fetched.
    #[display("Member {member} not found: {reason}")]
    MemberLookupFailed {
        /// Opaque member id
        member: u64,
        /// Platform-provided reason
        reason: String,
    },

    /// Adding or removing a role failed.
    #[display("Role mutation failed for member {member}: {reason}")]
    RoleMutationFailed {
        /// Opaque member id
        member: u64,
        /// Platform-provided reason
        reason: String,
    },

    /// Setting the nickname failed.
    #[display("Nickname update failed for member {member}: {reason}")]
    NicknameFailed {
        /// Opaque member id
        member: u64,
        /// Platform-provided reason
        reason: String,
    },

    /// Gateway connection or client construction failed.
    #[display("Gateway error: {_0}")]
    Gateway(String),

    /// Replying to an interaction failed.
    #[display("Interaction failed: {_0}")]
    Interaction(String),
}

/// Platform error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Platform Error: {} at line {} in {}", kind, line, file)]
pub struct PlatformError {
    kind: PlatformErrorKind,
    line: u32,
    file: &'static str,
}

impl PlatformError {
    /// Create a new PlatformError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use clubgate_error::{PlatformError, PlatformErrorKind};
    ///
    /// let err = PlatformError::new(PlatformErrorKind::Gateway("closed".into()));
    /// assert!(err.to_string().contains("closed"));
    /// ```
    #[track_caller]
    pub fn new(kind: PlatformErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
