//! Top-level error wrapper types.

use crate::{ClubApiError, ConfigError, PlatformError, ServerError, VerificationError};

/// Every error clubgate can produce.
///
/// # Examples
///
/// ```
/// use clubgate_error::{ClubgateError, ConfigError};
///
/// let err: ClubgateError = ConfigError::new("GUILD_ID missing").into();
/// assert!(format!("{}", err).contains("GUILD_ID"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ClubgateErrorKind {
    /// Club API error
    #[from(ClubApiError)]
    ClubApi(ClubApiError),
    /// Chat platform error
    #[from(PlatformError)]
    Platform(PlatformError),
    /// Verification error
    #[from(VerificationError)]
    Verification(VerificationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Keepalive server error
    #[from(ServerError)]
    Server(ServerError),
}

/// Clubgate error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Clubgate Error: {}", _0)]
pub struct ClubgateError(Box<ClubgateErrorKind>);

impl ClubgateError {
    /// Create a new error from a kind.
    pub fn new(kind: ClubgateErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ClubgateErrorKind {
        &self.0
    }
}

impl<T> From<T> for ClubgateError
where
    T: Into<ClubgateErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for clubgate operations.
pub type ClubgateResult<T> = std::result::Result<T, ClubgateError>;
