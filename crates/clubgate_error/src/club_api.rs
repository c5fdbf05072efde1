//! Errors raised while talking to the external club data API.

/// Club API failure conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ClubApiErrorKind {
    /// The API answered with a non-success status.
    #[display("API returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The request never produced a response (DNS, TLS, connect, timeout).
    #[display("Network failure: {_0}")]
    Network(String),

    /// A success response carried a body we could not decode.
    #[display("Failed to decode response: {_0}")]
    Decode(String),

    /// A request URL could not be built from the configured base URL.
    #[display("Invalid request URL: {_0}")]
    InvalidUrl(String),
}

/// Club API error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Club API Error: {} at line {} in {}", kind, line, file)]
pub struct ClubApiError {
    /// The error kind
    pub kind: ClubApiErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ClubApiError {
    /// Create a new ClubApiError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use clubgate_error::{ClubApiError, ClubApiErrorKind};
    ///
    /// let err = ClubApiError::new(ClubApiErrorKind::Network("connection refused".into()));
    /// assert!(err.to_string().contains("connection refused"));
    /// ```
    #[track_caller]
    pub fn new(kind: ClubApiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Status code of the failed response, if the API answered at all.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ClubApiErrorKind::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
