//! Connection settings for the club API.

use std::fmt;

/// Where and how to reach the club API.
#[derive(Clone, PartialEq, Eq)]
pub struct ClubClientConfig {
    /// Base URL, e.g. `https://api.brawlstars.com`
    pub base_url: String,
    /// Bearer token
    pub token: String,
}

impl ClubClientConfig {
    /// Create a configuration from a base URL or bare host.
    ///
    /// A value without a scheme is treated as a host and served over https.
    ///
    /// # Examples
    ///
    /// ```
    /// use clubgate_club::ClubClientConfig;
    ///
    /// let config = ClubClientConfig::new("api.brawlstars.com", "token");
    /// assert_eq!(config.base_url, "https://api.brawlstars.com");
    ///
    /// let config = ClubClientConfig::new("http://127.0.0.1:9000/", "token");
    /// assert_eq!(config.base_url, "http://127.0.0.1:9000");
    /// ```
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = match base_url.trim().split_once("://") {
            Some((scheme, rest)) => format!("{scheme}://{}", rest.trim_end_matches('/')),
            None => format!("https://{}", base_url.trim().trim_end_matches('/')),
        };
        Self {
            base_url,
            token: token.into(),
        }
    }
}

impl fmt::Debug for ClubClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClubClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
