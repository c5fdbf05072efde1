//! reqwest-backed club API client.

use crate::{ClubClientConfig, ClubJson, PlayerJson};
use async_trait::async_trait;
use clubgate_core::{ClubDataSource, ExternalClubRoster, ExternalPlayer, Tag};
use clubgate_error::{ClubApiError, ClubApiErrorKind};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

/// Club API client. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ClubClient {
    config: ClubClientConfig,
    base_url: Url,
    client: reqwest::Client,
}

impl ClubClient {
    /// Create a client.
    ///
    /// # Errors
    ///
    /// [`ClubApiErrorKind::InvalidUrl`] if the base URL does not parse, has
    /// no host, or cannot carry a path.
    #[instrument(skip(config), fields(base_url = %config.base_url))]
    pub fn new(config: ClubClientConfig) -> Result<Self, ClubApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            ClubApiError::new(ClubApiErrorKind::InvalidUrl(format!(
                "{}: {}",
                config.base_url, e
            )))
        })?;
        if base_url.cannot_be_a_base() || base_url.host_str().is_none_or(str::is_empty) {
            return Err(ClubApiError::new(ClubApiErrorKind::InvalidUrl(
                config.base_url.clone(),
            )));
        }
        debug!("Creating club API client");
        Ok(Self {
            config,
            base_url,
            client: reqwest::Client::new(),
        })
    }

    /// `{base}/v1/{collection}/{tag}` with the tag percent-encoded as one
    /// path segment (`#` becomes `%23`).
    fn endpoint(&self, collection: &str, tag: &Tag) -> Result<Url, ClubApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ClubApiError::new(ClubApiErrorKind::InvalidUrl(self.config.base_url.clone()))
            })?
            .pop_if_empty()
            .extend(["v1", collection, tag.as_str()]);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClubApiError> {
        debug!(%url, "Sending club API request");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.config.token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Club API request failed");
                ClubApiError::new(ClubApiErrorKind::Network(e.to_string()))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read club API response");
            ClubApiError::new(ClubApiErrorKind::Network(e.to_string()))
        })?;

        if status != StatusCode::OK {
            error!(status = status.as_u16(), body = %body, "Club API returned error");
            return Err(ClubApiError::new(ClubApiErrorKind::Status {
                status: status.as_u16(),
                body,
            }));
        }

        serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, "Failed to decode club API response");
            ClubApiError::new(ClubApiErrorKind::Decode(e.to_string()))
        })
    }
}

#[async_trait]
impl ClubDataSource for ClubClient {
    #[instrument(skip(self, tag), fields(tag = %tag))]
    async fn fetch_player(&self, tag: &Tag) -> Result<ExternalPlayer, ClubApiError> {
        let url = self.endpoint("players", tag)?;
        let player: PlayerJson = self.get_json(url).await?;
        debug!(name = %player.name, "Fetched player");
        Ok(player.into())
    }

    #[instrument(skip(self, club_tag), fields(club_tag = %club_tag))]
    async fn fetch_club_roster(&self, club_tag: &Tag) -> Result<ExternalClubRoster, ClubApiError> {
        let url = self.endpoint("clubs", club_tag)?;
        let club: ClubJson = self.get_json(url).await?;
        debug!(members = club.members.len(), "Fetched club roster");
        Ok(club.into())
    }
}
