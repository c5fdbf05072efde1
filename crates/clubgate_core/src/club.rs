//! The club data seam and the records it returns.

use crate::Tag;
use async_trait::async_trait;
use clubgate_error::ClubApiError;
use derive_getters::Getters;
use std::sync::Arc;

/// A player record from the club API. Fetched per attempt, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ExternalPlayer {
    tag: String,
    display_name: String,
    club_tag: Option<String>,
}

impl ExternalPlayer {
    /// Create a player record.
    pub fn new(
        tag: impl Into<String>,
        display_name: impl Into<String>,
        club_tag: Option<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            display_name: display_name.into(),
            club_tag,
        }
    }

    /// Whether the player's club is the given one.
    pub fn is_in_club(&self, club_tag: &Tag) -> bool {
        self.club_tag.as_deref() == Some(club_tag.as_str())
    }
}

/// One roster line.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ClubMember {
    tag: String,
    /// Club role string as reported by the API, e.g. `vicePresident`.
    /// `None` when the API omits it.
    role_key: Option<String>,
}

impl ClubMember {
    /// Create a roster line.
    pub fn new(tag: impl Into<String>, role_key: Option<String>) -> Self {
        Self {
            tag: tag.into(),
            role_key,
        }
    }
}

/// A club's roster, in API order.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ExternalClubRoster {
    club_tag: String,
    members: Vec<ClubMember>,
}

impl ExternalClubRoster {
    /// Create a roster.
    pub fn new(club_tag: impl Into<String>, members: Vec<ClubMember>) -> Self {
        Self {
            club_tag: club_tag.into(),
            members,
        }
    }

    /// The roster line for a player tag, if present.
    pub fn find(&self, tag: &str) -> Option<&ClubMember> {
        self.members.iter().find(|m| m.tag == tag)
    }
}

/// Read-only access to the external club authority.
///
/// Callers never retry; every failure is reported as-is.
#[async_trait]
pub trait ClubDataSource: Send + Sync {
    /// Look up a player by canonical tag.
    async fn fetch_player(&self, tag: &Tag) -> Result<ExternalPlayer, ClubApiError>;

    /// Look up a club's roster by canonical tag.
    async fn fetch_club_roster(&self, club_tag: &Tag) -> Result<ExternalClubRoster, ClubApiError>;
}

#[async_trait]
impl<T: ClubDataSource + ?Sized> ClubDataSource for Arc<T> {
    async fn fetch_player(&self, tag: &Tag) -> Result<ExternalPlayer, ClubApiError> {
        (**self).fetch_player(tag).await
    }

    async fn fetch_club_roster(&self, club_tag: &Tag) -> Result<ExternalClubRoster, ClubApiError> {
        (**self).fetch_club_roster(club_tag).await
    }
}
