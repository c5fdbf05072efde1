//! Wire models for the club API.
//!
//! Only the fields the engine reads are modelled; serde ignores the rest.

use clubgate_core::{ClubMember, ExternalClubRoster, ExternalPlayer};
use serde::{Deserialize, Serialize};

/// `GET /v1/players/{tag}` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerJson {
    /// Canonical player tag
    pub tag: String,
    /// In-game name
    pub name: String,
    /// The player's club; the API sends `{}` for clubless players.
    #[serde(default)]
    pub club: Option<ClubRefJson>,
}

/// Club reference inside a player record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClubRefJson {
    /// Club tag
    #[serde(default)]
    pub tag: Option<String>,
    /// Club name
    #[serde(default)]
    pub name: Option<String>,
}

/// `GET /v1/clubs/{tag}` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubJson {
    /// Club tag
    pub tag: String,
    /// Club name
    #[serde(default)]
    pub name: Option<String>,
    /// Roster in API order
    #[serde(default)]
    pub members: Vec<ClubMemberJson>,
}

/// One roster line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubMemberJson {
    /// Player tag
    pub tag: String,
    /// In-game name
    #[serde(default)]
    pub name: Option<String>,
    /// Club role, e.g. `vicePresident`
    #[serde(default)]
    pub role: Option<String>,
}

impl From<PlayerJson> for ExternalPlayer {
    fn from(json: PlayerJson) -> Self {
        let club_tag = json
            .club
            .and_then(|c| c.tag)
            .filter(|tag| !tag.is_empty());
        ExternalPlayer::new(json.tag, json.name, club_tag)
    }
}

impl From<ClubJson> for ExternalClubRoster {
    fn from(json: ClubJson) -> Self {
        let members = json
            .members
            .into_iter()
            .map(|m| ClubMember::new(m.tag, m.role.filter(|r| !r.is_empty())))
            .collect();
        ExternalClubRoster::new(json.tag, members)
    }
}
