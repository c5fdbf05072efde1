//! In-memory club API and platform for engine tests.

#![allow(dead_code)]

use async_trait::async_trait;
use clubgate_core::{
    ClubDataSource, ClubMember, EngineSettings, ExternalClubRoster, ExternalPlayer, MemberId,
    Role, RoleId, RolePlatform, Tag, VerificationEngine,
};
use clubgate_error::{ClubApiError, ClubApiErrorKind, PlatformError, PlatformErrorKind};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const CLUB_TAG: &str = "#2QRJ0LJY";
pub const CLUB_NAME: &str = "Stellar Forge";

/// Club API stand-in.
#[derive(Default)]
pub struct MockClub {
    players: HashMap<String, ExternalPlayer>,
    roster: Vec<ClubMember>,
    roster_status: Option<u16>,
    pub player_fetches: AtomicUsize,
    pub roster_fetches: AtomicUsize,
}

impl MockClub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player(mut self, tag: &str, name: &str, club_tag: Option<&str>) -> Self {
        self.players.insert(
            tag.to_string(),
            ExternalPlayer::new(tag, name, club_tag.map(str::to_string)),
        );
        self
    }

    pub fn with_roster_member(mut self, tag: &str, role: &str) -> Self {
        self.roster.push(ClubMember::new(tag, Some(role.to_string())));
        self
    }

    pub fn with_roster_failure(mut self, status: u16) -> Self {
        self.roster_status = Some(status);
        self
    }
}

#[async_trait]
impl ClubDataSource for MockClub {
    async fn fetch_player(&self, tag: &Tag) -> Result<ExternalPlayer, ClubApiError> {
        self.player_fetches.fetch_add(1, Ordering::SeqCst);
        self.players.get(tag.as_str()).cloned().ok_or_else(|| {
            ClubApiError::new(ClubApiErrorKind::Status {
                status: 404,
                body: r#"{"reason":"notFound"}"#.to_string(),
            })
        })
    }

    async fn fetch_club_roster(&self, club_tag: &Tag) -> Result<ExternalClubRoster, ClubApiError> {
        self.roster_fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.roster_status {
            return Err(ClubApiError::new(ClubApiErrorKind::Status {
                status,
                body: "unavailable".to_string(),
            }));
        }
        Ok(ExternalClubRoster::new(club_tag.as_str(), self.roster.clone()))
    }
}

/// Platform mutation, as recorded by [`MockPlatform`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Add(MemberId, Vec<RoleId>),
    Remove(MemberId, Vec<RoleId>),
    Nickname(MemberId, String),
}

#[derive(Default)]
struct PlatformState {
    members: HashMap<MemberId, Vec<RoleId>>,
    nicknames: HashMap<MemberId, String>,
    calls: Vec<Call>,
}

/// Guild stand-in.
pub struct MockPlatform {
    roles: Vec<Role>,
    state: Mutex<PlatformState>,
    fail_nickname: bool,
    fail_add: bool,
}

impl MockPlatform {
    /// A guild with every standard role plus unrelated ones.
    pub fn standard() -> Self {
        Self::with_roles(vec![
            Role::new(RoleId(1), "👑 President"),
            Role::new(RoleId(2), "🔥 Vice President"),
            Role::new(RoleId(3), "🎓 Senior"),
            Role::new(RoleId(4), "⭐ Member"),
            Role::new(RoleId(5), "🫂 Guest"),
            Role::new(RoleId(6), "🔰 Club Member"),
            Role::new(RoleId(7), "❓ Unverified"),
            Role::new(RoleId(100), "Moderator"),
            Role::new(RoleId(101), "Server Booster"),
        ])
    }

    pub fn with_roles(roles: Vec<Role>) -> Self {
        Self {
            roles,
            state: Mutex::new(PlatformState::default()),
            fail_nickname: false,
            fail_add: false,
        }
    }

    pub fn failing_nickname(mut self) -> Self {
        self.fail_nickname = true;
        self
    }

    pub fn failing_add(mut self) -> Self {
        self.fail_add = true;
        self
    }

    pub fn with_member(self, member: MemberId, roles: &[u64]) -> Self {
        self.state
            .lock()
            .unwrap()
            .members
            .insert(member, roles.iter().copied().map(RoleId).collect());
        self
    }

    pub fn held(&self, member: MemberId) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .state
            .lock()
            .unwrap()
            .members
            .get(&member)
            .map(|r| r.iter().map(|id| id.0).collect())
            .unwrap_or_default();
        ids.sort_unstable();
        ids
    }

    pub fn nickname(&self, member: MemberId) -> Option<String> {
        self.state.lock().unwrap().nicknames.get(&member).cloned()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn mutations(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::Nickname(..)))
            .collect()
    }
}

#[async_trait]
impl RolePlatform for MockPlatform {
    async fn list_roles(&self) -> Result<Vec<Role>, PlatformError> {
        Ok(self.roles.clone())
    }

    async fn member_roles(&self, member: MemberId) -> Result<Vec<RoleId>, PlatformError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .members
            .get(&member)
            .cloned()
            .unwrap_or_default())
    }

    async fn add_roles(&self, member: MemberId, roles: &[RoleId]) -> Result<(), PlatformError> {
        if self.fail_add {
            return Err(PlatformError::new(PlatformErrorKind::RoleMutationFailed {
                member: member.0,
                reason: "Missing Permissions".to_string(),
            }));
        }
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Add(member, roles.to_vec()));
        let held = state.members.entry(member).or_default();
        for role in roles {
            if !held.contains(role) {
                held.push(*role);
            }
        }
        Ok(())
    }

    async fn remove_roles(&self, member: MemberId, roles: &[RoleId]) -> Result<(), PlatformError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Remove(member, roles.to_vec()));
        if let Some(held) = state.members.get_mut(&member) {
            held.retain(|r| !roles.contains(r));
        }
        Ok(())
    }

    async fn set_nickname(&self, member: MemberId, nickname: &str) -> Result<(), PlatformError> {
        if self.fail_nickname {
            return Err(PlatformError::new(PlatformErrorKind::NicknameFailed {
                member: member.0,
                reason: "Missing Permissions".to_string(),
            }));
        }
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Nickname(member, nickname.to_string()));
        state.nicknames.insert(member, nickname.to_string());
        Ok(())
    }
}

pub type TestEngine = VerificationEngine<Arc<MockClub>, Arc<MockPlatform>>;

pub fn engine(club: MockClub, platform: MockPlatform) -> (TestEngine, Arc<MockClub>, Arc<MockPlatform>) {
    let club = Arc::new(club);
    let platform = Arc::new(platform);
    let engine = VerificationEngine::new(
        Arc::clone(&club),
        Arc::clone(&platform),
        EngineSettings::new(CLUB_TAG, CLUB_NAME),
    );
    (engine, club, platform)
}
