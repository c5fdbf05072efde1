//! The verification entry point.

use crate::{
    ClubDataSource, MemberId, Resolution, Role, RoleCatalog, RolePlatform, RoleSet, Tag,
    UserFacingMessage, UserLocks, VerificationMetrics, VerificationOutcome, VerificationRequest,
    keys, map_role, reconcile, render_nickname, resolve,
};
use clubgate_error::{PlatformError, VerificationError, VerificationErrorKind};
use derive_getters::Getters;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Deployment-specific engine inputs.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct EngineSettings {
    /// Canonical tag of the gated club.
    club_tag: Tag,
    /// Club name used in replies.
    club_name: String,
}

impl EngineSettings {
    /// Create settings; the club tag is normalized.
    pub fn new(club_tag: &str, club_name: impl Into<String>) -> Self {
        Self {
            club_tag: Tag::normalize(club_tag),
            club_name: club_name.into(),
        }
    }
}

/// What one attempt did.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct VerificationReport {
    outcome: VerificationOutcome,
    /// Platform roles granted; empty unless verified.
    assigned: Vec<Role>,
    /// Nickname that was successfully applied.
    nickname: Option<String>,
}

impl VerificationReport {
    fn rejected(outcome: VerificationOutcome) -> Self {
        Self {
            outcome,
            assigned: Vec::new(),
            nickname: None,
        }
    }
}

/// Result of defaulting a new arrival.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// The unverified role was added.
    Assigned(Role),
    /// The platform has no unverified role.
    RoleMissing,
}

/// Verifies members and reconciles their roles.
///
/// Holds no per-user state besides the single-flight locks; the catalog is
/// shared read-only.
pub struct VerificationEngine<C, P> {
    club: C,
    platform: P,
    catalog: Arc<RoleCatalog>,
    settings: EngineSettings,
    locks: UserLocks,
    metrics: VerificationMetrics,
}

impl<C, P> VerificationEngine<C, P>
where
    C: ClubDataSource,
    P: RolePlatform,
{
    /// Create an engine with the standard catalog.
    pub fn new(club: C, platform: P, settings: EngineSettings) -> Self {
        Self {
            club,
            platform,
            catalog: Arc::new(RoleCatalog::standard()),
            settings,
            locks: UserLocks::new(),
            metrics: VerificationMetrics::new(),
        }
    }

    /// Replace the role catalog.
    pub fn with_catalog(mut self, catalog: Arc<RoleCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Share a metrics collector with other components.
    pub fn with_metrics(mut self, metrics: VerificationMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// The engine's settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Verification counters.
    pub fn metrics(&self) -> &VerificationMetrics {
        &self.metrics
    }

    /// Run one attempt and produce the reply for the requester.
    ///
    /// Never fails: every error is logged and turned into a reply.
    #[instrument(
        skip(self, request),
        fields(requester = %request.requester(), claimed = request.claimed_membership())
    )]
    pub async fn verify(&self, request: VerificationRequest) -> UserFacingMessage {
        self.metrics.record_attempt();
        match self.attempt(&request).await {
            Ok(report) => self.reply_for(&report),
            Err(e) => {
                self.record_failure(&e);
                error!(error = %e, "Verification aborted");
                UserFacingMessage::for_failure(e.category())
            }
        }
    }

    /// Run one attempt and report exactly what happened.
    ///
    /// Attempts for the same requester are serialized.
    ///
    /// # Errors
    ///
    /// - `Api` when a club lookup fails; nothing is mutated
    /// - `InconsistentRoster` when the roster contradicts the player record
    /// - `RoleNotConfigured` when no target role exists; nothing is mutated
    /// - `Platform` when reading or mutating the member fails; changes
    ///   already applied stay applied
    #[instrument(skip(self, request), fields(requester = %request.requester(), tag))]
    pub async fn attempt(
        &self,
        request: &VerificationRequest,
    ) -> Result<VerificationReport, VerificationError> {
        let _guard = self.locks.acquire(*request.requester()).await;

        let tag = Tag::normalize(request.raw_tag());
        tracing::Span::current().record("tag", tag.as_str());
        debug!("Fetching player record");

        let player = self.club.fetch_player(&tag).await.inspect_err(|e| {
            error!(error = %e, status = ?e.status(), "Player lookup failed");
        })?;

        let roles = match resolve(
            &player,
            &self.settings.club_tag,
            *request.claimed_membership(),
            &self.catalog,
        ) {
            Resolution::ProceedAsMember => {
                debug!(club_tag = %self.settings.club_tag, "Membership confirmed, fetching roster");
                let roster = self
                    .club
                    .fetch_club_roster(&self.settings.club_tag)
                    .await
                    .inspect_err(|e| {
                        error!(error = %e, status = ?e.status(), "Roster lookup failed");
                    })?;
                map_role(&roster, player.tag(), &self.catalog)?
            }
            Resolution::Decided(VerificationOutcome::Verified(roles)) => roles,
            Resolution::Decided(outcome) => {
                info!(?outcome, club_tag = ?player.club_tag(), "Membership claim rejected");
                return Ok(VerificationReport::rejected(outcome));
            }
        };

        let assigned = self.apply_roles(*request.requester(), &roles).await?;

        let nickname = render_nickname(roles.primary().marker(), player.display_name());
        let nickname = match self
            .platform
            .set_nickname(*request.requester(), &nickname)
            .await
        {
            Ok(()) => Some(nickname),
            Err(e) => {
                warn!(error = %e, nickname, "Failed to set nickname; roles kept");
                None
            }
        };

        info!(
            roles = ?roles.display_names(),
            player = %player.display_name(),
            "Verification successful"
        );

        Ok(VerificationReport {
            outcome: VerificationOutcome::Verified(roles),
            assigned,
            nickname,
        })
    }

    /// Reconcile a member's roles against a verified role set.
    async fn apply_roles(
        &self,
        member: MemberId,
        roles: &RoleSet,
    ) -> Result<Vec<Role>, VerificationError> {
        let guild_roles = self.platform.list_roles().await?;
        let current = self.platform.member_roles(member).await?;

        let delta = reconcile(&guild_roles, &current, roles.display_names(), &self.catalog)
            .inspect_err(|e| {
                warn!(member = %member, error = %e, "Target roles missing on platform");
            })?;

        debug!(
            to_add = ?delta.to_add(),
            to_remove = ?delta.to_remove(),
            "Reconciling roles"
        );

        if !delta.to_remove().is_empty() {
            self.platform
                .remove_roles(member, &delta.remove_ids())
                .await
                .inspect_err(|e| error!(member = %member, error = %e, "Role removal failed"))?;
        }
        if !delta.to_add().is_empty() {
            self.platform
                .add_roles(member, &delta.add_ids())
                .await
                .inspect_err(|e| error!(member = %member, error = %e, "Role grant failed"))?;
        }

        Ok(delta.assigned().clone())
    }

    /// Give a new arrival the unverified role.
    ///
    /// A platform without that role is only worth a warning.
    #[instrument(skip(self, member), fields(member = %member))]
    pub async fn assign_default_role(&self, member: MemberId) -> Result<JoinOutcome, PlatformError> {
        let Some(entry) = self.catalog.get(keys::UNVERIFIED) else {
            warn!("Catalog has no unverified role");
            return Ok(JoinOutcome::RoleMissing);
        };

        let guild_roles = self.platform.list_roles().await?;
        let Some(role) = guild_roles
            .into_iter()
            .find(|r| r.name() == entry.display_name())
        else {
            warn!(role_name = %entry.display_name(), "Unverified role not found on platform");
            return Ok(JoinOutcome::RoleMissing);
        };

        self.platform.add_roles(member, &[*role.id()]).await?;
        self.metrics.record_default_role_assigned();
        info!(role_name = %role.name(), "Assigned default role");
        Ok(JoinOutcome::Assigned(role))
    }

    fn reply_for(&self, report: &VerificationReport) -> UserFacingMessage {
        let club_name = self.settings.club_name.clone();
        match &report.outcome {
            VerificationOutcome::RejectedNotMember => {
                self.metrics.record_not_member();
                UserFacingMessage::NotAMember { club_name }
            }
            VerificationOutcome::RejectedFalseDenial => {
                self.metrics.record_false_denial();
                UserFacingMessage::FalseDenial { club_name }
            }
            VerificationOutcome::Verified(roles) => {
                if roles.primary().key() == keys::GUEST {
                    self.metrics.record_verified_guest();
                } else {
                    self.metrics.record_verified_member();
                }
                UserFacingMessage::Success {
                    roles: report.assigned.iter().map(|r| r.name().clone()).collect(),
                }
            }
        }
    }

    fn record_failure(&self, err: &VerificationError) {
        match &err.kind {
            VerificationErrorKind::Api(_) => self.metrics.record_api_failure(),
            VerificationErrorKind::InconsistentRoster { .. } => {
                self.metrics.record_inconsistent_roster()
            }
            VerificationErrorKind::RoleNotConfigured(_) => {
                self.metrics.record_role_not_configured()
            }
            VerificationErrorKind::Platform(_) => self.metrics.record_platform_failure(),
        }
    }
}
