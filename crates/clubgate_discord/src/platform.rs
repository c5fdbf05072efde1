//! Role and nickname operations on one guild.

use async_trait::async_trait;
use clubgate_core::{MemberId, Role, RoleId, RolePlatform};
use clubgate_error::{PlatformError, PlatformErrorKind};
use serenity::all::{EditMember, GuildId, Http, RoleId as DiscordRoleId, UserId};
use std::sync::Arc;
use tracing::{debug, error, instrument};

const AUDIT_REASON: &str = "clubgate verification";

/// [`RolePlatform`] bound to a single guild.
///
/// Holds its own [`Http`] client, separate from the one inside the serenity
/// `Client`; the two keep separate rate-limit buckets.
#[derive(Clone)]
pub struct DiscordRoleGateway {
    http: Arc<Http>,
    guild_id: GuildId,
}

impl DiscordRoleGateway {
    /// Create a gateway for `guild_id`.
    pub fn new(http: Arc<Http>, guild_id: GuildId) -> Self {
        Self { http, guild_id }
    }
}

#[async_trait]
impl RolePlatform for DiscordRoleGateway {
    #[instrument(skip(self), fields(guild_id = %self.guild_id))]
    async fn list_roles(&self) -> Result<Vec<Role>, PlatformError> {
        let roles = self.http.get_guild_roles(self.guild_id).await.map_err(|e| {
            error!(error = %e, "Failed to fetch guild roles");
            PlatformError::new(PlatformErrorKind::RoleListFailed(e.to_string()))
        })?;
        debug!(role_count = roles.len(), "Fetched guild roles");

        Ok(roles
            .into_iter()
            .map(|r| Role::new(RoleId(r.id.get()), r.name))
            .collect())
    }

    #[instrument(skip(self, member), fields(guild_id = %self.guild_id, member = %member))]
    async fn member_roles(&self, member: MemberId) -> Result<Vec<RoleId>, PlatformError> {
        let fetched = self
            .http
            .get_member(self.guild_id, UserId::new(member.0))
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to fetch member");
                PlatformError::new(PlatformErrorKind::MemberLookupFailed {
                    member: member.0,
                    reason: e.to_string(),
                })
            })?;

        Ok(fetched.roles.iter().map(|r| RoleId(r.get())).collect())
    }

    #[instrument(skip(self, member), fields(guild_id = %self.guild_id, member = %member))]
    async fn add_roles(&self, member: MemberId, roles: &[RoleId]) -> Result<(), PlatformError> {
        for role in roles {
            self.http
                .add_member_role(
                    self.guild_id,
                    UserId::new(member.0),
                    DiscordRoleId::new(role.0),
                    Some(AUDIT_REASON),
                )
                .await
                .map_err(|e| {
                    error!(role = %role, error = %e, "Failed to add role");
                    PlatformError::new(PlatformErrorKind::RoleMutationFailed {
                        member: member.0,
                        reason: e.to_string(),
                    })
                })?;
        }
        debug!(count = roles.len(), "Added roles");
        Ok(())
    }

    #[instrument(skip(self, member), fields(guild_id = %self.guild_id, member = %member))]
    async fn remove_roles(
        &self,
        member: MemberId,
        roles: &[RoleId],
    ) -> Result<(), PlatformError> {
        for role in roles {
            self.http
                .remove_member_role(
                    self.guild_id,
                    UserId::new(member.0),
                    DiscordRoleId::new(role.0),
                    Some(AUDIT_REASON),
                )
                .await
                .map_err(|e| {
                    error!(role = %role, error = %e, "Failed to remove role");
                    PlatformError::new(PlatformErrorKind::RoleMutationFailed {
                        member: member.0,
                        reason: e.to_string(),
                    })
                })?;
        }
        debug!(count = roles.len(), "Removed roles");
        Ok(())
    }

    #[instrument(skip(self, member), fields(guild_id = %self.guild_id, member = %member))]
    async fn set_nickname(&self, member: MemberId, nickname: &str) -> Result<(), PlatformError> {
        self.guild_id
            .edit_member(&self.http, UserId::new(member.0), EditMember::new().nickname(nickname))
            .await
            .map_err(|e| {
                PlatformError::new(PlatformErrorKind::NicknameFailed {
                    member: member.0,
                    reason: e.to_string(),
                })
            })?;
        Ok(())
    }
}
