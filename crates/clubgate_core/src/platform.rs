//! The chat platform seam.

use async_trait::async_trait;
use clubgate_error::PlatformError;
use derive_getters::Getters;
use std::sync::Arc;

/// Stable platform role identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{}", _0)]
pub struct RoleId(pub u64);

/// Opaque platform user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{}", _0)]
pub struct MemberId(pub u64);

/// A role as the platform knows it.
///
/// Lookup happens by name; mutations are keyed by [`RoleId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct Role {
    id: RoleId,
    name: String,
}

impl Role {
    /// Create a role.
    pub fn new(id: RoleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Role and profile operations on the configured guild.
///
/// Implementations are bound to a single guild; the engine only ever
/// passes member ids.
#[async_trait]
pub trait RolePlatform: Send + Sync {
    /// All roles defined on the guild.
    async fn list_roles(&self) -> Result<Vec<Role>, PlatformError>;

    /// Ids of the roles a member currently holds.
    async fn member_roles(&self, member: MemberId) -> Result<Vec<RoleId>, PlatformError>;

    /// Grant roles to a member.
    async fn add_roles(&self, member: MemberId, roles: &[RoleId]) -> Result<(), PlatformError>;

    /// Revoke roles from a member.
    async fn remove_roles(&self, member: MemberId, roles: &[RoleId])
    -> Result<(), PlatformError>;

    /// Set a member's guild nickname.
    async fn set_nickname(&self, member: MemberId, nickname: &str) -> Result<(), PlatformError>;
}

#[async_trait]
impl<T: RolePlatform + ?Sized> RolePlatform for Arc<T> {
    async fn list_roles(&self) -> Result<Vec<Role>, PlatformError> {
        (**self).list_roles().await
    }

    async fn member_roles(&self, member: MemberId) -> Result<Vec<RoleId>, PlatformError> {
        (**self).member_roles(member).await
    }

    async fn add_roles(&self, member: MemberId, roles: &[RoleId]) -> Result<(), PlatformError> {
        (**self).add_roles(member, roles).await
    }

    async fn remove_roles(
        &self,
        member: MemberId,
        roles: &[RoleId],
    ) -> Result<(), PlatformError> {
        (**self).remove_roles(member, roles).await
    }

    async fn set_nickname(&self, member: MemberId, nickname: &str) -> Result<(), PlatformError> {
        (**self).set_nickname(member, nickname).await
    }
}
