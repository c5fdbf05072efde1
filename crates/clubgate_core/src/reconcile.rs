//! Minimal role delta computation.

use crate::{Role, RoleCatalog, RoleId};
use clubgate_error::{VerificationError, VerificationErrorKind};
use derive_getters::Getters;
use std::collections::HashSet;

/// The changes that bring a member's roles in line with a target set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct RoleDelta {
    /// Platform roles matching the target names, in target order.
    assigned: Vec<Role>,
    /// Target roles the member does not hold yet.
    to_add: Vec<Role>,
    /// Recognized roles the member holds but should not.
    to_remove: Vec<Role>,
}

impl RoleDelta {
    /// Whether applying the delta changes nothing.
    pub fn is_noop(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    /// Ids to add.
    pub fn add_ids(&self) -> Vec<RoleId> {
        self.to_add.iter().map(|r| *r.id()).collect()
    }

    /// Ids to remove.
    pub fn remove_ids(&self) -> Vec<RoleId> {
        self.to_remove.iter().map(|r| *r.id()).collect()
    }
}

/// Compute the role changes for a member.
///
/// * `guild_roles` - every role defined on the platform
/// * `current` - ids the member holds now
/// * `target_names` - platform role names the member should hold
///
/// Target names resolve to the first platform role with that exact name;
/// names with no platform role are skipped. Only roles whose name is in the
/// catalog's recognized universe are ever removed, so unrelated server roles
/// survive. Running it again on an already reconciled member yields a no-op.
///
/// # Errors
///
/// [`VerificationErrorKind::RoleNotConfigured`] when none of the target
/// names exists on the platform. Nothing should be mutated in that case.
pub fn reconcile<'a>(
    guild_roles: &[Role],
    current: &[RoleId],
    target_names: impl IntoIterator<Item = &'a str>,
    catalog: &RoleCatalog,
) -> Result<RoleDelta, VerificationError> {
    let target_names: Vec<&str> = target_names.into_iter().collect();

    let mut assigned: Vec<Role> = Vec::new();
    for name in &target_names {
        if let Some(role) = guild_roles.iter().find(|r| r.name() == name)
            && !assigned.iter().any(|a| a.id() == role.id())
        {
            assigned.push(role.clone());
        }
    }

    if assigned.is_empty() {
        return Err(VerificationError::new(
            VerificationErrorKind::RoleNotConfigured(
                target_names.iter().map(|n| n.to_string()).collect(),
            ),
        ));
    }

    let held: HashSet<RoleId> = current.iter().copied().collect();
    let assigned_ids: HashSet<RoleId> = assigned.iter().map(|r| *r.id()).collect();

    let to_add = assigned
        .iter()
        .filter(|r| !held.contains(r.id()))
        .cloned()
        .collect();

    let to_remove = guild_roles
        .iter()
        .filter(|r| held.contains(r.id()))
        .filter(|r| catalog.is_recognized(r.name()))
        .filter(|r| !assigned_ids.contains(r.id()))
        .cloned()
        .collect();

    Ok(RoleDelta {
        assigned,
        to_add,
        to_remove,
    })
}
