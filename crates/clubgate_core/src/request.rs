//! Per-attempt values: the request and its outcome.

use crate::{MemberId, RoleEntry};
use derive_getters::Getters;
use std::collections::BTreeSet;

/// One submitted verification, built by the UI layer and consumed by a
/// single attempt.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct VerificationRequest {
    requester: MemberId,
    claimed_membership: bool,
    raw_tag: String,
}

impl VerificationRequest {
    /// Create a request.
    pub fn new(requester: MemberId, claimed_membership: bool, raw_tag: impl Into<String>) -> Self {
        Self {
            requester,
            claimed_membership,
            raw_tag: raw_tag.into(),
        }
    }
}

/// A role the engine wants a member to hold.
///
/// Usually a catalog entry; a club role the catalog does not know becomes a
/// mapped role whose key and name are both the raw string and whose marker
/// is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct MappedRole {
    key: String,
    marker: String,
    display_name: String,
}

impl MappedRole {
    /// Fallback for a role string the catalog does not know.
    pub fn verbatim(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            key: raw.clone(),
            marker: String::new(),
            display_name: raw,
        }
    }
}

impl From<&RoleEntry> for MappedRole {
    fn from(entry: &RoleEntry) -> Self {
        Self {
            key: entry.key().clone(),
            marker: entry.marker().clone(),
            display_name: entry.display_name().clone(),
        }
    }
}

/// The roles a verified member should hold, most specific first.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RoleSet {
    /// Supplies the nickname marker.
    primary: MappedRole,
    additional: Vec<MappedRole>,
}

impl RoleSet {
    /// A set holding one role.
    pub fn single(primary: MappedRole) -> Self {
        Self {
            primary,
            additional: Vec::new(),
        }
    }

    /// A primary role plus extras; extras equal to the primary are dropped.
    pub fn with_additional(primary: MappedRole, additional: Vec<MappedRole>) -> Self {
        let additional = additional
            .into_iter()
            .filter(|r| r.key != primary.key)
            .collect();
        Self {
            primary,
            additional,
        }
    }

    /// All roles, primary first.
    pub fn iter(&self) -> impl Iterator<Item = &MappedRole> {
        std::iter::once(&self.primary).chain(self.additional.iter())
    }

    /// Canonical keys of every role in the set.
    pub fn keys(&self) -> BTreeSet<&str> {
        self.iter().map(|r| r.key.as_str()).collect()
    }

    /// Platform role names, primary first.
    pub fn display_names(&self) -> Vec<&str> {
        self.iter().map(|r| r.display_name.as_str()).collect()
    }
}

/// Result of checking a claim against the club API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Claimed membership, but the player is not in the club.
    RejectedNotMember,
    /// Denied membership, but the player is in the club.
    RejectedFalseDenial,
    /// Access granted with these roles.
    Verified(RoleSet),
}
