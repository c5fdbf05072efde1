//! Counters for verification attempts.

use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared verification counters. Cloning shares the same counters.
#[derive(Debug, Clone, Default)]
pub struct VerificationMetrics {
    inner: Arc<MetricsInner>,
}

#[derive(Debug, Default)]
struct MetricsInner {
    attempts: AtomicU64,
    verified_members: AtomicU64,
    verified_guests: AtomicU64,
    rejected_not_member: AtomicU64,
    rejected_false_denial: AtomicU64,
    api_failures: AtomicU64,
    inconsistent_rosters: AtomicU64,
    roles_not_configured: AtomicU64,
    platform_failures: AtomicU64,
    default_roles_assigned: AtomicU64,
}

impl VerificationMetrics {
    /// Creates a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_attempt(&self) {
        self.inner.attempts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_verified_member(&self) {
        self.inner.verified_members.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_verified_guest(&self) {
        self.inner.verified_guests.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_not_member(&self) {
        self.inner.rejected_not_member.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_false_denial(&self) {
        self.inner
            .rejected_false_denial
            .fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_api_failure(&self) {
        self.inner.api_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_inconsistent_roster(&self) {
        self.inner
            .inconsistent_rosters
            .fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_role_not_configured(&self) {
        self.inner
            .roles_not_configured
            .fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_platform_failure(&self) {
        self.inner.platform_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_default_role_assigned(&self) {
        self.inner
            .default_roles_assigned
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of every counter.
    pub fn snapshot(&self) -> MetricsSnapshot {
        let i = &self.inner;
        MetricsSnapshot {
            attempts: i.attempts.load(Ordering::Relaxed),
            verified_members: i.verified_members.load(Ordering::Relaxed),
            verified_guests: i.verified_guests.load(Ordering::Relaxed),
            rejected_not_member: i.rejected_not_member.load(Ordering::Relaxed),
            rejected_false_denial: i.rejected_false_denial.load(Ordering::Relaxed),
            api_failures: i.api_failures.load(Ordering::Relaxed),
            inconsistent_rosters: i.inconsistent_rosters.load(Ordering::Relaxed),
            roles_not_configured: i.roles_not_configured.load(Ordering::Relaxed),
            platform_failures: i.platform_failures.load(Ordering::Relaxed),
            default_roles_assigned: i.default_roles_assigned.load(Ordering::Relaxed),
        }
    }
}

/// Serializable counter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MetricsSnapshot {
    /// Verification attempts started
    pub attempts: u64,
    /// Club members verified
    pub verified_members: u64,
    /// Guests verified
    pub verified_guests: u64,
    /// Over-claims rejected
    pub rejected_not_member: u64,
    /// Under-claims rejected
    pub rejected_false_denial: u64,
    /// Club API failures
    pub api_failures: u64,
    /// Player/roster disagreements
    pub inconsistent_rosters: u64,
    /// Attempts with no configured target role
    pub roles_not_configured: u64,
    /// Platform read or mutation failures
    pub platform_failures: u64,
    /// Unverified roles handed to new arrivals
    pub default_roles_assigned: u64,
}
