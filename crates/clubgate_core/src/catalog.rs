//! The fixed set of roles this bot manages.

use clubgate_error::ConfigError;
use derive_getters::Getters;
use std::collections::HashSet;

/// Canonical role keys.
///
/// The tier keys match the role strings the club API reports for roster
/// members.
pub mod keys {
    /// Club president.
    pub const PRESIDENT: &str = "president";
    /// Club vice president.
    pub const VICE_PRESIDENT: &str = "vicePresident";
    /// Senior club member.
    pub const SENIOR: &str = "senior";
    /// Regular club member.
    pub const MEMBER: &str = "member";
    /// Verified player outside the club.
    pub const GUEST: &str = "guest";
    /// Marker role every verified club member holds alongside their tier.
    pub const CLUB_MEMBER: &str = "clubMember";
    /// Baseline role for new arrivals.
    pub const UNVERIFIED: &str = "unverified";
}

/// One managed role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct RoleEntry {
    /// Canonical key, e.g. `vicePresident`.
    key: String,
    /// Glyph prefixed to nicknames.
    marker: String,
    /// Exact role name on the platform.
    display_name: String,
}

impl RoleEntry {
    /// Create a catalog entry.
    pub fn new(
        key: impl Into<String>,
        marker: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            marker: marker.into(),
            display_name: display_name.into(),
        }
    }
}

/// Process-wide, read-only role catalog.
///
/// Keys and display names are both unique. The display names form the
/// recognized-role universe: the only platform roles the engine ever adds or
/// removes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCatalog {
    entries: Vec<RoleEntry>,
}

impl RoleCatalog {
    /// Build a catalog, rejecting duplicate keys or display names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if two entries share a key or a display name.
    pub fn new(entries: Vec<RoleEntry>) -> Result<Self, ConfigError> {
        let mut seen_keys = HashSet::new();
        let mut seen_names = HashSet::new();
        for entry in &entries {
            if !seen_keys.insert(entry.key.as_str()) {
                return Err(ConfigError::new(format!(
                    "Duplicate role key in catalog: {}",
                    entry.key
                )));
            }
            if !seen_names.insert(entry.display_name.as_str()) {
                return Err(ConfigError::new(format!(
                    "Duplicate role name in catalog: {}",
                    entry.display_name
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The club's standard role set.
    pub fn standard() -> Self {
        Self {
            entries: vec![
                RoleEntry::new(keys::PRESIDENT, "👑", "👑 President"),
                RoleEntry::new(keys::VICE_PRESIDENT, "🔥", "🔥 Vice President"),
                RoleEntry::new(keys::SENIOR, "🎓", "🎓 Senior"),
                RoleEntry::new(keys::MEMBER, "⭐", "⭐ Member"),
                RoleEntry::new(keys::GUEST, "🫂", "🫂 Guest"),
                RoleEntry::new(keys::CLUB_MEMBER, "🔰", "🔰 Club Member"),
                RoleEntry::new(keys::UNVERIFIED, "❓", "❓ Unverified"),
            ],
        }
    }

    /// Look up an entry by canonical key.
    pub fn get(&self, key: &str) -> Option<&RoleEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// All entries, in catalog order.
    pub fn entries(&self) -> &[RoleEntry] {
        &self.entries
    }

    /// Whether a platform role name belongs to the recognized universe.
    pub fn is_recognized(&self, display_name: &str) -> bool {
        self.entries.iter().any(|e| e.display_name == display_name)
    }

    /// Display names of every managed role.
    pub fn recognized_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.display_name.as_str())
    }
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
