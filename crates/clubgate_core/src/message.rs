//! Plain-text replies shown to the requester.

use clubgate_error::FailureCategory;
use std::fmt;

/// The fixed reply vocabulary.
///
/// Wording is cosmetic; the variant each outcome maps to is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserFacingMessage {
    /// The tag did not resolve or the club API failed.
    InvalidTagOrApiFailure,
    /// Claimed membership the roster does not back.
    NotAMember {
        /// Club display name
        club_name: String,
    },
    /// Denied membership the roster proves.
    FalseDenial {
        /// Club display name
        club_name: String,
    },
    /// Internal or external-data fault, not caused by the user.
    GenericFailure,
    /// Target roles are missing on the platform.
    RoleNotFound,
    /// Roles were granted.
    Success {
        /// Names of the roles the member now holds
        roles: Vec<String>,
    },
}

impl UserFacingMessage {
    /// Reply for an aborted attempt.
    pub fn for_failure(category: FailureCategory) -> Self {
        match category {
            FailureCategory::InvalidTagOrApi => Self::InvalidTagOrApiFailure,
            FailureCategory::Generic => Self::GenericFailure,
            FailureCategory::RoleNotFound => Self::RoleNotFound,
        }
    }

    /// Whether the reply reports success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl fmt::Display for UserFacingMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTagOrApiFailure => write!(f, "❌ Invalid player tag or API failure."),
            Self::NotAMember { club_name } => write!(f, "❌ You're not in {club_name}."),
            Self::FalseDenial { club_name } => {
                write!(f, "❌ You said no, but you're in {club_name}.")
            }
            Self::GenericFailure => write!(f, "❌ API error."),
            Self::RoleNotFound => write!(f, "❌ Role not found. Ask an admin to set up roles."),
            Self::Success { roles } => {
                let listed = roles
                    .iter()
                    .map(|r| format!("`{r}`"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "✅ Verification successful! You have been assigned the following role(s): {listed}. Welcome!"
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_lists_roles_in_backticks() {
        let msg = UserFacingMessage::Success {
            roles: vec!["🔥 Vice President".into(), "🔰 Club Member".into()],
        };
        assert_eq!(
            msg.to_string(),
            "✅ Verification successful! You have been assigned the following role(s): `🔥 Vice President`, `🔰 Club Member`. Welcome!"
        );
    }

    #[test]
    fn test_rejections_name_the_club() {
        let club_name = "Stellar Forge".to_string();
        assert_eq!(
            UserFacingMessage::NotAMember { club_name: club_name.clone() }.to_string(),
            "❌ You're not in Stellar Forge."
        );
        assert_eq!(
            UserFacingMessage::FalseDenial { club_name }.to_string(),
            "❌ You said no, but you're in Stellar Forge."
        );
    }

    #[test]
    fn test_failure_categories() {
        assert_eq!(
            UserFacingMessage::for_failure(FailureCategory::RoleNotFound),
            UserFacingMessage::RoleNotFound
        );
        assert_eq!(
            UserFacingMessage::for_failure(FailureCategory::Generic),
            UserFacingMessage::GenericFailure
        );
        assert_eq!(
            UserFacingMessage::for_failure(FailureCategory::InvalidTagOrApi),
            UserFacingMessage::InvalidTagOrApiFailure
        );
    }
}
