//! Club roster role → platform role set.

use crate::{ExternalClubRoster, MappedRole, RoleCatalog, RoleSet, keys};
use clubgate_error::{VerificationError, VerificationErrorKind};
use tracing::error;

/// Derive the roles for a confirmed club member.
///
/// The result always holds the member's tier role (primary) and the generic
/// club-member role. A tier string the catalog does not know is used
/// verbatim as both key and display name.
///
/// # Errors
///
/// [`VerificationErrorKind::InconsistentRoster`] when the roster has no line
/// for `tag`, or the line carries no role. The player record already said
/// the player is in this club, so this is external data skew.
pub fn map_role(
    roster: &ExternalClubRoster,
    tag: &str,
    catalog: &RoleCatalog,
) -> Result<RoleSet, VerificationError> {
    let inconsistent = || {
        error!(
            tag,
            club_tag = %roster.club_tag(),
            roster_size = roster.members().len(),
            "Player record and club roster disagree"
        );
        VerificationError::new(VerificationErrorKind::InconsistentRoster {
            tag: tag.to_string(),
            club_tag: roster.club_tag().clone(),
        })
    };

    let entry = roster.find(tag).ok_or_else(inconsistent)?;
    let role_key = entry.role_key().as_deref().ok_or_else(inconsistent)?;

    let tier = catalog
        .get(role_key)
        .map(MappedRole::from)
        .unwrap_or_else(|| MappedRole::verbatim(role_key));
    let club_member = catalog
        .get(keys::CLUB_MEMBER)
        .map(MappedRole::from)
        .unwrap_or_else(|| MappedRole::verbatim(keys::CLUB_MEMBER));

    Ok(RoleSet::with_additional(tier, vec![club_member]))
}
