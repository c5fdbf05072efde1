//! Claim vs. roster truth.

use crate::{ExternalPlayer, MappedRole, RoleCatalog, RoleSet, Tag, VerificationOutcome, keys};

/// What the resolver decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Claim confirmed; roles come from the club roster.
    ProceedAsMember,
    /// Terminal decision; no roster lookup needed.
    Decided(VerificationOutcome),
}

/// Check a membership claim against the player record.
///
/// | claimed | in club | result |
/// |---|---|---|
/// | yes | yes | [`Resolution::ProceedAsMember`] |
/// | yes | no | `RejectedNotMember` |
/// | no | yes | `RejectedFalseDenial` |
/// | no | no | `Verified({guest})` |
///
/// A catalog without a guest entry still yields the guest outcome, using
/// the key verbatim.
pub fn resolve(
    player: &ExternalPlayer,
    club_tag: &Tag,
    claimed_membership: bool,
    catalog: &RoleCatalog,
) -> Resolution {
    match (claimed_membership, player.is_in_club(club_tag)) {
        (true, true) => Resolution::ProceedAsMember,
        (true, false) => Resolution::Decided(VerificationOutcome::RejectedNotMember),
        (false, true) => Resolution::Decided(VerificationOutcome::RejectedFalseDenial),
        (false, false) => {
            let guest = catalog
                .get(keys::GUEST)
                .map(MappedRole::from)
                .unwrap_or_else(|| MappedRole::verbatim(keys::GUEST));
            Resolution::Decided(VerificationOutcome::Verified(RoleSet::single(guest)))
        }
    }
}
