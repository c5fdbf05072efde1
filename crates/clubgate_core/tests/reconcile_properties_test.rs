//! Property tests for role reconciliation.

use clubgate_core::{Role, RoleCatalog, RoleId, reconcile};
use proptest::prelude::*;
use std::collections::HashSet;

fn guild() -> Vec<Role> {
    let catalog = RoleCatalog::standard();
    let mut roles: Vec<Role> = catalog
        .entries()
        .iter()
        .enumerate()
        .map(|(i, e)| Role::new(RoleId(i as u64 + 1), e.display_name().clone()))
        .collect();
    roles.extend((0..5).map(|i| Role::new(RoleId(100 + i), format!("Unrelated {i}"))));
    roles
}

fn apply(held: &[RoleId], add: &[RoleId], remove: &[RoleId]) -> Vec<RoleId> {
    let mut next: Vec<RoleId> = held.iter().copied().filter(|r| !remove.contains(r)).collect();
    for r in add {
        if !next.contains(r) {
            next.push(*r);
        }
    }
    next
}

fn arb_held() -> impl Strategy<Value = Vec<RoleId>> {
    let ids: Vec<u64> = (1..=7).chain(100..105).collect();
    proptest::sample::subsequence(ids, 0..=12)
        .prop_map(|ids| ids.into_iter().map(RoleId).collect())
}

fn arb_targets() -> impl Strategy<Value = Vec<String>> {
    let names: Vec<String> = RoleCatalog::standard()
        .recognized_names()
        .map(str::to_string)
        .collect();
    proptest::sample::subsequence(names, 1..=2)
}

proptest! {
    #[test]
    fn second_reconcile_is_empty(held in arb_held(), targets in arb_targets()) {
        let catalog = RoleCatalog::standard();
        let roles = guild();

        let first = reconcile(&roles, &held, targets.iter().map(String::as_str), &catalog).unwrap();
        let after = apply(&held, &first.add_ids(), &first.remove_ids());
        let second = reconcile(&roles, &after, targets.iter().map(String::as_str), &catalog).unwrap();

        prop_assert!(second.is_noop());
        prop_assert_eq!(first.assigned(), second.assigned());
    }

    #[test]
    fn unrelated_roles_are_never_touched(held in arb_held(), targets in arb_targets()) {
        let catalog = RoleCatalog::standard();
        let roles = guild();
        let unrelated: HashSet<RoleId> = (100..105).map(RoleId).collect();

        let delta = reconcile(&roles, &held, targets.iter().map(String::as_str), &catalog).unwrap();

        prop_assert!(delta.remove_ids().iter().all(|r| !unrelated.contains(r)));
        prop_assert!(delta.add_ids().iter().all(|r| !unrelated.contains(r)));
    }

    #[test]
    fn reconciled_member_holds_exactly_the_targets(held in arb_held(), targets in arb_targets()) {
        let catalog = RoleCatalog::standard();
        let roles = guild();

        let delta = reconcile(&roles, &held, targets.iter().map(String::as_str), &catalog).unwrap();
        let after = apply(&held, &delta.add_ids(), &delta.remove_ids());

        let recognized_after: HashSet<&str> = roles
            .iter()
            .filter(|r| after.contains(r.id()))
            .map(|r| r.name().as_str())
            .filter(|name| catalog.is_recognized(name))
            .collect();
        let expected: HashSet<&str> = targets.iter().map(String::as_str).collect();
        prop_assert_eq!(recognized_after, expected);
    }
}
