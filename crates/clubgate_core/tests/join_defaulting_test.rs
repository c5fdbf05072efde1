//! New arrivals get the unverified role.

mod common;

use clubgate_core::{JoinOutcome, MemberId, Role, RoleId};
use common::{Call, MockClub, MockPlatform, engine};

#[tokio::test]
async fn test_new_member_gets_unverified_role() {
    let (engine, _, platform) = engine(MockClub::new(), MockPlatform::standard());

    let outcome = engine.assign_default_role(MemberId(9)).await.unwrap();

    assert_eq!(outcome, JoinOutcome::Assigned(Role::new(RoleId(7), "❓ Unverified")));
    assert_eq!(platform.calls(), vec![Call::Add(MemberId(9), vec![RoleId(7)])]);
    assert_eq!(engine.metrics().snapshot().default_roles_assigned, 1);
}

#[tokio::test]
async fn test_missing_unverified_role_is_not_fatal() {
    let platform = MockPlatform::with_roles(vec![Role::new(RoleId(100), "Moderator")]);
    let (engine, _, platform) = engine(MockClub::new(), platform);

    let outcome = engine.assign_default_role(MemberId(9)).await.unwrap();

    assert_eq!(outcome, JoinOutcome::RoleMissing);
    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn test_platform_failure_is_reported() {
    let (engine, _, _) = engine(MockClub::new(), MockPlatform::standard().failing_add());

    let result = engine.assign_default_role(MemberId(9)).await;

    assert!(result.is_err());
    assert_eq!(engine.metrics().snapshot().default_roles_assigned, 0);
}
