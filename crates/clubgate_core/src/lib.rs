//! Verification and role reconciliation engine.
//!
//! Given a self-declared membership claim and a player tag, the engine asks
//! the club data API for ground truth, decides the access tier, and
//! reconciles the member's roles and nickname on the chat platform.
//!
//! # Pipeline
//!
//! Every attempt runs strictly in order:
//! - [`Tag::normalize`] canonicalizes the submitted tag
//! - [`ClubDataSource::fetch_player`] loads the player record
//! - [`resolve`] checks the claim against the record
//! - [`ClubDataSource::fetch_club_roster`] + [`map_role`] derive club roles (members only)
//! - [`reconcile`] computes the role delta, applied through [`RolePlatform`]
//! - [`render_nickname`] sets the visible name
//!
//! Platform and club API access live behind the [`RolePlatform`] and
//! [`ClubDataSource`] traits so the engine carries no serenity or reqwest
//! dependency.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod club;
mod engine;
mod locks;
mod mapper;
mod membership;
mod message;
mod metrics;
mod nickname;
mod platform;
mod reconcile;
mod request;
mod tag;

pub use catalog::{RoleCatalog, RoleEntry, keys};
pub use club::{ClubDataSource, ClubMember, ExternalClubRoster, ExternalPlayer};
pub use engine::{EngineSettings, JoinOutcome, VerificationEngine, VerificationReport};
pub use locks::{UserLocks, UserLockGuard};
pub use mapper::map_role;
pub use membership::{Resolution, resolve};
pub use message::UserFacingMessage;
pub use metrics::{MetricsSnapshot, VerificationMetrics};
pub use nickname::render_nickname;
pub use platform::{MemberId, Role, RoleId, RolePlatform};
pub use reconcile::{RoleDelta, reconcile};
pub use request::{MappedRole, RoleSet, VerificationOutcome, VerificationRequest};
pub use tag::Tag;
