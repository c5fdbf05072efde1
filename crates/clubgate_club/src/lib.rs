//! Club data API client.
//!
//! Implements [`clubgate_core::ClubDataSource`] over the game's public REST
//! API: `GET /v1/players/{tag}` and `GET /v1/clubs/{tag}`, bearer-token
//! authenticated, tags percent-encoded. Anything but `200 OK` becomes a
//! [`clubgate_error::ClubApiErrorKind::Status`] carrying the response body.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod json_models;

pub use client::ClubClient;
pub use config::ClubClientConfig;
pub use json_models::{ClubJson, ClubMemberJson, ClubRefJson, PlayerJson};
