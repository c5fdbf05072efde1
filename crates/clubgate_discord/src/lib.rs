//! Discord integration for clubgate.
//!
//! - **platform**: [`clubgate_core::RolePlatform`] over Discord's HTTP API
//! - **panel**: the registration slash command, membership dropdown and tag modal
//! - **handler**: gateway events (command sync, interactions, member joins)
//! - **client**: Serenity client setup and lifecycle
//!
//! # Usage
//!
//! ```rust,ignore
//! use clubgate_discord::{ClubgateBot, ClubgateHandler, DiscordRoleGateway};
//!
//! let gateway = DiscordRoleGateway::new(http, guild_id);
//! let engine = Arc::new(VerificationEngine::new(club_client, gateway, settings));
//! let mut bot = ClubgateBot::new(token, ClubgateHandler::new(engine, guild_id)).await?;
//! bot.start().await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod handler;
pub mod panel;
mod platform;

pub use client::ClubgateBot;
pub use handler::ClubgateHandler;
pub use platform::DiscordRoleGateway;
