//! clubgate - Discord club verification bot.

use clubgate_bot::{Settings, init_telemetry, keepalive};
use clubgate_club::ClubClient;
use clubgate_core::{VerificationEngine, VerificationMetrics};
use clubgate_discord::{ClubgateBot, ClubgateHandler, DiscordRoleGateway};
use clubgate_error::ClubgateResult;
use serenity::all::{GuildId, Http};
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ClubgateResult<()> {
    let settings = Settings::load()?;
    init_telemetry(&settings.telemetry())?;

    info!(
        guild_id = settings.guild_id,
        club_tag = %settings.club_tag(),
        club_name = %settings.club_name,
        "Starting clubgate"
    );

    let metrics = VerificationMetrics::new();

    let (listener, addr) = keepalive::bind(settings.keepalive_addr()).await?;
    let state = keepalive::KeepaliveState::new(metrics.clone());
    tokio::spawn(async move {
        if let Err(e) = keepalive::serve(listener, state).await {
            error!(%addr, error = %e, "Keepalive server stopped");
        }
    });

    let club = ClubClient::new(settings.club_client())?;
    let guild_id = GuildId::new(settings.guild_id);
    let http = Arc::new(Http::new(&settings.discord_token));
    let platform = DiscordRoleGateway::new(http, guild_id);

    let engine = VerificationEngine::new(club, platform, settings.engine_settings())
        .with_metrics(metrics);
    let handler = ClubgateHandler::new(Arc::new(engine), guild_id);

    let mut bot = ClubgateBot::new(settings.discord_token.clone(), handler).await?;
    bot.start().await?;

    Ok(())
}
