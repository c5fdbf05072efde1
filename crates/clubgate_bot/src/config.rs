//! Bot configuration from command-line flags and environment variables.

use clap::Parser;
use clubgate_club::ClubClientConfig;
use clubgate_core::{EngineSettings, Tag};
use clubgate_error::ConfigError;
use reqwest::Url;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::TelemetryConfig;

/// Runtime settings. Every flag can also be set through its environment
/// variable; a `.env` file is read first when present.
#[derive(Parser, Clone)]
#[command(name = "clubgate")]
#[command(about = "Verifies Brawl Stars club membership and assigns Discord roles")]
#[command(version)]
#[command(args_override_self = true)]
pub struct Settings {
    /// Discord bot token
    #[arg(long, env = "DISCORD_BOT_TOKEN", hide_env_values = true)]
    pub discord_token: String,

    /// Brawl Stars API token
    #[arg(long, env = "SUPERCELL_API_TOKEN", hide_env_values = true)]
    pub api_token: String,

    /// Guild the bot serves
    #[arg(long, env = "GUILD_ID")]
    pub guild_id: u64,

    /// Tag of the gated club
    #[arg(long, env = "CLUB_HASH_TAG")]
    pub club_tag: String,

    /// Base URL or host of the Brawl Stars API
    #[arg(long, env = "BS_ROOT_URL")]
    pub api_root: String,

    /// Club name shown to users
    #[arg(long, env = "CLUB_NAME", default_value = "Stellar Forge")]
    pub club_name: String,

    /// Keepalive listen address
    #[arg(long, env = "KEEPALIVE_HOST", default_value = "0.0.0.0")]
    pub keepalive_host: IpAddr,

    /// Keepalive listen port
    #[arg(long, env = "KEEPALIVE_PORT", default_value_t = 8080)]
    pub keepalive_port: u16,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit JSON logs
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,
}

impl Settings {
    /// Load `.env`, parse flags and environment, then validate.
    ///
    /// # Errors
    /// Returns a `ConfigError` for missing or invalid values.
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is normal in deployment.
        let _ = dotenvy::dotenv();

        let settings =
            Self::try_parse().map_err(|e| ConfigError::new(format!("Invalid arguments: {e}")))?;
        settings.validate()
    }

    /// Check values clap cannot check on its own.
    ///
    /// # Errors
    /// Returns a `ConfigError` naming the offending variable.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.discord_token.trim().is_empty() {
            return Err(ConfigError::new("DISCORD_BOT_TOKEN must not be empty"));
        }
        if self.api_token.trim().is_empty() {
            return Err(ConfigError::new("SUPERCELL_API_TOKEN must not be empty"));
        }
        if self.guild_id == 0 {
            return Err(ConfigError::new("GUILD_ID must be a non-zero snowflake"));
        }
        if self.club_tag.trim().trim_start_matches('#').trim().is_empty() {
            return Err(ConfigError::new("CLUB_HASH_TAG must not be empty"));
        }

        let client = self.club_client();
        let url = Url::parse(&client.base_url).map_err(|e| {
            ConfigError::new(format!("BS_ROOT_URL '{}' is invalid: {e}", client.base_url))
        })?;
        if url.cannot_be_a_base() || url.host_str().is_none_or(str::is_empty) {
            return Err(ConfigError::new(format!(
                "BS_ROOT_URL '{}' cannot be used as a base URL",
                client.base_url
            )));
        }

        Ok(self)
    }

    /// Canonical club tag.
    pub fn club_tag(&self) -> Tag {
        Tag::normalize(&self.club_tag)
    }

    /// Engine inputs derived from these settings.
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings::new(&self.club_tag, self.club_name.clone())
    }

    /// Club API connection settings.
    pub fn club_client(&self) -> ClubClientConfig {
        ClubClientConfig::new(self.api_root.clone(), self.api_token.clone())
    }

    /// Keepalive listen address.
    pub fn keepalive_addr(&self) -> SocketAddr {
        SocketAddr::new(self.keepalive_host, self.keepalive_port)
    }

    /// Telemetry settings.
    pub fn telemetry(&self) -> TelemetryConfig {
        TelemetryConfig {
            log_level: self.log_level.clone(),
            json_logs: self.log_json,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("discord_token", &"<redacted>")
            .field("api_token", &"<redacted>")
            .field("guild_id", &self.guild_id)
            .field("club_tag", &self.club_tag)
            .field("api_root", &self.api_root)
            .field("club_name", &self.club_name)
            .field("keepalive_host", &self.keepalive_host)
            .field("keepalive_port", &self.keepalive_port)
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .finish()
    }
}
