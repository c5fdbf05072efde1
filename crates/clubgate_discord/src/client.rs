//! Discord bot client setup and lifecycle management.

use crate::ClubgateHandler;
use clubgate_core::ClubDataSource;
use clubgate_error::{PlatformError, PlatformErrorKind};
use serenity::Client;
use tracing::{info, instrument};

/// The Serenity client running the verification bot.
///
/// # Example
/// ```no_run
/// # use clubgate_discord::{ClubgateBot, ClubgateHandler};
/// # async fn run<C: clubgate_core::ClubDataSource + 'static>(
/// #     token: String,
/// #     handler: ClubgateHandler<C>,
/// # ) -> Result<(), clubgate_error::PlatformError> {
/// let mut bot = ClubgateBot::new(token, handler).await?;
/// bot.start().await?;
/// # Ok(())
/// # }
/// ```
pub struct ClubgateBot {
    client: Client,
}

impl ClubgateBot {
    /// Build the client around `handler`.
    ///
    /// # Errors
    /// Returns a `Gateway` error if the token is malformed or the client
    /// fails to initialize.
    #[instrument(skip(token, handler), fields(token_len = token.len()))]
    pub async fn new<C>(token: String, handler: ClubgateHandler<C>) -> Result<Self, PlatformError>
    where
        C: ClubDataSource + 'static,
    {
        let intents = ClubgateHandler::<C>::intents();
        info!(?intents, "Building Serenity client");

        let client = Client::builder(&token, intents)
            .event_handler(handler)
            .await
            .map_err(|e| {
                PlatformError::new(PlatformErrorKind::Gateway(format!(
                    "Failed to build client: {e}"
                )))
            })?;

        Ok(Self { client })
    }

    /// Connect and process events until the connection closes.
    ///
    /// # Errors
    /// Returns a `Gateway` error if the client stops on a fatal error.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> Result<(), PlatformError> {
        info!("Starting Discord bot");

        self.client.start().await.map_err(|e| {
            PlatformError::new(PlatformErrorKind::Gateway(format!("Client error: {e}")))
        })
    }
}
