//! Serenity event handler for the verification bot.

use crate::{DiscordRoleGateway, panel};
use clubgate_core::{ClubDataSource, MemberId, VerificationEngine, VerificationRequest};
use serenity::all::{
    CommandInteraction, ComponentInteraction, ComponentInteractionDataKind, Context,
    CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage, EventHandler, GatewayIntents, GuildId, Interaction, Member,
    ModalInteraction, Ready,
};
use serenity::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Event handler wiring Discord events into the verification engine.
pub struct ClubgateHandler<C> {
    engine: Arc<VerificationEngine<C, DiscordRoleGateway>>,
    guild_id: GuildId,
}

impl<C> ClubgateHandler<C>
where
    C: ClubDataSource + 'static,
{
    /// Create a handler serving `guild_id`.
    pub fn new(engine: Arc<VerificationEngine<C, DiscordRoleGateway>>, guild_id: GuildId) -> Self {
        Self { engine, guild_id }
    }

    /// Gateway intents the bot needs.
    ///
    /// `GUILD_MEMBERS` is privileged and must be enabled in the developer portal.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS
    }

    async fn handle_command(&self, ctx: &Context, command: &CommandInteraction) {
        if command.data.name != panel::SETUP_COMMAND {
            debug!(command = %command.data.name, "Ignoring unknown command");
            return;
        }

        let message = panel::panel_message(self.engine.settings().club_name());
        if let Err(e) = command
            .create_response(&ctx.http, CreateInteractionResponse::Message(message))
            .await
        {
            error!(error = %e, "Failed to post registration panel");
        }
    }

    async fn handle_component(&self, ctx: &Context, component: &ComponentInteraction) {
        if component.data.custom_id != panel::MEMBERSHIP_SELECT_ID {
            return;
        }

        let ComponentInteractionDataKind::StringSelect { values } = &component.data.kind else {
            warn!("Membership component was not a string select");
            return;
        };
        let Some(claim) = values.first().and_then(|v| panel::parse_claim(v)) else {
            warn!(?values, "Unrecognized membership selection");
            return;
        };

        debug!(user_id = %component.user.id, claim, "Opening tag modal");
        if let Err(e) = component
            .create_response(
                &ctx.http,
                CreateInteractionResponse::Modal(panel::tag_modal(claim)),
            )
            .await
        {
            error!(error = %e, "Failed to open tag modal");
        }
    }

    #[instrument(skip(self, ctx, modal), fields(user_id = %modal.user.id))]
    async fn handle_modal(&self, ctx: &Context, modal: &ModalInteraction) {
        let Some(claim) = panel::claim_from_modal_id(&modal.data.custom_id) else {
            return;
        };
        let raw_tag = panel::submitted_tag(&modal.data.components).unwrap_or_default();

        let defer = CreateInteractionResponse::Defer(
            CreateInteractionResponseMessage::new().ephemeral(true),
        );
        if let Err(e) = modal.create_response(&ctx.http, defer).await {
            error!(error = %e, "Failed to defer modal submission");
            return;
        }

        let request = VerificationRequest::new(MemberId(modal.user.id.get()), claim, raw_tag);
        let reply = self.engine.verify(request).await;

        let followup = CreateInteractionResponseFollowup::new()
            .content(reply.to_string())
            .ephemeral(true);
        if let Err(e) = modal.create_followup(&ctx.http, followup).await {
            error!(error = %e, "Failed to send verification reply");
        }
    }
}

#[async_trait]
impl<C> EventHandler for ClubgateHandler<C>
where
    C: ClubDataSource + 'static,
{
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            bot_user = %ready.user.name,
            bot_id = %ready.user.id,
            guilds = ready.guilds.len(),
            "Bot connected to Discord"
        );

        match self
            .guild_id
            .set_commands(&ctx.http, vec![panel::setup_command()])
            .await
        {
            Ok(commands) => info!(
                guild_id = %self.guild_id,
                count = commands.len(),
                "Synced guild commands"
            ),
            Err(e) => error!(guild_id = %self.guild_id, error = %e, "Failed to sync commands"),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) => self.handle_command(&ctx, &command).await,
            Interaction::Component(component) => self.handle_component(&ctx, &component).await,
            Interaction::Modal(modal) => self.handle_modal(&ctx, &modal).await,
            _ => {}
        }
    }

    async fn guild_member_addition(&self, _ctx: Context, new_member: Member) {
        if new_member.guild_id != self.guild_id {
            return;
        }

        info!(
            guild_id = %new_member.guild_id,
            user_id = %new_member.user.id,
            username = %new_member.user.name,
            "Member joined guild"
        );

        if let Err(e) = self
            .engine
            .assign_default_role(MemberId(new_member.user.id.get()))
            .await
        {
            error!(user_id = %new_member.user.id, error = %e, "Failed to assign default role");
        }
    }
}
