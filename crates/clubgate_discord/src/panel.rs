//! The registration panel: slash command, membership dropdown and tag modal.
//!
//! The membership claim chosen in the dropdown is carried in the modal's
//! custom id, so a submitted modal is self-contained.

use serenity::all::{
    ActionRow, ActionRowComponent, Colour, CreateActionRow, CreateCommand, CreateEmbed,
    CreateInputText, CreateInteractionResponseMessage, CreateModal, CreateSelectMenu,
    CreateSelectMenuKind, CreateSelectMenuOption, InputTextStyle,
};

/// Name of the slash command that posts the panel.
pub const SETUP_COMMAND: &str = "setupregister";

/// Custom id of the membership select menu.
pub const MEMBERSHIP_SELECT_ID: &str = "clubgate:membership";

/// Custom id of the tag input inside the modal.
pub const TAG_INPUT_ID: &str = "clubgate:tag_input";

const TAG_MODAL_PREFIX: &str = "clubgate:tag:";
const CLAIM_YES: &str = "yes";
const CLAIM_NO: &str = "no";

/// The guild command registered on ready.
pub fn setup_command() -> CreateCommand {
    CreateCommand::new(SETUP_COMMAND)
        .description("Set up the registration panel for Brawl Stars club members.")
}

/// Panel message with the embed and the membership dropdown.
pub fn panel_message(club_name: &str) -> CreateInteractionResponseMessage {
    let embed = CreateEmbed::new()
        .title("🔐 Register to Access the Server")
        .description(format!(
            "Select whether you are a member of {club_name}, then enter your Brawl Stars player tag."
        ))
        .colour(Colour::BLUE);

    let options = vec![
        CreateSelectMenuOption::new("Yes", CLAIM_YES)
            .description(format!("I am a member of {club_name}")),
        CreateSelectMenuOption::new("No", CLAIM_NO).description("I am not a member"),
    ];

    let menu = CreateSelectMenu::new(MEMBERSHIP_SELECT_ID, CreateSelectMenuKind::String { options })
        .placeholder(format!("Are you a member of {club_name}?"))
        .min_values(1)
        .max_values(1);

    CreateInteractionResponseMessage::new()
        .embed(embed)
        .components(vec![CreateActionRow::SelectMenu(menu)])
}

/// Parse the selected dropdown value into a membership claim.
pub fn parse_claim(value: &str) -> Option<bool> {
    match value {
        CLAIM_YES => Some(true),
        CLAIM_NO => Some(false),
        _ => None,
    }
}

/// Custom id of the tag modal for a given claim.
pub fn tag_modal_id(claimed_membership: bool) -> String {
    let claim = if claimed_membership { CLAIM_YES } else { CLAIM_NO };
    format!("{TAG_MODAL_PREFIX}{claim}")
}

/// Recover the claim from a tag modal custom id.
///
/// Returns `None` for modals this panel did not create.
pub fn claim_from_modal_id(custom_id: &str) -> Option<bool> {
    custom_id.strip_prefix(TAG_MODAL_PREFIX).and_then(parse_claim)
}

/// The "Enter Your Brawl Stars Tag" modal.
pub fn tag_modal(claimed_membership: bool) -> CreateModal {
    let input = CreateInputText::new(InputTextStyle::Short, "Brawl Stars Player Tag", TAG_INPUT_ID)
        .placeholder("#8LJYQ9U2")
        .required(true);

    CreateModal::new(tag_modal_id(claimed_membership), "Enter Your Brawl Stars Tag")
        .components(vec![CreateActionRow::InputText(input)])
}

/// Pull the submitted tag out of a modal's components.
pub fn submitted_tag(rows: &[ActionRow]) -> Option<String> {
    rows.iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == TAG_INPUT_ID => {
                input.value.clone()
            }
            _ => None,
        })
}
