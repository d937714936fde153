use poise::serenity_prelude as serenity;
use tracing::{debug, error};

use maple_commands::fallback::custom_command_invocation;
use maple_core::Data;
use maple_database::impls::custom_commands::get_custom_command;

use super::is_human_message;

/// Answer `!name` chat messages that match a stored custom command.
pub async fn handle_message_custom_command(
    ctx: &serenity::Context,
    data: &Data,
    message: &serenity::Message,
) {
    if !is_human_message(message) {
        return;
    }

    let Some(name) = custom_command_invocation(&message.content) else {
        return;
    };

    let response = match get_custom_command(&data.db, &name).await {
        Ok(Some(response)) => response,
        Ok(None) => return,
        Err(source) => {
            error!(?source, name = %name, "custom command lookup failed");
            return;
        }
    };

    debug!(name = %name, channel_id = %message.channel_id, "custom command triggered");
    if let Err(source) = message.channel_id.say(&ctx.http, response).await {
        error!(?source, name = %name, "failed to send custom command response");
    }
}
