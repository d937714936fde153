pub mod afk;
pub mod custom_commands;

use poise::serenity_prelude as serenity;

/// Messages from bots and webhooks never trigger listeners.
pub(crate) fn is_human_message(message: &serenity::Message) -> bool {
    !message.author.bot && message.webhook_id.is_none()
}
