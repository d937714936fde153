use poise::serenity_prelude as serenity;
use tracing::{debug, error};

use maple_commands::utility::afk::{WELCOME_BACK_MESSAGE, process_message_afk};
use maple_core::Data;

use super::is_human_message;

pub async fn handle_message_afk(ctx: &serenity::Context, data: &Data, message: &serenity::Message) {
    if !is_human_message(message) {
        return;
    }

    let mentions: Vec<(u64, String)> = message
        .mentions
        .iter()
        .map(|user| {
            let name = user.global_name.clone().unwrap_or_else(|| user.name.clone());
            (user.id.get(), name)
        })
        .collect();

    let outcome = match process_message_afk(&data.db, message.author.id.get(), &mentions).await {
        Ok(outcome) => outcome,
        Err(source) => {
            error!(?source, user_id = %message.author.id, "afk lookup failed");
            return;
        }
    };

    if outcome.welcomed_back {
        debug!(user_id = %message.author.id, "afk cleared");
        if let Err(source) = message.reply(&ctx.http, WELCOME_BACK_MESSAGE).await {
            error!(?source, "failed to send welcome back reply");
        }
    }

    for notice in outcome.notices {
        if let Err(source) = message.reply(&ctx.http, notice).await {
            error!(?source, "failed to send afk notice");
        }
    }
}
