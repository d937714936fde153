use poise::serenity_prelude as serenity;
use tracing::{error, info};

use crate::CommandMeta;
use maple_core::{CommandError, Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "clear",
    desc: "Clear messages.",
    category: "moderation",
    usage: "/clear <amount>",
    placeholder: false,
};

/// Discord refuses to bulk delete messages older than this.
pub const BULK_DELETE_MAX_AGE_SECS: i64 = 14 * 24 * 60 * 60;

fn clear_failed() -> CommandError {
    CommandError::PlatformRejected {
        action: "clear messages",
        hint: Some("Messages may be too old (>14 days)."),
    }
}

#[poise::command(
    slash_command,
    guild_only,
    category = "Moderation",
    default_member_permissions = "MANAGE_MESSAGES",
    required_permissions = "MANAGE_MESSAGES"
)]
pub async fn clear(
    ctx: Context<'_>,
    #[description = "Number of messages to clear"]
    #[min = 1]
    #[max = 100]
    amount: u8,
) -> Result<(), Error> {
    let channel_id = ctx.channel_id();
    let messages = match channel_id
        .messages(ctx.http(), serenity::GetMessages::new().limit(amount))
        .await
    {
        Ok(messages) => messages,
        Err(source) => {
            error!(?source, channel_id = %channel_id, "failed to fetch messages to clear");
            return Err(clear_failed().into());
        }
    };

    let now = serenity::Timestamp::now().unix_timestamp();
    let ids = bulk_deletable(
        messages
            .iter()
            .map(|message| (message.id, message.timestamp.unix_timestamp())),
        now,
    );

    let delete_result = match ids.as_slice() {
        [] => Ok(()),
        [id] => channel_id.delete_message(ctx.http(), *id).await,
        _ => channel_id.delete_messages(ctx.http(), ids.iter().copied()).await,
    };

    if let Err(source) = delete_result {
        error!(?source, channel_id = %channel_id, "bulk delete request failed");
        return Err(clear_failed().into());
    }

    info!(
        channel_id = %channel_id,
        moderator_id = %ctx.author().id,
        cleared = ids.len(),
        "messages cleared"
    );
    ctx.say(format!("✅ Cleared {} messages.", ids.len())).await?;

    Ok(())
}

/// Keep the messages young enough to be bulk deleted.
pub fn bulk_deletable(
    messages: impl IntoIterator<Item = (serenity::MessageId, i64)>,
    now_unix_secs: i64,
) -> Vec<serenity::MessageId> {
    messages
        .into_iter()
        .filter(|(_, created)| now_unix_secs - created < BULK_DELETE_MAX_AGE_SECS)
        .map(|(id, _)| id)
        .collect()
}
