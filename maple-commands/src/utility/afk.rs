use maple_core::{Context, Error};
use maple_database::Database;
use maple_database::impls::afk::{clear_afk, get_afk, set_afk};
use maple_database::model::afk::AfkEntry;
use maple_utils::formatting::{escape_mentions, relative_timestamp};

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "afk",
    desc: "Set your AFK status.",
    category: "utility",
    usage: "/afk [reason]",
    placeholder: false,
};

pub const DEFAULT_AFK_REASON: &str = "AFK";
pub const WELCOME_BACK_MESSAGE: &str = "👋 Welcome back! Your AFK status has been removed.";

#[poise::command(slash_command, category = "Utility")]
pub async fn afk(
    ctx: Context<'_>,
    #[description = "Reason for being AFK"]
    #[max_length = 200]
    reason: Option<String>,
) -> Result<(), Error> {
    let reason = reason.as_deref().unwrap_or(DEFAULT_AFK_REASON);
    set_afk(&ctx.data().db, ctx.author().id.get(), reason).await?;

    ctx.say(format!("😴 You are now AFK: {}", escape_mentions(reason)))
        .await?;
    Ok(())
}

/// Replies owed for one authored message.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AfkOutcome {
    pub welcomed_back: bool,
    pub notices: Vec<String>,
}

/// Clear the author's AFK record and collect a notice for each mentioned user
/// who is AFK. `mentions` pairs a user id with its display name.
pub async fn process_message_afk(
    db: &Database,
    author_id: u64,
    mentions: &[(u64, String)],
) -> anyhow::Result<AfkOutcome> {
    let welcomed_back = clear_afk(db, author_id).await?.is_some();

    let mut notices = Vec::new();
    for (user_id, name) in mentions {
        if let Some(entry) = get_afk(db, *user_id).await? {
            notices.push(afk_notice(name, &entry));
        }
    }

    Ok(AfkOutcome {
        welcomed_back,
        notices,
    })
}

pub fn afk_notice(name: &str, entry: &AfkEntry) -> String {
    format!(
        "💤 {} is AFK: {} ({})",
        name,
        escape_mentions(&entry.reason),
        relative_timestamp(entry.since)
    )
}
