use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use maple_core::{Context, Error};
use maple_utils::embed::{EMBED_TITLE_LIMIT, clamp_chars, described_embed};

pub const META: CommandMeta = CommandMeta {
    name: "poll",
    desc: "Create a poll.",
    category: "fun",
    usage: "/poll <question> <options>",
    placeholder: false,
};

pub const MIN_OPTIONS: usize = 2;
pub const NUMBER_EMOJIS: [&str; 10] = [
    "1️⃣", "2️⃣", "3️⃣", "4️⃣", "5️⃣", "6️⃣", "7️⃣", "8️⃣", "9️⃣", "🔟",
];

#[poise::command(slash_command, category = "Fun")]
pub async fn poll(
    ctx: Context<'_>,
    #[description = "Poll question"]
    #[max_length = 200]
    question: String,
    #[description = "Options separated by commas"]
    #[max_length = 1000]
    options: String,
) -> Result<(), Error> {
    let Some(options) = parse_poll_options(&options) else {
        ctx.say("❌ Poll must have 2-10 options.").await?;
        return Ok(());
    };

    let embed = described_embed(poll_title(&question), poll_description(&options));
    let reply = ctx.send(poise::CreateReply::default().embed(embed)).await?;
    let message = reply.message().await?;

    for reaction in poll_reactions(options.len()) {
        message.react(ctx.http(), reaction).await?;
    }

    Ok(())
}

/// Split comma-separated options, dropping blanks. `None` unless 2 to 10 remain.
pub fn parse_poll_options(raw: &str) -> Option<Vec<String>> {
    let options: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|option| !option.is_empty())
        .map(str::to_owned)
        .collect();

    (MIN_OPTIONS..=NUMBER_EMOJIS.len())
        .contains(&options.len())
        .then_some(options)
}

pub fn poll_title(question: &str) -> String {
    clamp_chars(&format!("📊 {}", question), EMBED_TITLE_LIMIT)
}

pub fn poll_description(options: &[String]) -> String {
    NUMBER_EMOJIS
        .iter()
        .zip(options)
        .map(|(emoji, option)| format!("{} {}", emoji, option))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One number reaction per option, in order.
pub fn poll_reactions(count: usize) -> Vec<serenity::ReactionType> {
    NUMBER_EMOJIS
        .iter()
        .take(count)
        .map(|emoji| serenity::ReactionType::Unicode((*emoji).to_owned()))
        .collect()
}
