use poise::serenity_prelude as serenity;

use maple_utils::embed::{
    DEFAULT_EMBED_COLOR, EMBED_DESCRIPTION_LIMIT, EMBED_TITLE_LIMIT, clamp_chars,
};
use maple_utils::formatting::escape_mentions;

pub const DEFAULT_REASON: &str = "No reason provided";

pub fn display_name(user: &serenity::User) -> String {
    user.global_name.clone().unwrap_or_else(|| user.name.clone())
}

pub fn moderation_action_embed(
    user: &serenity::User,
    action_past_tense: &str,
    reason: &str,
    warn_number: Option<usize>,
) -> serenity::CreateEmbed {
    let mut description = format!(
        "**Target :** <@{}>\n**Reason :** {}",
        user.id.get(),
        escape_mentions(reason)
    );
    if let Some(warn_number) = warn_number {
        description.push_str(&format!("\n**Warning :** #{}", warn_number));
    }

    serenity::CreateEmbed::new()
        .color(DEFAULT_EMBED_COLOR)
        .author(
            serenity::CreateEmbedAuthor::new(clamp_chars(
                &format!("{} has been {}", display_name(user), action_past_tense),
                EMBED_TITLE_LIMIT,
            ))
            .icon_url(user.face()),
        )
        .description(clamp_chars(&description, EMBED_DESCRIPTION_LIMIT))
}
