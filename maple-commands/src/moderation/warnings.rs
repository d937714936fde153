use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::display_name;
use maple_core::{Context, Error};
use maple_database::impls::warnings::list_warnings;
use maple_database::model::warnings::WarningEntry;
use maple_utils::embed::{EMBED_DESCRIPTION_LIMIT, WARNING_EMBED_COLOR, join_within};
use maple_utils::formatting::escape_mentions;

pub const META: CommandMeta = CommandMeta {
    name: "warnings",
    desc: "Check a user's warnings.",
    category: "moderation",
    usage: "/warnings <user>",
    placeholder: false,
};

#[poise::command(
    slash_command,
    guild_only,
    category = "Moderation",
    default_member_permissions = "MODERATE_MEMBERS",
    required_permissions = "MODERATE_MEMBERS"
)]
pub async fn warnings(
    ctx: Context<'_>,
    #[description = "The user to check"] user: serenity::User,
) -> Result<(), Error> {
    let entries = list_warnings(&ctx.data().db, user.id.get()).await?;

    let embed = serenity::CreateEmbed::new()
        .title(format!("Warnings for {}", display_name(&user)))
        .color(WARNING_EMBED_COLOR)
        .description(warnings_description(&entries));
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

pub fn warnings_description(entries: &[WarningEntry]) -> String {
    if entries.is_empty() {
        return "No warnings".to_owned();
    }

    let lines: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            format!(
                "{}. {} - <@{}>",
                index + 1,
                escape_mentions(&entry.reason),
                entry.moderator_id
            )
        })
        .collect();

    join_within(&lines, "\n", EMBED_DESCRIPTION_LIMIT)
}
