use poise::serenity_prelude as serenity;
use tracing::info;

use crate::CommandMeta;
use crate::moderation::embeds::moderation_action_embed;
use maple_core::{Context, Error};
use maple_database::impls::warnings::record_warning;

pub const META: CommandMeta = CommandMeta {
    name: "warn",
    desc: "Warn a user.",
    category: "moderation",
    usage: "/warn <user> <reason>",
    placeholder: false,
};

#[poise::command(
    slash_command,
    guild_only,
    category = "Moderation",
    default_member_permissions = "MODERATE_MEMBERS",
    required_permissions = "MODERATE_MEMBERS"
)]
pub async fn warn(
    ctx: Context<'_>,
    #[description = "The user to warn"] user: serenity::User,
    #[description = "Reason for the warning"]
    #[max_length = 512]
    reason: String,
) -> Result<(), Error> {
    let record = record_warning(
        &ctx.data().db,
        user.id.get(),
        ctx.author().id.get(),
        &reason,
    )
    .await?;

    info!(
        user_id = %user.id,
        moderator_id = %ctx.author().id,
        warn_number = record.warn_number,
        "warning recorded"
    );
    ctx.send(poise::CreateReply::default().embed(moderation_action_embed(
        &user,
        "warned",
        &reason,
        Some(record.warn_number),
    )))
    .await?;

    Ok(())
}
