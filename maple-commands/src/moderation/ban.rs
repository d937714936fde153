use poise::serenity_prelude as serenity;
use tracing::{error, info};

use crate::CommandMeta;
use crate::moderation::embeds::{DEFAULT_REASON, moderation_action_embed};
use crate::moderation::target::{BAN, actionable_member};
use maple_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "ban",
    desc: "Ban a user from the server.",
    category: "moderation",
    usage: "/ban <user> [reason]",
    placeholder: false,
};

#[poise::command(
    slash_command,
    guild_only,
    category = "Moderation",
    default_member_permissions = "BAN_MEMBERS",
    required_permissions = "BAN_MEMBERS"
)]
pub async fn ban(
    ctx: Context<'_>,
    #[description = "The user to ban"] user: serenity::User,
    #[description = "Reason for the ban"]
    #[max_length = 512]
    reason: Option<String>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };

    let member = actionable_member(ctx, guild_id, &user, BAN).await?;
    let reason = reason.as_deref().unwrap_or(DEFAULT_REASON);

    if let Err(source) = member.ban_with_reason(ctx.http(), 0, reason).await {
        error!(?source, user_id = %user.id, "ban request failed");
        return Err(BAN.not_found().into());
    }

    info!(
        guild_id = %guild_id,
        user_id = %user.id,
        moderator_id = %ctx.author().id,
        "member banned"
    );
    ctx.send(poise::CreateReply::default().embed(moderation_action_embed(
        &user, "banned", reason, None,
    )))
    .await?;

    Ok(())
}
