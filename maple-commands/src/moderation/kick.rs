use poise::serenity_prelude as serenity;
use tracing::{error, info};

use crate::CommandMeta;
use crate::moderation::embeds::{DEFAULT_REASON, moderation_action_embed};
use crate::moderation::target::{KICK, actionable_member};
use maple_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "kick",
    desc: "Kick a user from the server.",
    category: "moderation",
    usage: "/kick <user> [reason]",
    placeholder: false,
};

#[poise::command(
    slash_command,
    guild_only,
    category = "Moderation",
    default_member_permissions = "KICK_MEMBERS",
    required_permissions = "KICK_MEMBERS"
)]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "The user to kick"] user: serenity::User,
    #[description = "Reason for the kick"]
    #[max_length = 512]
    reason: Option<String>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };

    let member = actionable_member(ctx, guild_id, &user, KICK).await?;
    let reason = reason.as_deref().unwrap_or(DEFAULT_REASON);

    if let Err(source) = member.kick_with_reason(ctx.http(), reason).await {
        error!(?source, user_id = %user.id, "kick request failed");
        return Err(KICK.not_found().into());
    }

    info!(
        guild_id = %guild_id,
        user_id = %user.id,
        moderator_id = %ctx.author().id,
        "member kicked"
    );
    ctx.send(poise::CreateReply::default().embed(moderation_action_embed(
        &user, "kicked", reason, None,
    )))
    .await?;

    Ok(())
}
