use poise::serenity_prelude as serenity;
use tracing::warn;

use maple_core::{CommandError, Context, Error};
use maple_utils::permissions::resolve_hierarchy;

pub const NOT_IN_SERVER_HINT: &str = "They may not be in the server.";

/// A member-targeting moderation action.
#[derive(Clone, Copy, Debug)]
pub struct ModerationAction {
    pub permission: serenity::Permissions,
    /// Phrase for a hierarchy refusal, e.g. "kick this user".
    pub denied: &'static str,
    /// Phrase for a failed lookup or request, e.g. "kick user".
    pub failed: &'static str,
}

pub const KICK: ModerationAction = ModerationAction {
    permission: serenity::Permissions::KICK_MEMBERS,
    denied: "kick this user",
    failed: "kick user",
};

pub const BAN: ModerationAction = ModerationAction {
    permission: serenity::Permissions::BAN_MEMBERS,
    denied: "ban this user",
    failed: "ban user",
};

impl ModerationAction {
    pub fn not_found(&self) -> CommandError {
        CommandError::NotFound {
            action: self.failed,
            hint: NOT_IN_SERVER_HINT,
        }
    }
}

/// Resolve `user` as a guild member the bot is allowed to act on.
pub async fn actionable_member(
    ctx: Context<'_>,
    guild_id: serenity::GuildId,
    user: &serenity::User,
    action: ModerationAction,
) -> Result<serenity::Member, Error> {
    let member = match guild_id.member(ctx.http(), user.id).await {
        Ok(member) => member,
        Err(source) => {
            warn!(?source, user_id = %user.id, "moderation target lookup failed");
            return Err(action.not_found().into());
        }
    };

    let hierarchy =
        resolve_hierarchy(ctx.http(), guild_id, ctx.framework().bot_id, &member).await?;
    if !hierarchy.is_actionable(action.permission) {
        return Err(CommandError::PermissionDenied {
            action: action.denied,
        }
        .into());
    }

    Ok(member)
}
