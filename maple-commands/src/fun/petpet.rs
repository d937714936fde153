use poise::serenity_prelude as serenity;
use tracing::warn;

use crate::CommandMeta;
use maple_core::reply::{defer_reply, edit_deferred_embed};
use maple_core::{CommandError, Context, Error};
use maple_utils::embed::PET_EMBED_COLOR;

pub const META: CommandMeta = CommandMeta {
    name: "petpet",
    desc: "Pet someone.",
    category: "fun",
    usage: "/petpet [user]",
    placeholder: false,
};

#[poise::command(slash_command, category = "Fun")]
pub async fn petpet(
    ctx: Context<'_>,
    #[description = "User to pet"] user: Option<serenity::User>,
) -> Result<(), Error> {
    defer_reply(ctx).await?;

    let target = user.as_ref().unwrap_or_else(|| ctx.author());
    let gif = match ctx.data().content.pat_gif().await {
        Ok(gif) => gif,
        Err(source) => {
            warn!(?source, "pat gif fetch failed");
            return Err(CommandError::PlatformRejected {
                action: "generate pet pet",
                hint: None,
            }
            .into());
        }
    };

    let embed = serenity::CreateEmbed::new()
        .title(format!("{} pets {}!", ctx.author().name, target.name))
        .description("*Pat pat pat* 🤗")
        .image(gif)
        .thumbnail(target.face())
        .color(PET_EMBED_COLOR);
    edit_deferred_embed(ctx, embed).await
}
