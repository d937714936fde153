use poise::serenity_prelude as serenity;
use tracing::warn;

use crate::CommandMeta;
use maple_core::reply::{defer_reply, edit_deferred_embed};
use maple_core::{CommandError, Context, Error};
use maple_utils::embed::{EMBED_TITLE_LIMIT, MEME_EMBED_COLOR, clamp_chars};

pub const META: CommandMeta = CommandMeta {
    name: "meme",
    desc: "Get a random meme.",
    category: "fun",
    usage: "/meme",
    placeholder: false,
};

#[poise::command(slash_command, category = "Fun")]
pub async fn meme(ctx: Context<'_>) -> Result<(), Error> {
    defer_reply(ctx).await?;

    let meme = match ctx.data().content.random_meme().await {
        Ok(meme) => meme,
        Err(source) => {
            warn!(?source, "meme fetch failed");
            return Err(CommandError::PlatformRejected {
                action: "fetch meme",
                hint: None,
            }
            .into());
        }
    };

    let embed = serenity::CreateEmbed::new()
        .title(clamp_chars(&meme.title, EMBED_TITLE_LIMIT))
        .image(meme.url)
        .color(MEME_EMBED_COLOR);
    edit_deferred_embed(ctx, embed).await
}
