use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::info::{AVATAR_SIZE, sized_avatar_url};
use maple_core::{Context, Error};
use maple_utils::embed::titled_embed;

pub const META: CommandMeta = CommandMeta {
    name: "avatar",
    desc: "Get a user's avatar.",
    category: "utility",
    usage: "/avatar [user]",
    placeholder: false,
};

#[poise::command(slash_command, category = "Utility")]
pub async fn avatar(
    ctx: Context<'_>,
    #[description = "User to get avatar of"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let user = user.as_ref().unwrap_or_else(|| ctx.author());

    let embed = titled_embed(format!("{}'s Avatar", user.name))
        .image(sized_avatar_url(&user.face(), AVATAR_SIZE));
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
