use crate::utility::embeds::help_description;
use crate::{COMMANDS, CommandMeta};
use maple_core::{Context, Error};
use maple_database::impls::custom_commands::list_custom_command_names;
use maple_utils::embed::described_embed;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Show all commands.",
    category: "utility",
    usage: "/help",
    placeholder: false,
};

#[poise::command(slash_command, category = "Utility")]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let custom_names = list_custom_command_names(&ctx.data().db).await?;

    let embed = described_embed("🤖 Bot Commands", help_description(COMMANDS, &custom_names));
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}
