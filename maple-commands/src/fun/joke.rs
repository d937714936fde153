use crate::CommandMeta;
use crate::fun::pick;
use maple_core::{Context, Error};

pub const META: CommandMeta = CommandMeta {
    name: "joke",
    desc: "Get a random joke.",
    category: "fun",
    usage: "/joke",
    placeholder: false,
};

pub const JOKES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything!",
    "Why did the scarecrow win an award? He was outstanding in his field!",
    "Why don't eggs tell jokes? They'd crack each other up!",
    "What do you call a fake noodle? An impasta!",
    "Why did the math book look so sad? Because it had too many problems!",
];

#[poise::command(slash_command, category = "Fun")]
pub async fn joke(ctx: Context<'_>) -> Result<(), Error> {
    ctx.say(pick(JOKES)).await?;
    Ok(())
}
