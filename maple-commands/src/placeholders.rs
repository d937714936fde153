//! Commands declared to Discord without a real implementation yet. Each one
//! answers through the fallback, so an admin can shadow it with `/addcmd`.

use crate::{CommandMeta, fallback};
use maple_core::{Context, Error};

pub const WEATHER_META: CommandMeta = CommandMeta {
    name: "weather",
    desc: "Get weather information.",
    category: "utility",
    usage: "/weather <location>",
    placeholder: true,
};

pub const TRANSLATE_META: CommandMeta = CommandMeta {
    name: "translate",
    desc: "Translate text.",
    category: "utility",
    usage: "/translate <text> <to>",
    placeholder: true,
};

pub const QR_META: CommandMeta = CommandMeta {
    name: "qr",
    desc: "Generate a QR code.",
    category: "utility",
    usage: "/qr <text>",
    placeholder: true,
};

pub const PLAY_META: CommandMeta = CommandMeta {
    name: "play",
    desc: "Play music (placeholder).",
    category: "music",
    usage: "/play <song>",
    placeholder: true,
};

pub const STOP_META: CommandMeta = CommandMeta {
    name: "stop",
    desc: "Stop music.",
    category: "music",
    usage: "/stop",
    placeholder: true,
};

pub const BALANCE_META: CommandMeta = CommandMeta {
    name: "balance",
    desc: "Check your balance.",
    category: "economy",
    usage: "/balance",
    placeholder: true,
};

pub const DAILY_META: CommandMeta = CommandMeta {
    name: "daily",
    desc: "Claim your daily reward.",
    category: "economy",
    usage: "/daily",
    placeholder: true,
};

#[poise::command(slash_command, category = "Utility")]
pub async fn weather(
    ctx: Context<'_>,
    #[rename = "location"]
    #[description = "Location to get weather for"]
    _location: String,
) -> Result<(), Error> {
    fallback::respond(ctx).await
}

#[poise::command(slash_command, category = "Utility")]
pub async fn translate(
    ctx: Context<'_>,
    #[rename = "text"]
    #[description = "Text to translate"]
    _text: String,
    #[rename = "to"]
    #[description = "Language to translate to"]
    _to: String,
) -> Result<(), Error> {
    fallback::respond(ctx).await
}

#[poise::command(slash_command, category = "Utility")]
pub async fn qr(
    ctx: Context<'_>,
    #[rename = "text"]
    #[description = "Text to encode"]
    _text: String,
) -> Result<(), Error> {
    fallback::respond(ctx).await
}

#[poise::command(slash_command, category = "Music")]
pub async fn play(
    ctx: Context<'_>,
    #[rename = "song"]
    #[description = "Song to play"]
    _song: String,
) -> Result<(), Error> {
    fallback::respond(ctx).await
}

#[poise::command(slash_command, category = "Music")]
pub async fn stop(ctx: Context<'_>) -> Result<(), Error> {
    fallback::respond(ctx).await
}

#[poise::command(slash_command, category = "Economy")]
pub async fn balance(ctx: Context<'_>) -> Result<(), Error> {
    fallback::respond(ctx).await
}

#[poise::command(slash_command, category = "Economy")]
pub async fn daily(ctx: Context<'_>) -> Result<(), Error> {
    fallback::respond(ctx).await
}
