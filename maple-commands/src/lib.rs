pub mod fallback;
pub mod fun;
pub mod info;
pub mod moderation;
pub mod placeholders;
pub mod utility;

use maple_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    /// Shown in `/help`.
    pub usage: &'static str,
    /// Declared to Discord but answered by the fallback.
    pub placeholder: bool,
}

/// Help categories in display order.
pub const CATEGORIES: &[&str] = &["fun", "moderation", "utility", "music", "economy", "custom"];

pub const COMMANDS: &[CommandMeta] = &[
    fun::petpet::META,
    fun::poll::META,
    fun::meme::META,
    fun::joke::META,
    fun::eightball::META,
    info::avatar::META,
    info::userinfo::META,
    info::serverinfo::META,
    moderation::kick::META,
    moderation::ban::META,
    moderation::warn::META,
    moderation::warnings::META,
    moderation::clear::META,
    utility::remind::META,
    utility::reminders::META,
    utility::unremind::META,
    utility::afk::META,
    utility::help::META,
    utility::addcmd::META,
    placeholders::WEATHER_META,
    placeholders::TRANSLATE_META,
    placeholders::QR_META,
    placeholders::PLAY_META,
    placeholders::STOP_META,
    placeholders::BALANCE_META,
    placeholders::DAILY_META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        fun::petpet::petpet(),
        fun::poll::poll(),
        fun::meme::meme(),
        fun::joke::joke(),
        fun::eightball::eightball(),
        info::avatar::avatar(),
        info::userinfo::userinfo(),
        info::serverinfo::serverinfo(),
        moderation::kick::kick(),
        moderation::ban::ban(),
        moderation::warn::warn(),
        moderation::warnings::warnings(),
        moderation::clear::clear(),
        utility::remind::remind(),
        utility::reminders::reminders(),
        utility::unremind::unremind(),
        utility::afk::afk(),
        utility::help::help(),
        utility::addcmd::addcmd(),
        placeholders::weather(),
        placeholders::translate(),
        placeholders::qr(),
        placeholders::play(),
        placeholders::stop(),
        placeholders::balance(),
        placeholders::daily(),
    ]
}

/// Whether `name` belongs to a command with a real handler.
pub fn is_builtin(name: &str) -> bool {
    COMMANDS
        .iter()
        .any(|command| command.name == name && !command.placeholder)
}
