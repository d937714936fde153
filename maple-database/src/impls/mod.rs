pub mod afk;
pub mod custom_commands;
pub mod reminders;
pub mod warnings;
