pub mod addcmd;
pub mod afk;
pub mod help;
pub mod reminders;
pub mod remind;
pub mod unremind;

mod embeds;
