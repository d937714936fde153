pub mod afk;
pub mod reminders;
pub mod warnings;
