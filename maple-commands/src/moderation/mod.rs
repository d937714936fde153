pub mod ban;
pub mod clear;
pub mod kick;
pub mod warn;
pub mod warnings;

mod embeds;
mod target;
