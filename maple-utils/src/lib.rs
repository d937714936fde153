/// Generic embed builders and colors shared across commands.
pub mod embed;
/// Shared formatting helpers.
pub mod formatting;
/// Prefix for chat-triggered custom commands.
pub const COMMAND_PREFIX: char = '!';
/// Pure parser helpers.
pub mod parse;
/// Permission and role hierarchy helpers.
pub mod permissions;
