use maple_core::{Context, Error};
use maple_database::Database;
use maple_database::impls::custom_commands::get_custom_command;
use maple_utils::COMMAND_PREFIX;

pub const NOT_IMPLEMENTED_MESSAGE: &str = "❌ Command not implemented yet!";

/// Reply text for a command name without a dedicated handler: the stored
/// custom command if one exists, otherwise the not-implemented notice.
pub async fn resolve_fallback(db: &Database, name: &str) -> anyhow::Result<String> {
    let reply = get_custom_command(db, &custom_command_key(name))
        .await?
        .unwrap_or_else(|| NOT_IMPLEMENTED_MESSAGE.to_owned());
    Ok(reply)
}

/// Answer the current invocation through the fallback.
pub async fn respond(ctx: Context<'_>) -> Result<(), Error> {
    let reply = resolve_fallback(&ctx.data().db, &ctx.command().name).await?;
    ctx.say(reply).await?;
    Ok(())
}

/// Lookup key for a custom command name. Storage and every lookup path
/// share it.
pub fn custom_command_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Extract the custom command name from a chat message like `!rules please`.
/// The name must follow the prefix directly.
pub fn custom_command_invocation(content: &str) -> Option<String> {
    let rest = content.trim_start().strip_prefix(COMMAND_PREFIX)?;
    let name = rest.split(char::is_whitespace).next()?;
    if name.is_empty() {
        return None;
    }

    Some(custom_command_key(name))
}
