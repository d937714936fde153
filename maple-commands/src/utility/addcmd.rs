use tracing::info;

use crate::fallback::custom_command_key;
use crate::{CommandMeta, is_builtin};
use maple_core::{Context, Error};
use maple_database::impls::custom_commands::upsert_custom_command;
use maple_utils::COMMAND_PREFIX;

pub const META: CommandMeta = CommandMeta {
    name: "addcmd",
    desc: "Add a custom command.",
    category: "utility",
    usage: "/addcmd <name> <response>",
    placeholder: false,
};

pub const MAX_CUSTOM_COMMAND_NAME_LEN: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameRejection {
    Empty,
    Whitespace,
    TooLong,
    Builtin,
}

impl NameRejection {
    pub fn message(&self) -> String {
        match self {
            Self::Empty => "❌ Command name cannot be empty.".to_owned(),
            Self::Whitespace => "❌ Command name must be a single word.".to_owned(),
            Self::TooLong => format!(
                "❌ Command name must be at most {} characters.",
                MAX_CUSTOM_COMMAND_NAME_LEN
            ),
            Self::Builtin => "❌ That name belongs to a built-in command.".to_owned(),
        }
    }
}

#[poise::command(
    slash_command,
    guild_only,
    category = "Utility",
    default_member_permissions = "MANAGE_GUILD",
    required_permissions = "MANAGE_GUILD"
)]
pub async fn addcmd(
    ctx: Context<'_>,
    #[description = "Command name"]
    #[max_length = 32]
    name: String,
    #[description = "Command response"]
    #[max_length = 2000]
    response: String,
) -> Result<(), Error> {
    let name = match normalize_custom_command_name(&name) {
        Ok(name) => name,
        Err(rejection) => {
            ctx.say(rejection.message()).await?;
            return Ok(());
        }
    };

    let previous = upsert_custom_command(&ctx.data().db, &name, &response).await?;
    let verb = if previous.is_some() { "updated" } else { "added" };

    info!(name = %name, author_id = %ctx.author().id, "custom command {}", verb);
    ctx.say(format!("✅ Custom command `{}` {}!", name, verb))
        .await?;

    Ok(())
}

/// Trim, drop a leading `!` and lowercase a custom command name.
pub fn normalize_custom_command_name(raw: &str) -> Result<String, NameRejection> {
    let trimmed = raw.trim();
    let name = custom_command_key(trimmed.strip_prefix(COMMAND_PREFIX).unwrap_or(trimmed));

    if name.is_empty() {
        return Err(NameRejection::Empty);
    }
    if name.chars().any(char::is_whitespace) {
        return Err(NameRejection::Whitespace);
    }
    if name.chars().count() > MAX_CUSTOM_COMMAND_NAME_LEN {
        return Err(NameRejection::TooLong);
    }
    if is_builtin(&name) {
        return Err(NameRejection::Builtin);
    }

    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::{NameRejection, normalize_custom_command_name};
    use crate::fallback::custom_command_invocation;

    #[test]
    fn names_are_trimmed_and_lowercased() {
        assert_eq!(normalize_custom_command_name("  Rules "), Ok("rules".to_owned()));
        assert_eq!(normalize_custom_command_name("!FAQ"), Ok("faq".to_owned()));
    }

    #[test]
    fn stored_names_match_chat_lookups() {
        for raw in ["Ärger", "!Café", "RULES"] {
            let stored = normalize_custom_command_name(raw).unwrap();
            let looked_up =
                custom_command_invocation(&format!("!{}", raw.trim_start_matches('!'))).unwrap();
            assert_eq!(stored, looked_up, "{raw}");
        }
    }

    #[test]
    fn invalid_names_are_rejected() {
        assert_eq!(normalize_custom_command_name("   "), Err(NameRejection::Empty));
        assert_eq!(normalize_custom_command_name("!"), Err(NameRejection::Empty));
        assert_eq!(
            normalize_custom_command_name("two words"),
            Err(NameRejection::Whitespace)
        );
        assert_eq!(
            normalize_custom_command_name(&"x".repeat(33)),
            Err(NameRejection::TooLong)
        );
        assert!(normalize_custom_command_name(&"x".repeat(32)).is_ok());
    }

    #[test]
    fn builtins_cannot_be_shadowed_but_placeholders_can() {
        assert_eq!(normalize_custom_command_name("Kick"), Err(NameRejection::Builtin));
        assert_eq!(normalize_custom_command_name("8ball"), Err(NameRejection::Builtin));
        assert_eq!(normalize_custom_command_name("weather"), Ok("weather".to_owned()));
    }
}
