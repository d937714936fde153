use thiserror::Error;

pub const GENERIC_ERROR_MESSAGE: &str = "❌ An error occurred while executing this command.";

/// Failure kinds a command handler can report. The error boundary turns these
/// into user-facing text; anything else is treated as [`CommandError::Internal`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The bot or the invoker may not perform the action.
    #[error("not permitted to {action}")]
    PermissionDenied { action: &'static str },

    /// The target of the action could not be resolved or acted on.
    #[error("failed to {action}: target not found")]
    NotFound {
        action: &'static str,
        hint: &'static str,
    },

    /// Discord or an upstream API refused the request.
    #[error("failed to {action}: request rejected")]
    PlatformRejected {
        action: &'static str,
        hint: Option<&'static str>,
    },

    #[error("internal error")]
    Internal,
}

impl CommandError {
    pub fn user_message(&self) -> String {
        match self {
            Self::PermissionDenied { action } => {
                format!("❌ Cannot {action} (insufficient permissions or higher role).")
            }
            Self::NotFound { action, hint } => format!("❌ Failed to {action}. {hint}"),
            Self::PlatformRejected {
                action,
                hint: Some(hint),
            } => format!("❌ Failed to {action}. {hint}"),
            Self::PlatformRejected { action, hint: None } => format!("❌ Failed to {action}."),
            Self::Internal => GENERIC_ERROR_MESSAGE.to_owned(),
        }
    }

    /// Internal failures are shown only to the invoker.
    pub fn is_ephemeral(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Classify an arbitrary handler error.
pub fn classify(error: &anyhow::Error) -> CommandError {
    error
        .downcast_ref::<CommandError>()
        .cloned()
        .unwrap_or(CommandError::Internal)
}

#[cfg(test)]
mod tests {
    use super::{CommandError, GENERIC_ERROR_MESSAGE, classify};

    #[test]
    fn kinds_render_user_text() {
        assert_eq!(
            CommandError::PermissionDenied {
                action: "kick this user"
            }
            .user_message(),
            "❌ Cannot kick this user (insufficient permissions or higher role)."
        );
        assert_eq!(
            CommandError::NotFound {
                action: "ban user",
                hint: "They may not be in the server.",
            }
            .user_message(),
            "❌ Failed to ban user. They may not be in the server."
        );
        assert_eq!(
            CommandError::PlatformRejected {
                action: "fetch meme",
                hint: None,
            }
            .user_message(),
            "❌ Failed to fetch meme."
        );
        assert_eq!(CommandError::Internal.user_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn unknown_errors_are_internal() {
        let error = anyhow::anyhow!("socket closed");
        assert_eq!(classify(&error), CommandError::Internal);
        assert!(classify(&error).is_ephemeral());
    }

    #[test]
    fn command_errors_survive_anyhow() {
        let error: anyhow::Error = CommandError::PlatformRejected {
            action: "clear messages",
            hint: Some("Messages may be too old (>14 days)."),
        }
        .into();

        let kind = classify(&error);
        assert!(!kind.is_ephemeral());
        assert_eq!(
            kind.user_message(),
            "❌ Failed to clear messages. Messages may be too old (>14 days)."
        );
    }
}
