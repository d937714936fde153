use std::env;

use thiserror::Error;

/// Bot tokens are well over this length; anything shorter is a paste error.
pub const MIN_TOKEN_LEN: usize = 50;

pub const TOKEN_VAR: &str = "DISCORD_TOKEN";
pub const CLIENT_ID_VAR: &str = "CLIENT_ID";
pub const GUILD_ID_VAR: &str = "GUILD_ID";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("invalid DISCORD_TOKEN format (expected at least {} characters)", MIN_TOKEN_LEN)]
    MalformedToken,

    #[error("{key} must be a numeric Discord id, got `{value}`")]
    InvalidId { key: &'static str, value: String },
}

#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub client_id: u64,
    /// When set, commands are registered to this guild only.
    pub guild_id: Option<u64>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &self.token_preview())
            .field("client_id", &self.client_id)
            .field("guild_id", &self.guild_id)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source. Blank values count
    /// as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let token = read(TOKEN_VAR);
        let client_id = read(CLIENT_ID_VAR);

        let mut missing = Vec::new();
        if token.is_none() {
            missing.push(TOKEN_VAR);
        }
        if client_id.is_none() {
            missing.push(CLIENT_ID_VAR);
        }

        let (Some(token), Some(client_id)) = (token, client_id) else {
            return Err(ConfigError::Missing(missing));
        };

        if token.chars().count() < MIN_TOKEN_LEN {
            return Err(ConfigError::MalformedToken);
        }

        let client_id = parse_id(CLIENT_ID_VAR, &client_id)?;
        let guild_id = read(GUILD_ID_VAR)
            .map(|raw| parse_id(GUILD_ID_VAR, &raw))
            .transpose()?;

        Ok(Self {
            token,
            client_id,
            guild_id,
        })
    }

    /// First ten characters of the token, safe to log.
    pub fn token_preview(&self) -> String {
        let head: String = self.token.chars().take(10).collect();
        format!("{head}...")
    }
}

fn parse_id(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse::<u64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ConfigError::InvalidId {
            key,
            value: raw.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{CLIENT_ID_VAR, Config, ConfigError, GUILD_ID_VAR, TOKEN_VAR};

    fn valid_token() -> String {
        "x".repeat(72)
    }

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn lists_every_missing_variable() {
        assert_eq!(
            load(&[]).unwrap_err(),
            ConfigError::Missing(vec![TOKEN_VAR, CLIENT_ID_VAR])
        );

        let token = valid_token();
        assert_eq!(
            load(&[(TOKEN_VAR, &token)]).unwrap_err(),
            ConfigError::Missing(vec![CLIENT_ID_VAR])
        );
    }

    #[test]
    fn blank_values_count_as_missing() {
        assert_eq!(
            load(&[(TOKEN_VAR, "   "), (CLIENT_ID_VAR, "123")]).unwrap_err(),
            ConfigError::Missing(vec![TOKEN_VAR])
        );
    }

    #[test]
    fn short_tokens_are_rejected() {
        let token = "x".repeat(49);
        assert_eq!(
            load(&[(TOKEN_VAR, &token), (CLIENT_ID_VAR, "123")]).unwrap_err(),
            ConfigError::MalformedToken
        );
    }

    #[test]
    fn guild_id_is_optional() {
        let token = valid_token();
        let global = load(&[(TOKEN_VAR, &token), (CLIENT_ID_VAR, "123")]).unwrap();
        assert_eq!(global.client_id, 123);
        assert_eq!(global.guild_id, None);

        let scoped = load(&[
            (TOKEN_VAR, &token),
            (CLIENT_ID_VAR, "123"),
            (GUILD_ID_VAR, "456"),
        ])
        .unwrap();
        assert_eq!(scoped.guild_id, Some(456));
    }

    #[test]
    fn non_numeric_ids_are_rejected() {
        let token = valid_token();
        assert_eq!(
            load(&[(TOKEN_VAR, &token), (CLIENT_ID_VAR, "abc")]).unwrap_err(),
            ConfigError::InvalidId {
                key: CLIENT_ID_VAR,
                value: "abc".to_owned(),
            }
        );
    }

    #[test]
    fn debug_output_hides_the_token() {
        let token = valid_token();
        let config = load(&[(TOKEN_VAR, &token), (CLIENT_ID_VAR, "1")]).unwrap();
        let rendered = format!("{config:?}");

        assert!(!rendered.contains(&token));
        assert!(rendered.contains("xxxxxxxxxx..."));
    }
}
