use serenity::all::{GuildId, UserId};

use crate::{
    error::{config::ConfigError, AppError},
    util::parse::{parse_bool_flag, parse_snowflake, parse_snowflake_list},
};

pub struct Config {
    pub discord_bot_token: String,

    /// Bot owner allowed to run `/lfg_list`. Falls back to the application owner when unset.
    pub owner_id: Option<UserId>,

    /// Guilds to register commands in. Commands are registered globally when empty.
    pub guild_ids: Vec<GuildId>,

    /// Retire a request when its own author leaves the bound voice channel.
    pub retire_on_author_leave: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the raw value of a variable, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every set variable parsed
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is malformed
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let discord_bot_token = lookup("DISCORD_BOT_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let owner_id = match lookup("DISCORD_OWNER_ID") {
            Some(value) if !value.trim().is_empty() => {
                Some(UserId::new(parse_snowflake("DISCORD_OWNER_ID", &value)?))
            }
            _ => None,
        };

        let guild_ids = match lookup("LFG_GUILD_IDS") {
            Some(value) => parse_snowflake_list("LFG_GUILD_IDS", &value)?
                .into_iter()
                .map(GuildId::new)
                .collect(),
            None => Vec::new(),
        };

        let retire_on_author_leave = match lookup("LFG_RETIRE_ON_AUTHOR_LEAVE") {
            Some(value) => parse_bool_flag("LFG_RETIRE_ON_AUTHOR_LEAVE", &value)?,
            None => false,
        };

        Ok(Self {
            discord_bot_token,
            owner_id,
            guild_ids,
            retire_on_author_leave,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    /// Tests loading a minimal configuration.
    ///
    /// Expected: token set, optional values defaulted
    #[test]
    fn loads_with_only_token() {
        let config = Config::from_lookup(lookup_from(&[("DISCORD_BOT_TOKEN", "abc")])).unwrap();

        assert_eq!(config.discord_bot_token, "abc");
        assert!(config.owner_id.is_none());
        assert!(config.guild_ids.is_empty());
        assert!(!config.retire_on_author_leave);
    }

    /// Tests that a missing token is reported by name.
    ///
    /// Expected: Err(MissingEnvVar("DISCORD_BOT_TOKEN"))
    #[test]
    fn fails_without_token() {
        let result = Config::from_lookup(lookup_from(&[]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(ref name))) if name == "DISCORD_BOT_TOKEN"
        ));
    }

    /// Tests parsing every optional variable.
    ///
    /// Expected: owner, guild list and flag populated
    #[test]
    fn parses_optional_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("DISCORD_BOT_TOKEN", "abc"),
            ("DISCORD_OWNER_ID", "42"),
            ("LFG_GUILD_IDS", "1279299830442627074, 1364692913438589098"),
            ("LFG_RETIRE_ON_AUTHOR_LEAVE", "true"),
        ]))
        .unwrap();

        assert_eq!(config.owner_id, Some(UserId::new(42)));
        assert_eq!(
            config.guild_ids,
            vec![
                GuildId::new(1279299830442627074),
                GuildId::new(1364692913438589098)
            ]
        );
        assert!(config.retire_on_author_leave);
    }

    /// Tests that a malformed owner id is rejected.
    ///
    /// Expected: Err(InvalidEnvVar) naming DISCORD_OWNER_ID
    #[test]
    fn rejects_malformed_owner_id() {
        let result = Config::from_lookup(lookup_from(&[
            ("DISCORD_BOT_TOKEN", "abc"),
            ("DISCORD_OWNER_ID", "not-a-number"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { ref name, .. })) if name == "DISCORD_OWNER_ID"
        ));
    }
}
