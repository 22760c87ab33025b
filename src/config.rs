use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub discord_token: String,
    /// Prefix that precedes non-literal command names
    pub trigger: String,
    pub log_level: String,
    /// Drop messages from other bots before matching
    pub ignore_bots: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let ignore_bots = match var("IGNORE_BOTS") {
            Some(value) => value
                .parse::<bool>()
                .map_err(|_| anyhow::anyhow!("IGNORE_BOTS must be true or false, got '{}'", value))?,
            None => true,
        };

        Ok(Config {
            discord_token: var("DISCORD_TOKEN")
                .ok_or_else(|| anyhow::anyhow!("DISCORD_TOKEN environment variable not set"))?,
            trigger: var("COMMAND_TRIGGER").unwrap_or_else(|| "!".to_string()),
            log_level: var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            ignore_bots,
        })
    }
}
