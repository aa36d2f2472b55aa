use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEPTH_ENV: &str = "ARENA_SEARCH_DEPTH";
pub const MAX_TURNS_ENV: &str = "ARENA_MAX_TURNS";

pub const DEFAULT_SEARCH_DEPTH: usize = 10;
pub const DEFAULT_MAX_TURNS: u32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOptions {
    /// Plies explored by the minimax controller each turn.
    pub depth: usize,
    /// Turns played before a battle nobody can win is called a stalemate.
    pub max_turns: u32,
}

impl Default for BattleOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            max_turns: DEFAULT_MAX_TURNS,
        }
    }
}

impl BattleOptions {
    /// Defaults overridden by `ARENA_SEARCH_DEPTH` and `ARENA_MAX_TURNS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut options = Self::default();
        if let Some(value) = lookup(DEPTH_ENV) {
            options.depth = parse_number(DEPTH_ENV, &value)?;
        }
        if let Some(value) = lookup(MAX_TURNS_ENV) {
            options.max_turns = parse_number(MAX_TURNS_ENV, &value)?;
        }
        Ok(options)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key: key.to_string(),
        value: value.to_string(),
    })
}
