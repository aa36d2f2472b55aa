//! Error types raised by the roster, configuration and battle loop.

use thiserror::Error;

/// Rejections raised while editing a roster or setting up a matchup.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("unknown weapon #{index} (catalog holds {len})")]
    UnknownWeapon { index: usize, len: usize },

    #[error("unknown robot #{index} (roster holds {len})")]
    UnknownRobot { index: usize, len: usize },

    #[error("a robot cannot fight itself (#{0} picked twice)")]
    SameRobot(usize),

    #[error("invalid stat for '{name}': {reason}")]
    InvalidStat { name: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got '{value}'")]
    InvalidNumber { key: String, value: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BattleError {
    #[error("the battle has already concluded")]
    Concluded,

    #[error("side {0:?} is under manual control and needs an action")]
    ManualControl(crate::core::state::Side),
}
