pub mod ai;
pub mod config;
pub mod core;
pub mod data;
pub mod error;

pub use ai::{choose_action, choose_action_unpruned, choose_greedy, evaluate_state, SearchResult, SearchStats};
pub use config::BattleOptions;
pub use core::{
    actions::{apply_action, is_alive},
    battle::{decide_winner, Battle, BattleEngine, BattleOutcome, BattlePhase, BattleResult, Controller, Decision, TurnReport},
    events::{BattleEvent, HealthReport},
    factory::create_robot,
    replay::replay_battle,
    state::{create_combat_state, Action, CombatState, Robot, Side, Weapon},
};
pub use data::{
    robots::RobotSpec,
    roster::Roster,
    weapons::{WeaponCatalog, WeaponSpec},
};
pub use error::{BattleError, ConfigError, RosterError};
