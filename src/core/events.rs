use crate::core::state::{Robot, Side};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Narration produced while resolving an action on the live battle state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BattleEvent {
    Pass {
        actor: Arc<str>,
    },
    Attack {
        actor: Arc<str>,
        target: Arc<str>,
    },
    Shoot {
        actor: Arc<str>,
        target: Arc<str>,
        weapon: Arc<str>,
    },
    NoAmmo {
        actor: Arc<str>,
        weapon: Arc<str>,
    },
    Defend {
        actor: Arc<str>,
    },
    NotEffective {
        target: Arc<str>,
    },
    Damage {
        target: Arc<str>,
        amount: f64,
    },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEvent::Pass { actor } => write!(f, "{} passed their turn!", actor),
            BattleEvent::Attack { actor, target } => {
                write!(f, "{} attacked {} using their fists!", actor, target)
            }
            BattleEvent::Shoot { actor, target, weapon } => {
                write!(f, "{} attacked {} using {}!", actor, target, weapon)
            }
            BattleEvent::NoAmmo { actor, weapon } => {
                write!(f, "{} tried using {} but it has no ammo!", actor, weapon)
            }
            BattleEvent::Defend { actor } => write!(f, "{} defended!", actor),
            BattleEvent::NotEffective { .. } => write!(f, "The Attack is not effective!"),
            BattleEvent::Damage { target, amount } => {
                write!(f, "{} got hit by {:.2} damage!", target, amount)
            }
        }
    }
}

/// Health line printed for both robots after every turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub side: Side,
    pub name: Arc<str>,
    pub health: f64,
    pub max_health: f64,
}

impl HealthReport {
    pub fn of(side: Side, robot: &Robot) -> Self {
        Self {
            side,
            name: robot.name.clone(),
            health: robot.health,
            max_health: robot.max_health,
        }
    }
}

impl fmt::Display for HealthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'s HP = {:.2}/{:.2}", self.name, self.health, self.max_health)
    }
}
