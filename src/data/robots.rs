use serde::{Deserialize, Serialize};

/// Roster entry for a robot. Weapons are 0-based indices into the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RobotSpec {
    pub name: String,
    pub max_health: f64,
    pub melee_damage: f64,
    pub primary: usize,
    pub secondary: usize,
}
