use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A ranged weapon carried by a robot. Each robot owns its own copy, so ammo
/// spent by one slot never drains another slot or the other side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: Arc<str>,
    pub damage: f64,
    pub ammo: u32,
}

impl Weapon {
    pub fn new(name: &str, damage: f64, ammo: u32) -> Self {
        Self {
            name: Arc::from(name),
            damage,
            ammo,
        }
    }

    /// Placeholder for an empty slot. It never fires.
    pub fn unarmed() -> Self {
        Self::new("None", -1.0, 0)
    }

    pub fn has_ammo(&self) -> bool {
        self.ammo > 0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    pub name: Arc<str>,
    pub max_health: f64,
    pub health: f64,
    pub melee_damage: f64,
    #[serde(default)]
    pub defended: bool,
    pub primary: Weapon,
    pub secondary: Weapon,
}

impl Robot {
    pub fn new(name: &str, max_health: f64, melee_damage: f64, primary: Weapon, secondary: Weapon) -> Self {
        Self {
            name: Arc::from(name),
            max_health,
            health: max_health,
            melee_damage,
            defended: false,
            primary,
            secondary,
        }
    }

    pub fn with_health(mut self, health: f64) -> Self {
        self.health = health.clamp(0.0, self.max_health);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Pass,
    Attack,
    ShootPrimary,
    ShootSecondary,
    Defend,
}

impl Action {
    /// Every action in search order. Earlier entries win ties.
    pub const ALL: [Action; 5] = [
        Action::Pass,
        Action::Attack,
        Action::ShootPrimary,
        Action::ShootSecondary,
        Action::Defend,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::Pass => "Pass",
            Action::Attack => "Attack",
            Action::ShootPrimary => "Shoot primary",
            Action::ShootSecondary => "Shoot secondary",
            Action::Defend => "Defend",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatState {
    pub robots: [Robot; 2],
}

impl CombatState {
    pub fn robot(&self, side: Side) -> &Robot {
        &self.robots[side.index()]
    }

    pub fn robot_mut(&mut self, side: Side) -> &mut Robot {
        &mut self.robots[side.index()]
    }

    /// Independent copy used for one search node. Labels are shared, numbers
    /// (health, shield, ammo) are copied.
    pub fn snapshot(&self) -> CombatState {
        self.clone()
    }
}

pub fn create_combat_state(side_a: Robot, side_b: Robot) -> CombatState {
    let mut robots = [side_a, side_b];
    for robot in &mut robots {
        robot.defended = false;
        robot.health = robot.health.clamp(0.0, robot.max_health);
    }
    CombatState { robots }
}
