use crate::core::factory::create_robot;
use crate::core::state::{create_combat_state, CombatState};
use crate::data::robots::RobotSpec;
use crate::data::weapons::{WeaponCatalog, WeaponSpec};
use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application state behind the menu: the weapon catalog and the robots
/// built from it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    weapons: WeaponCatalog,
    #[serde(default)]
    robots: Vec<RobotSpec>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weapons(&self) -> &WeaponCatalog {
        &self.weapons
    }

    pub fn robots(&self) -> &[RobotSpec] {
        &self.robots
    }

    pub fn robot(&self, index: usize) -> Result<&RobotSpec, RosterError> {
        self.robots.get(index).ok_or(RosterError::UnknownRobot {
            index,
            len: self.robots.len(),
        })
    }

    pub fn add_weapon(&mut self, weapon: WeaponSpec) -> Result<usize, RosterError> {
        if !weapon.damage.is_finite() {
            return Err(RosterError::InvalidStat {
                name: weapon.name,
                reason: "damage must be a finite number".to_string(),
            });
        }
        Ok(self.weapons.insert(weapon))
    }

    pub fn add_robot(&mut self, robot: RobotSpec) -> Result<usize, RosterError> {
        if !robot.max_health.is_finite() || robot.max_health <= 0.0 {
            return Err(RosterError::InvalidStat {
                name: robot.name,
                reason: "max health must be a positive number".to_string(),
            });
        }
        if !robot.melee_damage.is_finite() {
            return Err(RosterError::InvalidStat {
                name: robot.name,
                reason: "melee damage must be a finite number".to_string(),
            });
        }
        self.weapons.resolve(robot.primary)?;
        self.weapons.resolve(robot.secondary)?;
        self.robots.push(robot);
        Ok(self.robots.len() - 1)
    }

    /// Combat state for two distinct robots, `first` on side A.
    pub fn matchup(&self, first: usize, second: usize) -> Result<CombatState, RosterError> {
        let side_a = self.robot(first)?;
        let side_b = self.robot(second)?;
        if first == second {
            return Err(RosterError::SameRobot(first));
        }
        Ok(create_combat_state(
            create_robot(side_a, &self.weapons)?,
            create_robot(side_b, &self.weapons)?,
        ))
    }

    /// Re-adds every entry through the validating setters.
    fn validated(self) -> Result<Self, RosterError> {
        let mut roster = Self::new();
        for weapon in self.weapons.iter() {
            roster.add_weapon(weapon.clone())?;
        }
        for robot in self.robots {
            roster.add_robot(robot)?;
        }
        Ok(roster)
    }

    pub fn load_from_json_str(json: &str) -> Result<Self, RosterError> {
        let roster: Roster = serde_json::from_str(json)?;
        roster.validated()
    }

    pub fn load_from_yaml_str(yaml: &str) -> Result<Self, RosterError> {
        let roster: Roster = serde_yaml::from_str(yaml)?;
        roster.validated()
    }

    /// Loads a roster file, YAML for `.yaml`/`.yml` and JSON otherwise.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::load_from_yaml_str(&contents),
            _ => Self::load_from_json_str(&contents),
        }
    }

    /// Three stock robots and the weapons they carry.
    pub fn default_pack() -> Result<Self, RosterError> {
        const DEFAULT_ROSTER_JSON: &str = include_str!("../../data/roster.json");
        Self::load_from_json_str(DEFAULT_ROSTER_JSON)
    }
}
