use crate::error::RosterError;
use serde::{Deserialize, Serialize};

/// Catalog entry for a weapon. `ammo` is the cap every battle starts with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeaponSpec {
    pub name: String,
    pub damage: f64,
    pub ammo: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeaponCatalog {
    weapons: Vec<WeaponSpec>,
}

impl WeaponCatalog {
    pub fn new() -> Self {
        Self { weapons: Vec::new() }
    }

    /// Adds a weapon and returns its index.
    pub fn insert(&mut self, weapon: WeaponSpec) -> usize {
        self.weapons.push(weapon);
        self.weapons.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&WeaponSpec> {
        self.weapons.get(index)
    }

    pub fn resolve(&self, index: usize) -> Result<&WeaponSpec, RosterError> {
        self.get(index).ok_or(RosterError::UnknownWeapon {
            index,
            len: self.weapons.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WeaponSpec> {
        self.weapons.iter()
    }
}
