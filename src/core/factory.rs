use crate::core::state::{Robot, Weapon};
use crate::data::robots::RobotSpec;
use crate::data::weapons::{WeaponCatalog, WeaponSpec};
use crate::error::RosterError;

/// Fresh weapon with a full magazine.
pub fn create_weapon(spec: &WeaponSpec) -> Weapon {
    Weapon::new(&spec.name, spec.damage, spec.ammo)
}

/// Builds a battle-ready robot at full health. Each slot gets its own weapon
/// copy, even when both slots name the same catalog entry.
pub fn create_robot(spec: &RobotSpec, catalog: &WeaponCatalog) -> Result<Robot, RosterError> {
    let primary = create_weapon(catalog.resolve(spec.primary)?);
    let secondary = create_weapon(catalog.resolve(spec.secondary)?);
    Ok(Robot::new(
        &spec.name,
        spec.max_health,
        spec.melee_damage,
        primary,
        secondary,
    ))
}
