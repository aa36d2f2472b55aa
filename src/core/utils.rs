use crate::core::state::{Action, Robot, Weapon};

/// Weapon slot an action fires, if it is a shooting action.
pub fn weapon_for(robot: &Robot, action: Action) -> Option<&Weapon> {
    match action {
        Action::ShootPrimary => Some(&robot.primary),
        Action::ShootSecondary => Some(&robot.secondary),
        Action::Pass | Action::Attack | Action::Defend => None,
    }
}

pub fn weapon_for_mut(robot: &mut Robot, action: Action) -> Option<&mut Weapon> {
    match action {
        Action::ShootPrimary => Some(&mut robot.primary),
        Action::ShootSecondary => Some(&mut robot.secondary),
        Action::Pass | Action::Attack | Action::Defend => None,
    }
}
