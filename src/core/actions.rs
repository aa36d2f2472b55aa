use crate::core::events::BattleEvent;
use crate::core::state::{Action, CombatState, Robot, Side};
use crate::core::utils::{weapon_for, weapon_for_mut};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageOutcome {
    pub applied: f64,
    pub shielded: bool,
}

impl Robot {
    /// Applies one damage instance. A raised shield halves it and is spent.
    pub fn damaged(&mut self, raw: f64) -> DamageOutcome {
        let shielded = self.defended;
        let applied = if shielded { raw / 2.0 } else { raw };
        self.defended = false;
        self.health = (self.health - applied).clamp(0.0, self.max_health);
        DamageOutcome { applied, shielded }
    }
}

pub fn is_alive(robot: &Robot) -> bool {
    robot.health > 0.0
}

/// Collects events only when announcing, so silent search plies never touch
/// the label reference counts.
struct Narration {
    enabled: bool,
    events: Vec<BattleEvent>,
}

impl Narration {
    fn push(&mut self, event: impl FnOnce() -> BattleEvent) {
        if self.enabled {
            self.events.push(event());
        }
    }
}

fn deal_damage(state: &mut CombatState, target: Side, raw: f64, narration: &mut Narration) {
    let robot = state.robot_mut(target);
    let outcome = robot.damaged(raw);
    if outcome.shielded {
        narration.push(|| BattleEvent::NotEffective {
            target: robot.name.clone(),
        });
    }
    narration.push(|| BattleEvent::Damage {
        target: robot.name.clone(),
        amount: outcome.applied,
    });
}

/// Resolves `action` taken by `actor` against `target`, mutating `state`.
///
/// Narration is collected only when `announce` is set; search nodes pass
/// `false` and get an empty vector back.
pub fn apply_action(
    state: &mut CombatState,
    actor: Side,
    action: Action,
    target: Side,
    announce: bool,
) -> Vec<BattleEvent> {
    let mut narration = Narration {
        enabled: announce,
        events: Vec::new(),
    };

    match action {
        Action::Pass => {
            narration.push(|| BattleEvent::Pass {
                actor: state.robot(actor).name.clone(),
            });
        }
        Action::Attack => {
            narration.push(|| BattleEvent::Attack {
                actor: state.robot(actor).name.clone(),
                target: state.robot(target).name.clone(),
            });
            let raw = state.robot(actor).melee_damage;
            deal_damage(state, target, raw, &mut narration);
        }
        Action::ShootPrimary | Action::ShootSecondary => {
            let Some(weapon) = weapon_for(state.robot(actor), action) else {
                return narration.events;
            };
            if !weapon.has_ammo() {
                narration.push(|| BattleEvent::NoAmmo {
                    actor: state.robot(actor).name.clone(),
                    weapon: weapon.name.clone(),
                });
                return narration.events;
            }
            let raw = weapon.damage;
            narration.push(|| BattleEvent::Shoot {
                actor: state.robot(actor).name.clone(),
                target: state.robot(target).name.clone(),
                weapon: weapon.name.clone(),
            });
            deal_damage(state, target, raw, &mut narration);
            if let Some(weapon) = weapon_for_mut(state.robot_mut(actor), action) {
                weapon.ammo -= 1;
            }
        }
        Action::Defend => {
            state.robot_mut(actor).defended = true;
            narration.push(|| BattleEvent::Defend {
                actor: state.robot(actor).name.clone(),
            });
        }
    }

    narration.events
}
