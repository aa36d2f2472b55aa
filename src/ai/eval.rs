use crate::core::state::{CombatState, Side};

/// Health differential from side A's point of view. Side B minimizes it.
pub fn evaluate_state(state: &CombatState) -> f64 {
    state.robot(Side::A).health - state.robot(Side::B).health
}

/// The same differential seen by `side`, larger is better for it.
pub fn evaluate_for(state: &CombatState, side: Side) -> f64 {
    match side {
        Side::A => evaluate_state(state),
        Side::B => -evaluate_state(state),
    }
}
