use crate::ai::eval::evaluate_for;
use crate::core::actions::apply_action;
use crate::core::state::{Action, CombatState, Side};

/// One-ply lookahead: the action that leaves `side` with the best health
/// differential right now. Earlier actions win ties.
pub fn choose_greedy(state: &CombatState, side: Side) -> Action {
    let mut best_action = Action::Pass;
    let mut best_score = f64::NEG_INFINITY;
    for action in Action::ALL {
        let mut next = state.snapshot();
        apply_action(&mut next, side, action, side.opponent(), false);
        let score = evaluate_for(&next, side);
        if score > best_score {
            best_score = score;
            best_action = action;
        }
    }
    best_action
}
