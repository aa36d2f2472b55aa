use crate::core::actions::apply_action;
use crate::core::battle::TurnReport;
use crate::core::state::CombatState;

/// Silently re-applies recorded turns to the state the battle started from.
pub fn replay_battle(initial_state: &CombatState, turns: &[TurnReport]) -> CombatState {
    let mut next = initial_state.snapshot();
    for turn in turns {
        apply_action(&mut next, turn.side, turn.action, turn.side.opponent(), false);
    }
    next
}
