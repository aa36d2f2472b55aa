use crate::ai::eval::evaluate_state;
use crate::core::actions::{apply_action, is_alive};
use crate::core::state::{Action, CombatState, Side};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub action: Action,
    /// Minimax value of `action`: side A's health minus side B's.
    pub score: f64,
    pub stats: SearchStats,
}

/// Value of a line. Health differential first; on an exact tie a decided
/// line is ranked by how many plies were left when a robot went down, signed
/// so the side ahead wants it sooner and the side behind wants it later.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Score {
    value: f64,
    tempo: i64,
}

impl Score {
    const WORST: Score = Score {
        value: f64::NEG_INFINITY,
        tempo: 0,
    };
    const BEST: Score = Score {
        value: f64::INFINITY,
        tempo: 0,
    };

    fn leaf(state: &CombatState, remaining: usize) -> Score {
        let value = evaluate_state(state);
        let decided = !is_alive(state.robot(Side::A)) || !is_alive(state.robot(Side::B));
        let tempo = if decided && value != 0.0 {
            value.signum() as i64 * remaining as i64
        } else {
            0
        };
        Score { value, tempo }
    }

    fn compare(&self, other: &Score) -> Ordering {
        self.value
            .partial_cmp(&other.value)
            .unwrap_or(Ordering::Equal)
            .then(self.tempo.cmp(&other.tempo))
    }
}

struct Search {
    prune: bool,
    stats: SearchStats,
}

impl Search {
    fn run(&mut self, state: &CombatState, depth: usize, mut alpha: Score, mut beta: Score, side: Side) -> (Action, Score) {
        self.stats.nodes += 1;
        if depth == 0 || !is_alive(state.robot(Side::A)) || !is_alive(state.robot(Side::B)) {
            return (Action::Pass, Score::leaf(state, depth));
        }

        let maximizing = side == Side::A;
        let mut best_action = Action::Pass;
        let mut best = if maximizing { Score::WORST } else { Score::BEST };

        for action in Action::ALL {
            let mut child = state.snapshot();
            apply_action(&mut child, side, action, side.opponent(), false);
            let (_, score) = self.run(&child, depth - 1, alpha, beta, side.opponent());

            if maximizing {
                if score.compare(&best) == Ordering::Greater {
                    best = score;
                    best_action = action;
                }
                if best.compare(&alpha) == Ordering::Greater {
                    alpha = best;
                }
            } else {
                if score.compare(&best) == Ordering::Less {
                    best = score;
                    best_action = action;
                }
                if best.compare(&beta) == Ordering::Less {
                    beta = best;
                }
            }

            if self.prune && beta.compare(&alpha) != Ordering::Greater {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best_action, best)
    }
}

fn search(state: &CombatState, depth: usize, side_a_maximizing: bool, prune: bool) -> SearchResult {
    let side = if side_a_maximizing { Side::A } else { Side::B };
    let mut search = Search {
        prune,
        stats: SearchStats::default(),
    };
    let (action, score) = search.run(state, depth, Score::WORST, Score::BEST, side);
    tracing::debug!(
        "minimax for {:?} at depth {}: {:?} scores {:.2} ({} nodes, {} cutoffs)",
        side,
        depth,
        action,
        score.value,
        search.stats.nodes,
        search.stats.cutoffs
    );
    SearchResult {
        action,
        score: score.value,
        stats: search.stats,
    }
}

/// Best action for the side to move, searching `depth` plies with
/// alpha-beta pruning. Side A maximizes the health differential, side B
/// minimizes it. A finished battle yields `Pass` with its current score.
pub fn choose_action(state: &CombatState, depth: usize, side_a_maximizing: bool) -> SearchResult {
    search(state, depth, side_a_maximizing, true)
}

/// Same search without cutoffs. Visits every node; only useful for checking
/// the pruned search on shallow trees.
pub fn choose_action_unpruned(state: &CombatState, depth: usize, side_a_maximizing: bool) -> SearchResult {
    search(state, depth, side_a_maximizing, false)
}
