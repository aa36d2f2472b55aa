use crate::ai::{choose_action, choose_greedy};
use crate::config::BattleOptions;
use crate::core::actions::{apply_action, is_alive};
use crate::core::events::{BattleEvent, HealthReport};
use crate::core::state::{Action, CombatState, Side};
use crate::error::BattleError;
use serde::{Deserialize, Serialize};

/// Who picks the actions for one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Controller {
    #[default]
    Minimax,
    Greedy,
    /// Actions come from outside through [`Battle::play`].
    Manual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleResult {
    Winner(Side),
    Stalemate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    InProgress,
    Concluded(BattleResult),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    pub turn: u32,
    pub side: Side,
    pub action: Action,
    /// Search score behind the action, when a minimax controller chose it.
    pub score: Option<f64>,
    pub events: Vec<BattleEvent>,
    pub health: [HealthReport; 2],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decision {
    pub action: Action,
    pub score: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub result: BattleResult,
    pub turns: Vec<TurnReport>,
    pub final_state: CombatState,
}

impl BattleOutcome {
    pub fn winner(&self) -> Option<Side> {
        match self.result {
            BattleResult::Winner(side) => Some(side),
            BattleResult::Stalemate => None,
        }
    }
}

/// Winner of a finished battle. Side A's defeat is checked first, so when
/// both robots are down side B takes the win.
pub fn decide_winner(state: &CombatState) -> Option<Side> {
    if !is_alive(state.robot(Side::A)) {
        Some(Side::B)
    } else if !is_alive(state.robot(Side::B)) {
        Some(Side::A)
    } else {
        None
    }
}

/// A live battle: the real combat state plus whose turn it is.
#[derive(Clone, Debug)]
pub struct Battle {
    state: CombatState,
    active: Side,
    phase: BattlePhase,
    turn: u32,
    controllers: [Controller; 2],
    options: BattleOptions,
}

impl Battle {
    pub fn new(state: CombatState, options: BattleOptions) -> Self {
        let mut battle = Self {
            state,
            active: Side::A,
            phase: BattlePhase::InProgress,
            turn: 0,
            controllers: [Controller::Minimax; 2],
            options,
        };
        battle.check_conclusion();
        battle
    }

    pub fn with_controller(mut self, side: Side, controller: Controller) -> Self {
        self.controllers[side.index()] = controller;
        self
    }

    pub fn state(&self) -> &CombatState {
        &self.state
    }

    pub fn active_side(&self) -> Side {
        self.active
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn controller(&self, side: Side) -> Controller {
        self.controllers[side.index()]
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, BattlePhase::Concluded(_))
    }

    /// Asks the active side's controller for its action. Manual sides have
    /// nothing to decide and yield `None`.
    pub fn decide(&self) -> Option<Decision> {
        match self.controller(self.active) {
            Controller::Minimax => {
                let result = choose_action(&self.state, self.options.depth, self.active == Side::A);
                Some(Decision {
                    action: result.action,
                    score: Some(result.score),
                })
            }
            Controller::Greedy => Some(Decision {
                action: choose_greedy(&self.state, self.active),
                score: None,
            }),
            Controller::Manual => None,
        }
    }

    /// Applies `action` for the active side to the real state with narration.
    pub fn play(&mut self, action: Action) -> Result<TurnReport, BattleError> {
        self.play_scored(action, None)
    }

    fn play_scored(&mut self, action: Action, score: Option<f64>) -> Result<TurnReport, BattleError> {
        if self.is_over() {
            return Err(BattleError::Concluded);
        }
        let side = self.active;
        let events = apply_action(&mut self.state, side, action, side.opponent(), true);
        self.turn += 1;
        let report = TurnReport {
            turn: self.turn,
            side,
            action,
            score,
            events,
            health: [
                HealthReport::of(Side::A, self.state.robot(Side::A)),
                HealthReport::of(Side::B, self.state.robot(Side::B)),
            ],
        };
        tracing::debug!("turn {}: {:?} played {:?}", self.turn, side, action);
        self.active = side.opponent();
        self.check_conclusion();
        Ok(report)
    }

    /// Decides and plays one turn.
    pub fn step(&mut self) -> Result<TurnReport, BattleError> {
        if self.is_over() {
            return Err(BattleError::Concluded);
        }
        let decision = self.decide().ok_or(BattleError::ManualControl(self.active))?;
        self.play_scored(decision.action, decision.score)
    }

    fn check_conclusion(&mut self) {
        if let Some(winner) = decide_winner(&self.state) {
            tracing::info!("{} won after {} turns", self.state.robot(winner).name, self.turn);
            self.phase = BattlePhase::Concluded(BattleResult::Winner(winner));
        } else if self.turn >= self.options.max_turns {
            tracing::warn!("no robot went down within {} turns, calling a stalemate", self.options.max_turns);
            self.phase = BattlePhase::Concluded(BattleResult::Stalemate);
        }
    }

    pub fn into_state(self) -> CombatState {
        self.state
    }
}

/// Runs battles where every side is computer controlled.
#[derive(Clone, Debug, Default)]
pub struct BattleEngine {
    pub options: BattleOptions,
    pub controllers: [Controller; 2],
}

impl BattleEngine {
    pub fn new(options: BattleOptions) -> Self {
        Self {
            options,
            controllers: [Controller::Minimax; 2],
        }
    }

    pub fn with_controller(mut self, side: Side, controller: Controller) -> Self {
        self.controllers[side.index()] = controller;
        self
    }

    pub fn battle(&self, state: CombatState) -> Battle {
        Battle::new(state, self.options)
            .with_controller(Side::A, self.controllers[0])
            .with_controller(Side::B, self.controllers[1])
    }

    /// Plays `state` out to the end, calling `on_turn` after every turn.
    pub fn run_with(
        &self,
        state: CombatState,
        mut on_turn: impl FnMut(&TurnReport),
    ) -> Result<BattleOutcome, BattleError> {
        let mut battle = self.battle(state);
        let mut turns = Vec::new();
        while !battle.is_over() {
            let report = battle.step()?;
            on_turn(&report);
            turns.push(report);
        }
        let result = match battle.phase() {
            BattlePhase::Concluded(result) => result,
            BattlePhase::InProgress => BattleResult::Stalemate,
        };
        Ok(BattleOutcome {
            result,
            turns,
            final_state: battle.into_state(),
        })
    }

    pub fn run(&self, state: CombatState) -> Result<BattleOutcome, BattleError> {
        self.run_with(state, |_| {})
    }
}
