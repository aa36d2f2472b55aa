use robot_arena::config::BattleOptions;
use robot_arena::core::battle::{decide_winner, Battle, BattleEngine, BattlePhase, BattleResult, Controller};
use robot_arena::core::replay::replay_battle;
use robot_arena::core::state::{create_combat_state, Action, CombatState, Robot, Side, Weapon};
use robot_arena::data::roster::Roster;
use robot_arena::error::BattleError;

fn unarmed(name: &str, health: f64, melee: f64) -> Robot {
    Robot::new(name, health, melee, Weapon::unarmed(), Weapon::unarmed())
}

fn shallow(depth: usize) -> BattleOptions {
    BattleOptions {
        depth,
        ..BattleOptions::default()
    }
}

fn one_hit_state() -> CombatState {
    create_combat_state(unarmed("X", 100.0, 10.0), unarmed("Y", 1.0, 0.0))
}

#[test]
fn finishing_blow_ends_battle_in_one_turn() {
    let outcome = BattleEngine::default().run(one_hit_state()).expect("battle runs");

    assert_eq!(outcome.result, BattleResult::Winner(Side::A));
    assert_eq!(outcome.turns.len(), 1);
    let turn = &outcome.turns[0];
    assert_eq!(turn.side, Side::A);
    assert_eq!(turn.action, Action::Attack);
    assert_eq!(turn.score, Some(100.0));
    let lines: Vec<String> = turn.events.iter().map(|e| e.to_string()).collect();
    assert_eq!(lines, vec!["X attacked Y using their fists!", "Y got hit by 10.00 damage!"]);
    assert_eq!(turn.health[0].to_string(), "X's HP = 100.00/100.00");
    assert_eq!(turn.health[1].to_string(), "Y's HP = 0.00/1.00");
    assert_eq!(outcome.final_state.robot(Side::B).health, 0.0);
}

#[test]
fn stock_matchup_plays_to_a_winner() {
    let roster = Roster::default_pack().expect("default roster");
    let state = roster.matchup(1, 2).expect("soldier vs sniper");
    let outcome = BattleEngine::new(shallow(6)).run(state.clone()).expect("battle runs");

    let winner = outcome.winner().expect("someone wins");
    let loser = winner.opponent();
    assert_eq!(outcome.final_state.robot(loser).health, 0.0);
    assert!(outcome.final_state.robot(winner).health > 0.0);

    for (i, turn) in outcome.turns.iter().enumerate() {
        assert_eq!(turn.turn as usize, i + 1);
        let expected = if i % 2 == 0 { Side::A } else { Side::B };
        assert_eq!(turn.side, expected);
        for report in &turn.health {
            assert!(report.health >= 0.0 && report.health <= report.max_health);
        }
    }

    assert_eq!(replay_battle(&state, &outcome.turns), outcome.final_state);
}

#[test]
fn run_with_reports_every_turn() {
    let roster = Roster::default_pack().expect("default roster");
    let state = roster.matchup(0, 2).expect("melee vs sniper");
    let mut seen = 0;
    let outcome = BattleEngine::new(shallow(4))
        .run_with(state, |_| seen += 1)
        .expect("battle runs");
    assert_eq!(seen, outcome.turns.len());
    assert!(outcome.winner().is_some());
}

#[test]
fn greedy_controller_battles_minimax() {
    let roster = Roster::default_pack().expect("default roster");
    let state = roster.matchup(0, 1).expect("melee vs soldier");
    let outcome = BattleEngine::new(shallow(4))
        .with_controller(Side::B, Controller::Greedy)
        .run(state)
        .expect("battle runs");
    assert!(outcome.winner().is_some());
    assert!(outcome.turns.iter().filter(|t| t.side == Side::B).all(|t| t.score.is_none()));
    assert!(outcome.turns.iter().filter(|t| t.side == Side::A).all(|t| t.score.is_some()));
}

#[test]
fn harmless_robots_reach_stalemate() {
    let state = create_combat_state(unarmed("Idle", 50.0, 0.0), unarmed("Still", 50.0, 0.0));
    let options = BattleOptions { depth: 2, max_turns: 6 };
    let outcome = BattleEngine::new(options).run(state).expect("battle runs");
    assert_eq!(outcome.result, BattleResult::Stalemate);
    assert_eq!(outcome.turns.len(), 6);
    assert_eq!(outcome.winner(), None);
}

#[test]
fn double_knockout_goes_to_side_b() {
    let state = create_combat_state(unarmed("A", 10.0, 1.0).with_health(0.0), unarmed("B", 10.0, 1.0).with_health(0.0));
    assert_eq!(decide_winner(&state), Some(Side::B));

    let mut battle = Battle::new(state, BattleOptions::default());
    assert_eq!(battle.phase(), BattlePhase::Concluded(BattleResult::Winner(Side::B)));
    assert_eq!(battle.step(), Err(BattleError::Concluded));
}

#[test]
fn live_battle_has_no_winner() {
    assert_eq!(decide_winner(&one_hit_state()), None);
}

#[test]
fn manual_side_takes_actions_from_caller() {
    let state = create_combat_state(unarmed("Human", 30.0, 10.0), unarmed("Bot", 30.0, 10.0));
    let mut battle = Battle::new(state, shallow(3)).with_controller(Side::A, Controller::Manual);

    assert_eq!(battle.decide(), None);
    assert_eq!(battle.step(), Err(BattleError::ManualControl(Side::A)));

    let report = battle.play(Action::Defend).expect("manual turn");
    assert_eq!(report.side, Side::A);
    assert_eq!(report.score, None);
    assert!(battle.state().robot(Side::A).defended);
    assert_eq!(battle.active_side(), Side::B);

    let report = battle.step().expect("bot turn");
    assert_eq!(report.side, Side::B);
    assert_eq!(report.action, Action::Attack);
    assert_eq!(battle.state().robot(Side::A).health, 25.0);
    assert_eq!(battle.turn(), 2);
    assert_eq!(battle.active_side(), Side::A);
}

#[test]
fn concluded_battle_rejects_moves() {
    let mut battle = BattleEngine::default().battle(one_hit_state());
    battle.step().expect("first turn");
    assert!(battle.is_over());
    assert_eq!(battle.play(Action::Pass), Err(BattleError::Concluded));
}
