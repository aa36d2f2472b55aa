use robot_arena::core::actions::apply_action;
use robot_arena::core::factory::create_robot;
use robot_arena::core::state::{Action, Side};
use robot_arena::data::robots::RobotSpec;
use robot_arena::data::roster::Roster;
use robot_arena::data::weapons::WeaponSpec;
use robot_arena::error::RosterError;

fn robot(name: &str, primary: usize, secondary: usize) -> RobotSpec {
    RobotSpec {
        name: name.to_string(),
        max_health: 50.0,
        melee_damage: 5.0,
        primary,
        secondary,
    }
}

#[test]
fn default_pack_has_stock_robots() {
    let roster = Roster::default_pack().expect("default roster");
    let names: Vec<&str> = roster.robots().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["RobotMelee", "RobotSoldier", "RobotSniper"]);
    assert_eq!(roster.weapons().len(), 4);
    let sniper = roster.weapons().get(3).expect("sniper");
    assert_eq!(sniper.name, "Sniper");
    assert_eq!(sniper.damage, 70.0);
    assert_eq!(sniper.ammo, 1);
}

#[test]
fn matchup_builds_fresh_robots() {
    let roster = Roster::default_pack().expect("default roster");
    let state = roster.matchup(1, 0).expect("soldier vs melee");
    let soldier = state.robot(Side::A);
    assert_eq!(&*soldier.name, "RobotSoldier");
    assert_eq!(soldier.health, 80.0);
    assert_eq!(&*soldier.primary.name, "AK47");
    assert_eq!(soldier.primary.ammo, 3);
    assert_eq!(&*soldier.secondary.name, "RPG");
    assert!(!soldier.defended);
    assert_eq!(&*state.robot(Side::B).name, "RobotMelee");
}

#[test]
fn every_battle_starts_with_full_ammo() {
    let roster = Roster::default_pack().expect("default roster");
    let mut state = roster.matchup(1, 2).expect("soldier vs sniper");
    apply_action(&mut state, Side::A, Action::ShootSecondary, Side::B, false);
    assert_eq!(state.robot(Side::A).secondary.ammo, 0);

    let rematch = roster.matchup(1, 2).expect("rematch");
    assert_eq!(rematch.robot(Side::A).secondary.ammo, 1);
    assert_eq!(roster.weapons().get(2).map(|w| w.ammo), Some(1));
}

#[test]
fn matchup_rejects_bad_picks() {
    let roster = Roster::default_pack().expect("default roster");
    assert!(matches!(roster.matchup(1, 1), Err(RosterError::SameRobot(1))));
    assert!(matches!(
        roster.matchup(0, 7),
        Err(RosterError::UnknownRobot { index: 7, len: 3 })
    ));
}

#[test]
fn add_robot_validates_weapon_indices() {
    let mut roster = Roster::default_pack().expect("default roster");
    let err = roster.add_robot(robot("Broken", 0, 9)).expect_err("unknown weapon");
    assert!(matches!(err, RosterError::UnknownWeapon { index: 9, len: 4 }));
    assert_eq!(roster.robots().len(), 3);

    let index = roster.add_robot(robot("Fresh", 1, 1)).expect("valid robot");
    assert_eq!(index, 3);
    assert!(roster.matchup(3, 0).is_ok());
}

#[test]
fn add_robot_rejects_non_positive_health() {
    let mut roster = Roster::default_pack().expect("default roster");
    let mut spec = robot("Ghost", 0, 0);
    spec.max_health = 0.0;
    let err = roster.add_robot(spec).expect_err("zero health");
    assert!(err.to_string().contains("max health must be a positive number"));
}

#[test]
fn added_weapon_can_be_equipped() {
    let mut roster = Roster::new();
    let laser = roster
        .add_weapon(WeaponSpec {
            name: "Laser".to_string(),
            damage: 12.5,
            ammo: 4,
        })
        .expect("weapon");
    roster.add_robot(robot("Left", laser, laser)).expect("left");
    roster.add_robot(robot("Right", laser, laser)).expect("right");

    let mut state = roster.matchup(0, 1).expect("matchup");
    apply_action(&mut state, Side::A, Action::ShootPrimary, Side::B, false);
    assert_eq!(state.robot(Side::A).primary.ammo, 3);
    assert_eq!(state.robot(Side::A).secondary.ammo, 4);
    assert_eq!(state.robot(Side::B).primary.ammo, 4);
    assert_eq!(state.robot(Side::B).health, 37.5);
}

#[test]
fn add_weapon_rejects_non_finite_damage() {
    let mut roster = Roster::new();
    let err = roster
        .add_weapon(WeaponSpec {
            name: "Glitch".to_string(),
            damage: f64::NAN,
            ammo: 1,
        })
        .expect_err("nan damage");
    assert!(matches!(err, RosterError::InvalidStat { .. }));
}

#[test]
fn create_robot_reports_missing_weapon() {
    let roster = Roster::new();
    let err = create_robot(&robot("Lonely", 0, 0), roster.weapons()).expect_err("empty catalog");
    assert!(matches!(err, RosterError::UnknownWeapon { index: 0, len: 0 }));
}

#[test]
fn yaml_roster_loads() {
    let yaml = r#"
weapons:
  - name: Fists
    damage: 0
    ammo: 0
  - name: Cannon
    damage: 55
    ammo: 2
robots:
  - name: Tank
    max_health: 150
    melee_damage: 8
    primary: 1
    secondary: 0
  - name: Scout
    max_health: 70
    melee_damage: 12
    primary: 0
    secondary: 0
"#;
    let roster = Roster::load_from_yaml_str(yaml).expect("yaml roster");
    let state = roster.matchup(0, 1).expect("tank vs scout");
    assert_eq!(state.robot(Side::A).max_health, 150.0);
    assert_eq!(state.robot(Side::A).primary.damage, 55.0);
}

#[test]
fn json_roster_with_dangling_index_is_rejected() {
    let json = r#"{
        "weapons": [{ "name": "Stick", "damage": 3.0, "ammo": 0 }],
        "robots": [{ "name": "Lost", "max_health": 10.0, "melee_damage": 1.0, "primary": 0, "secondary": 2 }]
    }"#;
    let err = Roster::load_from_json_str(json).expect_err("dangling weapon");
    assert!(matches!(err, RosterError::UnknownWeapon { index: 2, len: 1 }));

    let err = Roster::load_from_json_str("{ not json").expect_err("malformed");
    assert!(matches!(err, RosterError::Json(_)));
}
