use inquire::validator::Validation;
use inquire::{CustomType, Select, Text};
use robot_arena::core::battle::{BattleResult, Controller, TurnReport};
use robot_arena::core::state::{Action, Side};
use robot_arena::data::robots::RobotSpec;
use robot_arena::data::roster::Roster;
use robot_arena::data::weapons::WeaponSpec;
use robot_arena::{BattleEngine, BattleOptions};

const START: &str = "Start Game";
const ADD_ROBOT: &str = "Add Robot";
const ADD_WEAPON: &str = "Add Weapon";
const QUIT: &str = "Quit";

fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = match BattleOptions::from_env() {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{err}, using defaults");
            BattleOptions::default()
        }
    };

    let mut roster = match load_roster() {
        Ok(roster) => roster,
        Err(err) => {
            eprintln!("Failed to load roster: {err}");
            std::process::exit(1);
        }
    };

    loop {
        println!("Welcome to Battle of robots!");
        let selection = Select::new("Choose your option:", vec![START, ADD_ROBOT, ADD_WEAPON, QUIT])
            .prompt()
            .unwrap_or(QUIT);

        match selection {
            START => start_game(&roster, options),
            ADD_ROBOT => add_robot(&mut roster),
            ADD_WEAPON => add_weapon(&mut roster),
            _ => break,
        }
    }
}

/// `--roster <path>` loads a JSON or YAML roster, otherwise the stock pack.
fn load_roster() -> Result<Roster, robot_arena::RosterError> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--roster" {
            if let Some(path) = args.next() {
                return Roster::load_from_path(path);
            }
        }
    }
    Roster::default_pack()
}

fn pick_index(prompt: &str, options: Vec<String>) -> Option<usize> {
    Select::new(prompt, options).raw_prompt().ok().map(|choice| choice.index)
}

fn weapon_names(roster: &Roster) -> Vec<String> {
    roster.weapons().iter().map(|w| w.name.clone()).collect()
}

fn add_weapon(roster: &mut Roster) {
    let Ok(name) = Text::new("Type the weapon's name:").prompt() else {
        return;
    };
    let Ok(damage) = CustomType::<f64>::new("Type the weapon's damage:")
        .with_error_message("Invalid input, please try again")
        .prompt()
    else {
        return;
    };
    let Ok(ammo) = CustomType::<u32>::new("Type the weapon's ammo cap:")
        .with_error_message("Invalid input, please try again")
        .prompt()
    else {
        return;
    };
    if let Err(err) = roster.add_weapon(WeaponSpec { name, damage, ammo }) {
        eprintln!("{err}");
    }
}

fn add_robot(roster: &mut Roster) {
    if roster.weapons().is_empty() {
        println!("Add a weapon first.");
        return;
    }
    let Ok(name) = Text::new("Type the robot's name:").prompt() else {
        return;
    };
    let Ok(max_health) = CustomType::<f64>::new("Type the robot's max health:")
        .with_error_message("Invalid input, please try again")
        .with_validator(|value: &f64| {
            if value.is_finite() && *value > 0.0 {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid("Max health must be positive".into()))
            }
        })
        .prompt()
    else {
        return;
    };
    let Ok(melee_damage) = CustomType::<f64>::new("Type the robot's melee damage:")
        .with_error_message("Invalid input, please try again")
        .prompt()
    else {
        return;
    };
    let Some(primary) = pick_index("Select the robot's primary:", weapon_names(roster)) else {
        return;
    };
    let Some(secondary) = pick_index("Select the robot's secondary:", weapon_names(roster)) else {
        return;
    };
    let spec = RobotSpec {
        name,
        max_health,
        melee_damage,
        primary,
        secondary,
    };
    if let Err(err) = roster.add_robot(spec) {
        eprintln!("{err}");
    }
}

fn pick_controller(side: Side) -> Controller {
    let options = vec!["Minimax", "Greedy", "Manual"];
    match Select::new(&format!("Who controls side {:?}?", side), options).prompt() {
        Ok("Greedy") => Controller::Greedy,
        Ok("Manual") => Controller::Manual,
        _ => Controller::Minimax,
    }
}

fn start_game(roster: &Roster, options: BattleOptions) {
    let names: Vec<String> = roster.robots().iter().map(|r| r.name.clone()).collect();
    if names.len() < 2 {
        println!("At least two robots are needed for a battle.");
        return;
    }
    println!("Choose robots for the battle:");
    let Some(first) = pick_index("Select the first robot:", names.clone()) else {
        return;
    };
    let state = loop {
        let Some(second) = pick_index("Select the second robot:", names.clone()) else {
            return;
        };
        match roster.matchup(first, second) {
            Ok(state) => break state,
            Err(err) => println!("Invalid input, please try again ({err})"),
        }
    };

    let engine = BattleEngine::new(options)
        .with_controller(Side::A, pick_controller(Side::A))
        .with_controller(Side::B, pick_controller(Side::B));
    let mut battle = engine.battle(state);

    while !battle.is_over() {
        let side = battle.active_side();
        let report = if battle.controller(side) == Controller::Manual {
            let name = battle.state().robot(side).name.to_string();
            let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
            let Ok(choice) = Select::new(&format!("What should {name} do?"), labels).raw_prompt() else {
                return;
            };
            battle.play(Action::ALL[choice.index])
        } else {
            battle.step()
        };
        match report {
            Ok(report) => print_turn(&report),
            Err(err) => {
                eprintln!("{err}");
                return;
            }
        }
    }

    match battle.phase() {
        robot_arena::BattlePhase::Concluded(BattleResult::Winner(side)) => {
            println!("{} won!!!", battle.state().robot(side).name);
        }
        _ => println!("Nobody could win this battle."),
    }
}

fn print_turn(report: &TurnReport) {
    for event in &report.events {
        println!("{event}");
    }
    for health in &report.health {
        println!("{health}");
    }
    println!("\n\n");
}
