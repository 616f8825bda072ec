//! Fleet command parsing and execution
//!
//! One small command language drives the REPL and script files alike.
//! Names are single tokens; statuses accept the wire spelling in any
//! case (`IN_REPAIR`, `in-repair`, ...).

use std::collections::BTreeSet;

use anyhow::{bail, Context};

use fleet_domain::{FleetRegistry, Mission, MissionStatus, Rocket, RocketStatus};
use fleet_registry::InMemoryFleetRegistry;

pub const HELP: &str = "\
Commands:
  add-rocket <name>                    Register a rocket
  add-mission <name>                   Register a mission
  assign <rocket> <mission>            Assign one rocket to a mission
  assign-all <mission> <rocket>...     Assign a batch (all or nothing)
  rocket-status <rocket> <status>      ON_GROUND | IN_SPACE | IN_REPAIR
  mission-status <mission> <status>    SCHEDULED | PENDING | IN_PROGRESS | ENDED
  show <name>                          Show one rocket or mission
  summary                              Print the fleet report
  help                                 Show this help
  quit                                 Exit";

/// A single parsed fleet command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetCommand {
    AddRocket(String),
    AddMission(String),
    Assign { rocket: String, mission: String },
    AssignAll {
        mission: String,
        rockets: BTreeSet<String>,
    },
    RocketStatus {
        rocket: String,
        status: RocketStatus,
    },
    MissionStatus {
        mission: String,
        status: MissionStatus,
    },
    Show(String),
    Summary,
    Help,
    Quit,
}

/// Parse one input line into a command.
pub fn parse_line(line: &str) -> anyhow::Result<FleetCommand> {
    let mut parts = line.split_whitespace();
    let Some(keyword) = parts.next() else {
        bail!("empty command");
    };
    let rest: Vec<&str> = parts.collect();

    let command = match keyword {
        "add-rocket" => FleetCommand::AddRocket(one_arg(keyword, &rest)?),
        "add-mission" => FleetCommand::AddMission(one_arg(keyword, &rest)?),
        "assign" => {
            let (rocket, mission) = two_args(keyword, &rest)?;
            FleetCommand::Assign { rocket, mission }
        }
        "assign-all" => {
            let [mission, rockets @ ..] = rest.as_slice() else {
                bail!("usage: assign-all <mission> <rocket>...");
            };
            FleetCommand::AssignAll {
                mission: mission.to_string(),
                rockets: rockets.iter().map(|s| s.to_string()).collect(),
            }
        }
        "rocket-status" => {
            let (rocket, status) = two_args(keyword, &rest)?;
            FleetCommand::RocketStatus {
                rocket,
                status: status.parse()?,
            }
        }
        "mission-status" => {
            let (mission, status) = two_args(keyword, &rest)?;
            FleetCommand::MissionStatus {
                mission,
                status: status.parse()?,
            }
        }
        "show" => FleetCommand::Show(one_arg(keyword, &rest)?),
        "summary" => FleetCommand::Summary,
        "help" => FleetCommand::Help,
        "quit" | "exit" => FleetCommand::Quit,
        other => bail!("unknown command: {other} (try 'help')"),
    };
    Ok(command)
}

fn one_arg(keyword: &str, rest: &[&str]) -> anyhow::Result<String> {
    match rest {
        [arg] => Ok(arg.to_string()),
        _ => bail!("usage: {keyword} <name>"),
    }
}

fn two_args(keyword: &str, rest: &[&str]) -> anyhow::Result<(String, String)> {
    match rest {
        [a, b] => Ok((a.to_string(), b.to_string())),
        _ => bail!("usage: {keyword} <name> <value>"),
    }
}

/// Execute a command against the registry, returning printable output.
/// `Quit` is the caller's business and returns nothing here.
pub fn execute(
    registry: &InMemoryFleetRegistry,
    command: &FleetCommand,
    json: bool,
) -> anyhow::Result<String> {
    match command {
        FleetCommand::AddRocket(name) => {
            registry.add_rocket(Rocket::new(name.clone())?)?;
            Ok(format!("rocket '{name}' added"))
        }
        FleetCommand::AddMission(name) => {
            registry.add_mission(Mission::new(name.clone())?)?;
            Ok(format!("mission '{name}' added"))
        }
        FleetCommand::Assign { rocket, mission } => {
            registry.assign_rocket_to_mission(rocket, mission)?;
            Ok(format!("rocket '{rocket}' assigned to '{mission}'"))
        }
        FleetCommand::AssignAll { mission, rockets } => {
            registry.assign_rockets_to_mission(mission, rockets)?;
            Ok(format!(
                "{} rocket(s) assigned to '{mission}'",
                rockets.len()
            ))
        }
        FleetCommand::RocketStatus { rocket, status } => {
            registry.change_rocket_status(rocket, *status)?;
            Ok(format!("rocket '{rocket}' is now {status}"))
        }
        FleetCommand::MissionStatus { mission, status } => {
            registry.change_mission_status(mission, *status)?;
            Ok(format!("mission '{mission}' is now {status}"))
        }
        FleetCommand::Show(name) => show(registry, name, json),
        FleetCommand::Summary => Ok(registry.summary()),
        FleetCommand::Help => Ok(HELP.to_string()),
        FleetCommand::Quit => Ok(String::new()),
    }
}

fn show(registry: &InMemoryFleetRegistry, name: &str, json: bool) -> anyhow::Result<String> {
    if let Some(rocket) = registry.find_rocket(name) {
        if json {
            return serde_json::to_string_pretty(&rocket).context("serializing rocket");
        }
        return Ok(match rocket.mission() {
            Some(mission) => format!("rocket '{name}': {} (mission: {mission})", rocket.status()),
            None => format!("rocket '{name}': {} (unassigned)", rocket.status()),
        });
    }
    if let Some(mission) = registry.find_mission(name) {
        if json {
            return serde_json::to_string_pretty(&mission).context("serializing mission");
        }
        return Ok(format!(
            "mission '{name}': {} ({} rocket(s))",
            mission.status(),
            mission.rocket_count()
        ));
    }
    bail!("no rocket or mission named '{name}'");
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============== Parsing ==============

    #[test]
    fn test_parse_add_rocket() {
        assert_eq!(
            parse_line("add-rocket Falcon-9").unwrap(),
            FleetCommand::AddRocket("Falcon-9".to_string())
        );
    }

    #[test]
    fn test_parse_assign_all() {
        let cmd = parse_line("assign-all Mars R1 R2 R3").unwrap();
        match cmd {
            FleetCommand::AssignAll { mission, rockets } => {
                assert_eq!(mission, "Mars");
                assert_eq!(rockets.len(), 3);
                assert!(rockets.contains("R2"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_assign_all_empty_batch_is_valid() {
        let cmd = parse_line("assign-all Mars").unwrap();
        assert!(matches!(
            cmd,
            FleetCommand::AssignAll { ref rockets, .. } if rockets.is_empty()
        ));
    }

    #[test]
    fn test_parse_statuses() {
        assert_eq!(
            parse_line("rocket-status R1 in-repair").unwrap(),
            FleetCommand::RocketStatus {
                rocket: "R1".to_string(),
                status: RocketStatus::InRepair,
            }
        );
        assert_eq!(
            parse_line("mission-status Mars ENDED").unwrap(),
            FleetCommand::MissionStatus {
                mission: "Mars".to_string(),
                status: MissionStatus::Ended,
            }
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_line("").is_err());
        assert!(parse_line("launch-now R1").is_err());
        assert!(parse_line("add-rocket").is_err());
        assert!(parse_line("rocket-status R1 ORBITING").is_err());
    }

    #[test]
    fn test_parse_quit_aliases() {
        assert_eq!(parse_line("quit").unwrap(), FleetCommand::Quit);
        assert_eq!(parse_line("exit").unwrap(), FleetCommand::Quit);
    }

    // ============== Execution ==============

    fn run(registry: &InMemoryFleetRegistry, line: &str) -> anyhow::Result<String> {
        execute(registry, &parse_line(line)?, false)
    }

    #[test]
    fn test_execute_full_session() {
        let registry = InMemoryFleetRegistry::new();
        run(&registry, "add-rocket R1").unwrap();
        run(&registry, "add-rocket R2").unwrap();
        run(&registry, "add-mission Mars").unwrap();
        run(&registry, "assign-all Mars R1 R2").unwrap();
        run(&registry, "rocket-status R1 IN_REPAIR").unwrap();

        let summary = run(&registry, "summary").unwrap();
        assert!(summary.starts_with("• Mars - Pending - Dragons: 2"));
        assert!(summary.contains("o R1 - In repair"));
        assert!(summary.contains("o R2 - In space"));
    }

    #[test]
    fn test_execute_propagates_registry_errors() {
        let registry = InMemoryFleetRegistry::new();
        run(&registry, "add-mission Mars").unwrap();
        assert!(run(&registry, "assign Ghost Mars").is_err());
        assert!(run(&registry, "add-mission Mars").is_err());
    }

    #[test]
    fn test_show_plain_and_json() {
        let registry = InMemoryFleetRegistry::new();
        run(&registry, "add-rocket R1").unwrap();

        let plain = run(&registry, "show R1").unwrap();
        assert_eq!(plain, "rocket 'R1': On ground (unassigned)");

        let json = execute(&registry, &parse_line("show R1").unwrap(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "R1");
        assert_eq!(value["status"], "ON_GROUND");
        assert!(value["mission"].is_null());
    }

    #[test]
    fn test_show_unknown_name() {
        let registry = InMemoryFleetRegistry::new();
        assert!(run(&registry, "show Ghost").is_err());
    }
}
