//! fleet run command - execute a script of fleet commands

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use fleet_registry::InMemoryFleetRegistry;

use crate::exec::{self, FleetCommand};

/// Execute fleet commands from a file, one per line.
///
/// Blank lines and lines starting with `#` are skipped. Execution stops
/// at the first failing command or at an explicit `quit`.
#[derive(Debug, Args)]
pub struct RunCommand {
    /// Script file to execute
    pub file: PathBuf,
}

impl RunCommand {
    pub fn run(&self, json: bool) -> anyhow::Result<()> {
        let script = std::fs::read_to_string(&self.file)
            .with_context(|| format!("reading script {}", self.file.display()))?;

        let registry = InMemoryFleetRegistry::new();
        for output in run_script(&registry, &script, json)? {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Ok(())
    }
}

/// Run every command in `script` against `registry`, collecting outputs.
pub fn run_script(
    registry: &InMemoryFleetRegistry,
    script: &str,
    json: bool,
) -> anyhow::Result<Vec<String>> {
    let mut outputs = Vec::new();
    for (idx, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let command =
            exec::parse_line(line).with_context(|| format!("line {}: {line}", idx + 1))?;
        if command == FleetCommand::Quit {
            break;
        }
        let output = exec::execute(registry, &command, json)
            .with_context(|| format!("line {}: {line}", idx + 1))?;
        outputs.push(output);
    }
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_domain::{FleetRegistry, MissionStatus};

    #[test]
    fn test_run_script() {
        let registry = InMemoryFleetRegistry::new();
        let script = "\
# seed the fleet
add-rocket R1
add-rocket R2
add-mission Mars

assign-all Mars R1 R2
summary
";
        let outputs = run_script(&registry, script, false).unwrap();
        assert_eq!(outputs.len(), 5);
        assert!(outputs[4].starts_with("• Mars - In progress - Dragons: 2"));
    }

    #[test]
    fn test_run_script_stops_at_quit() {
        let registry = InMemoryFleetRegistry::new();
        let script = "add-mission Mars\nquit\nadd-mission Venus\n";
        run_script(&registry, script, false).unwrap();
        assert!(registry.find_mission("Mars").is_some());
        assert!(registry.find_mission("Venus").is_none());
    }

    #[test]
    fn test_run_script_reports_failing_line() {
        let registry = InMemoryFleetRegistry::new();
        let script = "add-mission Mars\nassign Ghost Mars\n";
        let err = run_script(&registry, script, false).unwrap_err();
        assert!(err.to_string().contains("line 2"));
        // Registry keeps the state from before the failing line
        assert_eq!(
            registry.find_mission("Mars").unwrap().status(),
            MissionStatus::Scheduled
        );
    }
}
