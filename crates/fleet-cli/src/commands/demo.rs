//! fleet demo command

use clap::Args;
use tracing::info;

use fleet_domain::{FleetRegistry, Mission, MissionStatus, Rocket, RocketStatus};
use fleet_registry::InMemoryFleetRegistry;

/// Run a scripted scenario and print the resulting fleet report.
#[derive(Debug, Args)]
pub struct DemoCommand {}

impl DemoCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let registry = build_demo_fleet()?;
        print!("{}", registry.summary());
        Ok(())
    }
}

/// Exercise every registry operation once: bulk assignment, a repair
/// that flips a mission to Pending, and a terminated mission that
/// releases its rocket.
pub fn build_demo_fleet() -> anyhow::Result<InMemoryFleetRegistry> {
    let registry = InMemoryFleetRegistry::new();

    for name in ["Dragon-1", "Dragon-2", "Red-Dragon", "Falcon-Heavy"] {
        registry.add_rocket(Rocket::new(name)?)?;
    }
    for name in ["Mars", "Luna-1", "Vertical-Landing"] {
        registry.add_mission(Mission::new(name)?)?;
    }

    info!("assigning the Mars fleet");
    registry.assign_rockets_to_mission(
        "Mars",
        &["Dragon-1", "Dragon-2", "Red-Dragon"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    )?;
    registry.change_rocket_status("Red-Dragon", RocketStatus::InRepair)?;

    info!("flying and ending Luna-1");
    registry.assign_rocket_to_mission("Falcon-Heavy", "Luna-1")?;
    registry.change_mission_status("Luna-1", MissionStatus::Ended)?;

    Ok(registry)
}
