//! In-Memory Fleet Registry
//!
//! One registry owns both name-keyed maps. All state lives behind a
//! single `parking_lot::Mutex`, so every trait method is one critical
//! section: cross-entity links (rocket.mission vs mission.rockets) are
//! never observable in a half-updated state, and a failed operation
//! leaves the registry exactly as it was.

use std::collections::{BTreeSet, HashMap};
use std::fmt::Write as _;

use parking_lot::Mutex;
use tracing::debug;

use fleet_domain::error::EntityKind;
use fleet_domain::{FleetError, FleetRegistry, Mission, MissionStatus, Rocket, RocketStatus};

#[derive(Debug, Default)]
struct RegistryState {
    rockets: HashMap<String, Rocket>,
    missions: HashMap<String, Mission>,
}

impl RegistryState {
    fn any_in_repair(&self, mission: &Mission) -> bool {
        mission.rockets().iter().any(|name| {
            self.rockets
                .get(name)
                .is_some_and(|r| r.status() == RocketStatus::InRepair)
        })
    }

    /// Derive a mission's status from its assigned rockets.
    ///
    /// Empty set means Scheduled, any rocket in repair means Pending,
    /// otherwise In progress. Ended missions are left alone.
    fn reconcile(&mut self, mission_name: &str) -> Result<(), FleetError> {
        let Some(mission) = self.missions.get(mission_name) else {
            return Ok(());
        };
        if mission.status() == MissionStatus::Ended {
            return Ok(());
        }
        let next = if mission.rockets().is_empty() {
            MissionStatus::Scheduled
        } else if self.any_in_repair(mission) {
            MissionStatus::Pending
        } else {
            MissionStatus::InProgress
        };
        if mission.status() != next {
            debug!(mission = mission_name, status = %next, "mission status reconciled");
            if let Some(mission) = self.missions.get_mut(mission_name) {
                mission.set_status(next)?;
            }
        }
        Ok(())
    }

    /// Link one resolved rocket/mission pair through the entity guards.
    ///
    /// The terminal-mission check runs before the rocket link is written,
    /// so a rejected call leaves both entities untouched.
    fn assign_one(&mut self, rocket_name: &str, mission_name: &str) -> Result<(), FleetError> {
        let mission = self
            .missions
            .get_mut(mission_name)
            .ok_or_else(|| FleetError::mission_not_found(mission_name))?;
        let rocket = self
            .rockets
            .get_mut(rocket_name)
            .ok_or_else(|| FleetError::rocket_not_found(rocket_name))?;
        mission.ensure_active()?;
        rocket.assign_to_mission(mission_name)?;
        mission.assign_rocket(rocket_name)?;
        Ok(())
    }

    /// Guard table for explicit status changes to non-terminal targets.
    ///
    /// Stricter than reconciliation on purpose: every target demands a
    /// matching fleet, including non-emptiness for Pending, which the
    /// auto path gets for free (an empty set cannot contain a rocket in
    /// repair).
    fn validate_manual_transition(
        &self,
        mission: &Mission,
        target: MissionStatus,
    ) -> Result<(), FleetError> {
        match target {
            MissionStatus::Scheduled => {
                if !mission.rockets().is_empty() {
                    return Err(FleetError::InvalidState(format!(
                        "cannot revert mission '{}' to SCHEDULED while rockets are assigned",
                        mission.name()
                    )));
                }
                Ok(())
            }
            MissionStatus::Pending => {
                if mission.rockets().is_empty() || !self.any_in_repair(mission) {
                    return Err(FleetError::InvalidState(format!(
                        "mission '{}' can only be PENDING with at least one assigned rocket in repair",
                        mission.name()
                    )));
                }
                Ok(())
            }
            MissionStatus::InProgress => {
                if mission.rockets().is_empty() {
                    return Err(FleetError::InvalidState(format!(
                        "mission '{}' cannot be IN_PROGRESS with no rockets assigned",
                        mission.name()
                    )));
                }
                if self.any_in_repair(mission) {
                    return Err(FleetError::InvalidState(format!(
                        "mission '{}' cannot be IN_PROGRESS while a rocket is in repair",
                        mission.name()
                    )));
                }
                Ok(())
            }
            // Ended is intercepted by the termination path; anything that
            // still lands here is not a manual target.
            MissionStatus::Ended => Err(FleetError::InvalidArgument(format!(
                "unsupported manual status target: {target:?}"
            ))),
        }
    }

    fn change_mission_status(
        &mut self,
        mission_name: &str,
        new_status: MissionStatus,
    ) -> Result<(), FleetError> {
        let mission = self
            .missions
            .get(mission_name)
            .ok_or_else(|| FleetError::mission_not_found(mission_name))?;
        mission.ensure_active()?;

        if new_status == MissionStatus::Ended {
            // Termination releases every rocket and bypasses the manual
            // validation table.
            let released: Vec<String> = mission.rockets().iter().cloned().collect();
            for name in &released {
                if let Some(rocket) = self.rockets.get_mut(name) {
                    rocket.unassign();
                }
            }
            if let Some(mission) = self.missions.get_mut(mission_name) {
                mission.unassign_all_rockets();
                mission.set_status(MissionStatus::Ended)?;
            }
            debug!(
                mission = mission_name,
                released = released.len(),
                "mission ended"
            );
            return Ok(());
        }

        self.validate_manual_transition(mission, new_status)?;
        if let Some(mission) = self.missions.get_mut(mission_name) {
            mission.set_status(new_status)?;
        }
        debug!(mission = mission_name, status = %new_status, "mission status changed");
        Ok(())
    }

    fn summary(&self) -> String {
        let mut missions: Vec<&Mission> = self.missions.values().collect();
        missions.sort_by(|a, b| {
            b.rocket_count()
                .cmp(&a.rocket_count())
                .then_with(|| b.name().cmp(a.name()))
        });

        let mut out = String::new();
        for mission in missions {
            let _ = writeln!(
                out,
                "• {} - {} - Dragons: {}",
                mission.name(),
                mission.status().label(),
                mission.rocket_count()
            );
            for name in mission.rockets() {
                if let Some(rocket) = self.rockets.get(name) {
                    let _ = writeln!(out, "o {} - {}", name, rocket.status().label());
                }
            }
        }
        out
    }
}

/// In-memory fleet registry.
///
/// Thread-safe: the whole state sits behind one mutex, which is the
/// registry's required contract, not an implementation shortcut. Cheap
/// to construct, so tests can run as many independent registries as
/// they like.
#[derive(Debug, Default)]
pub struct InMemoryFleetRegistry {
    state: Mutex<RegistryState>,
}

impl InMemoryFleetRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FleetRegistry for InMemoryFleetRegistry {
    fn add_rocket(&self, rocket: Rocket) -> Result<(), FleetError> {
        let mut state = self.state.lock();
        if state.rockets.contains_key(rocket.name()) {
            return Err(FleetError::AlreadyExists {
                kind: EntityKind::Rocket,
                name: rocket.name().to_string(),
            });
        }
        debug!(rocket = rocket.name(), "rocket registered");
        state.rockets.insert(rocket.name().to_string(), rocket);
        Ok(())
    }

    fn add_mission(&self, mission: Mission) -> Result<(), FleetError> {
        let mut state = self.state.lock();
        if state.missions.contains_key(mission.name()) {
            return Err(FleetError::AlreadyExists {
                kind: EntityKind::Mission,
                name: mission.name().to_string(),
            });
        }
        debug!(mission = mission.name(), "mission registered");
        state.missions.insert(mission.name().to_string(), mission);
        Ok(())
    }

    fn find_rocket(&self, name: &str) -> Option<Rocket> {
        self.state.lock().rockets.get(name).cloned()
    }

    fn find_mission(&self, name: &str) -> Option<Mission> {
        self.state.lock().missions.get(name).cloned()
    }

    fn assign_rocket_to_mission(
        &self,
        rocket_name: &str,
        mission_name: &str,
    ) -> Result<(), FleetError> {
        let mut state = self.state.lock();
        state.assign_one(rocket_name, mission_name)?;
        debug!(rocket = rocket_name, mission = mission_name, "rocket assigned");
        state.reconcile(mission_name)
    }

    fn assign_rockets_to_mission(
        &self,
        mission_name: &str,
        rocket_names: &BTreeSet<String>,
    ) -> Result<(), FleetError> {
        if rocket_names.is_empty() {
            return Ok(());
        }
        let mut state = self.state.lock();

        // Validation phase: nothing is mutated until every check passes.
        {
            let mission = state
                .missions
                .get(mission_name)
                .ok_or_else(|| FleetError::mission_not_found(mission_name))?;
            mission.ensure_active()?;
        }
        for name in rocket_names {
            let rocket = state
                .rockets
                .get(name)
                .ok_or_else(|| FleetError::rocket_not_found(name))?;
            if let Some(current) = rocket.mission() {
                return Err(FleetError::InvalidState(format!(
                    "bulk assignment failed: rocket '{name}' is already assigned to mission '{current}'"
                )));
            }
        }

        // Mutation phase: cannot fail after validation.
        for name in rocket_names {
            state.assign_one(name, mission_name)?;
        }
        debug!(
            mission = mission_name,
            rockets = rocket_names.len(),
            "bulk assignment committed"
        );
        state.reconcile(mission_name)
    }

    fn change_rocket_status(
        &self,
        rocket_name: &str,
        new_status: RocketStatus,
    ) -> Result<(), FleetError> {
        let mut state = self.state.lock();
        let rocket = state
            .rockets
            .get_mut(rocket_name)
            .ok_or_else(|| FleetError::rocket_not_found(rocket_name))?;
        rocket.set_status(new_status)?;
        let mission_name = rocket.mission().map(str::to_string);
        debug!(rocket = rocket_name, status = %new_status, "rocket status changed");
        match mission_name {
            Some(name) => state.reconcile(&name),
            None => Ok(()),
        }
    }

    fn change_mission_status(
        &self,
        mission_name: &str,
        new_status: MissionStatus,
    ) -> Result<(), FleetError> {
        let mut state = self.state.lock();
        state.change_mission_status(mission_name, new_status)
    }

    fn summary(&self) -> String {
        self.state.lock().summary()
    }
}
