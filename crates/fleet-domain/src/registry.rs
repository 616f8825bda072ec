//! Fleet registry port
//!
//! The trait below defines what callers may do to the fleet. How the
//! state is held (in memory, behind which lock) is an adapter concern.
//! Every operation is required to be atomic with respect to the whole
//! registry: no caller may observe a rocket linked to a mission that
//! does not list it, or a half-applied bulk assignment.

use std::collections::BTreeSet;

use crate::error::FleetError;
use crate::model::{Mission, MissionStatus, Rocket, RocketStatus};

/// Fleet registry trait.
///
/// This is a PORT: the domain defines the operation set, adapters
/// implement it. Lookups clone the entity out so no caller can alias
/// into registry-owned state.
pub trait FleetRegistry {
    /// Register a rocket. Fails if the name is already taken.
    fn add_rocket(&self, rocket: Rocket) -> Result<(), FleetError>;

    /// Register a mission. Fails if the name is already taken.
    fn add_mission(&self, mission: Mission) -> Result<(), FleetError>;

    /// Look up a rocket by name. Never fails.
    fn find_rocket(&self, name: &str) -> Option<Rocket>;

    /// Look up a mission by name. Never fails.
    fn find_mission(&self, name: &str) -> Option<Mission>;

    /// Link one rocket to one mission and reconcile the mission status.
    fn assign_rocket_to_mission(
        &self,
        rocket_name: &str,
        mission_name: &str,
    ) -> Result<(), FleetError>;

    /// Link a batch of rockets to a mission, all or nothing.
    ///
    /// If any named rocket is missing or already assigned, nothing is
    /// mutated. An empty batch is a no-op success.
    fn assign_rockets_to_mission(
        &self,
        mission_name: &str,
        rocket_names: &BTreeSet<String>,
    ) -> Result<(), FleetError>;

    /// Change a rocket's status, then reconcile its mission if it has one.
    fn change_rocket_status(
        &self,
        rocket_name: &str,
        new_status: RocketStatus,
    ) -> Result<(), FleetError>;

    /// Change a mission's status.
    ///
    /// `Ended` releases every assigned rocket and is accepted whenever the
    /// mission has not already ended; any other target is validated
    /// against the assigned fleet first.
    fn change_mission_status(
        &self,
        mission_name: &str,
        new_status: MissionStatus,
    ) -> Result<(), FleetError>;

    /// Deterministic textual report of all missions and their rockets,
    /// sorted by descending rocket count, ties by descending name.
    fn summary(&self) -> String;

    /// Check if a rocket is registered.
    fn rocket_exists(&self, name: &str) -> bool {
        self.find_rocket(name).is_some()
    }

    /// Check if a mission is registered.
    fn mission_exists(&self, name: &str) -> bool {
        self.find_mission(name).is_some()
    }
}
