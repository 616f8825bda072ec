//! Mission - a campaign that rockets get assigned to
//!
//! A Mission is an Entity identified by name. It tracks its assigned
//! rockets as a set of rocket *names* (the reciprocal of the link each
//! Rocket holds), so neither side owns the other. `Ended` is terminal:
//! an ended mission can never be mutated again.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::FleetError;

/// The current status of a Mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MissionStatus {
    /// Created, no rockets assigned yet
    Scheduled,
    /// Has rockets, but at least one is in repair
    Pending,
    /// Has rockets, none in repair
    InProgress,
    /// Finished; terminal and immutable
    Ended,
}

impl MissionStatus {
    /// Human-readable label, as shown in the summary report.
    pub fn label(&self) -> &'static str {
        match self {
            MissionStatus::Scheduled => "Scheduled",
            MissionStatus::Pending => "Pending",
            MissionStatus::InProgress => "In progress",
            MissionStatus::Ended => "Ended",
        }
    }
}

impl core::fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl core::str::FromStr for MissionStatus {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "SCHEDULED" => Ok(MissionStatus::Scheduled),
            "PENDING" => Ok(MissionStatus::Pending),
            "IN_PROGRESS" => Ok(MissionStatus::InProgress),
            "ENDED" => Ok(MissionStatus::Ended),
            _ => Err(FleetError::InvalidArgument(format!(
                "unknown mission status: {s}"
            ))),
        }
    }
}

/// Mission entity.
///
/// The guard methods perform raw, entity-local mutation only. Business
/// rules across entities (which status a mission may move to, whether a
/// rocket may join) are the registry's responsibility.
#[derive(Debug, Clone, Serialize)]
pub struct Mission {
    name: String,
    status: MissionStatus,
    rockets: BTreeSet<String>,
}

impl Mission {
    /// Create a mission, scheduled with no rockets.
    pub fn new(name: impl Into<String>) -> Result<Self, FleetError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FleetError::InvalidArgument(
                "mission name cannot be blank".to_string(),
            ));
        }
        Ok(Self {
            name,
            status: MissionStatus::Scheduled,
            rockets: BTreeSet::new(),
        })
    }

    // ========== Getters ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> MissionStatus {
        self.status
    }

    /// Names of the assigned rockets, in lexicographic order.
    pub fn rockets(&self) -> &BTreeSet<String> {
        &self.rockets
    }

    pub fn rocket_count(&self) -> usize {
        self.rockets.len()
    }

    // ========== Guards ==========

    /// Reject any mutation of an ended mission.
    pub fn ensure_active(&self) -> Result<(), FleetError> {
        if self.status == MissionStatus::Ended {
            return Err(FleetError::InvalidState(format!(
                "mission '{}' has ended and cannot be changed",
                self.name
            )));
        }
        Ok(())
    }

    /// Add a rocket to the assigned set. Idempotent; fails if ended.
    pub fn assign_rocket(&mut self, rocket_name: &str) -> Result<(), FleetError> {
        self.ensure_active()?;
        self.rockets.insert(rocket_name.to_string());
        Ok(())
    }

    /// Clear the assigned set unconditionally. Used when the mission ends.
    pub fn unassign_all_rockets(&mut self) {
        self.rockets.clear();
    }

    /// Overwrite the status. Fails only if the mission has already ended;
    /// no other validation happens here.
    pub fn set_status(&mut self, new_status: MissionStatus) -> Result<(), FleetError> {
        self.ensure_active()?;
        self.status = new_status;
        Ok(())
    }
}
