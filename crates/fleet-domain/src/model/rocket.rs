//! Rocket - a reusable vehicle in the fleet
//!
//! A Rocket is an Entity: its name is its identity and never changes.
//! It carries at most one mission link, held as a mission *name* rather
//! than an owning pointer, so the Mission side can hold the reciprocal
//! reference without a cycle. The registry keeps both sides in sync.

use serde::{Deserialize, Serialize};

use crate::error::FleetError;

/// The current status of a Rocket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RocketStatus {
    /// Docked, not linked to any mission
    OnGround,
    /// Flying a mission
    InSpace,
    /// Grounded for maintenance (may still be linked to a mission)
    InRepair,
}

impl RocketStatus {
    /// Human-readable label, as shown in the summary report.
    pub fn label(&self) -> &'static str {
        match self {
            RocketStatus::OnGround => "On ground",
            RocketStatus::InSpace => "In space",
            RocketStatus::InRepair => "In repair",
        }
    }
}

impl core::fmt::Display for RocketStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl core::str::FromStr for RocketStatus {
    type Err = FleetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().replace('-', "_").as_str() {
            "ON_GROUND" => Ok(RocketStatus::OnGround),
            "IN_SPACE" => Ok(RocketStatus::InSpace),
            "IN_REPAIR" => Ok(RocketStatus::InRepair),
            _ => Err(FleetError::InvalidArgument(format!(
                "unknown rocket status: {s}"
            ))),
        }
    }
}

/// Rocket entity.
///
/// Invariant: `status == OnGround` if and only if `mission.is_none()`.
/// The guard methods below are the only way to mutate a rocket; they are
/// meant to be driven by the registry inside its critical section.
#[derive(Debug, Clone, Serialize)]
pub struct Rocket {
    name: String,
    status: RocketStatus,
    mission: Option<String>,
}

impl Rocket {
    /// Create a rocket, on the ground and unassigned.
    pub fn new(name: impl Into<String>) -> Result<Self, FleetError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FleetError::InvalidArgument(
                "rocket name cannot be blank".to_string(),
            ));
        }
        Ok(Self {
            name,
            status: RocketStatus::OnGround,
            mission: None,
        })
    }

    // ========== Getters ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> RocketStatus {
        self.status
    }

    /// Name of the mission this rocket is assigned to, if any.
    pub fn mission(&self) -> Option<&str> {
        self.mission.as_deref()
    }

    // ========== Guards ==========

    /// Link the rocket to a mission and send it to space.
    ///
    /// Fails if the rocket is already linked; a rocket must be explicitly
    /// unassigned before it can fly for someone else.
    pub fn assign_to_mission(&mut self, mission_name: &str) -> Result<(), FleetError> {
        if mission_name.trim().is_empty() {
            return Err(FleetError::InvalidArgument(
                "mission name cannot be blank".to_string(),
            ));
        }
        if let Some(current) = &self.mission {
            return Err(FleetError::InvalidState(format!(
                "rocket '{}' is already assigned to mission '{}'",
                self.name, current
            )));
        }
        self.mission = Some(mission_name.to_string());
        self.status = RocketStatus::InSpace;
        Ok(())
    }

    /// Drop the mission link and return to the ground. Always succeeds;
    /// used when a mission ends.
    pub fn unassign(&mut self) {
        self.mission = None;
        self.status = RocketStatus::OnGround;
    }

    /// Set the status directly.
    ///
    /// Fails only when asked for `OnGround` while a mission link exists;
    /// everything else is accepted unconditionally.
    pub fn set_status(&mut self, new_status: RocketStatus) -> Result<(), FleetError> {
        if new_status == RocketStatus::OnGround && self.mission.is_some() {
            return Err(FleetError::InvalidState(format!(
                "cannot set rocket '{}' to ON_GROUND while assigned to a mission",
                self.name
            )));
        }
        self.status = new_status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rocket_is_on_ground() {
        let rocket = Rocket::new("Falcon 9").unwrap();
        assert_eq!(rocket.status(), RocketStatus::OnGround);
        assert!(rocket.mission().is_none());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(Rocket::new("").is_err());
        assert!(Rocket::new("   ").is_err());
    }

    #[test]
    fn test_assign_forces_in_space() {
        let mut rocket = Rocket::new("Falcon 9").unwrap();
        rocket.assign_to_mission("Mars").unwrap();
        assert_eq!(rocket.status(), RocketStatus::InSpace);
        assert_eq!(rocket.mission(), Some("Mars"));
    }

    #[test]
    fn test_double_assign_rejected() {
        let mut rocket = Rocket::new("Falcon 9").unwrap();
        rocket.assign_to_mission("Mars").unwrap();
        let err = rocket.assign_to_mission("Moon").unwrap_err();
        assert!(matches!(err, FleetError::InvalidState(_)));
        // First link is untouched
        assert_eq!(rocket.mission(), Some("Mars"));
    }

    #[test]
    fn test_unassign_returns_to_ground() {
        let mut rocket = Rocket::new("Falcon 9").unwrap();
        rocket.assign_to_mission("Mars").unwrap();
        rocket.unassign();
        assert_eq!(rocket.status(), RocketStatus::OnGround);
        assert!(rocket.mission().is_none());
    }

    #[test]
    fn test_cannot_ground_while_assigned() {
        let mut rocket = Rocket::new("Falcon 9").unwrap();
        rocket.assign_to_mission("Mars").unwrap();
        let err = rocket.set_status(RocketStatus::OnGround).unwrap_err();
        assert!(matches!(err, FleetError::InvalidState(_)));
        assert_eq!(rocket.status(), RocketStatus::InSpace);
    }

    #[test]
    fn test_repair_while_assigned_is_allowed() {
        let mut rocket = Rocket::new("Falcon 9").unwrap();
        rocket.assign_to_mission("Mars").unwrap();
        rocket.set_status(RocketStatus::InRepair).unwrap();
        assert_eq!(rocket.status(), RocketStatus::InRepair);
        assert_eq!(rocket.mission(), Some("Mars"));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(RocketStatus::OnGround.label(), "On ground");
        assert_eq!(RocketStatus::InSpace.label(), "In space");
        assert_eq!(RocketStatus::InRepair.label(), "In repair");
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(
            "IN_REPAIR".parse::<RocketStatus>().unwrap(),
            RocketStatus::InRepair
        );
        assert_eq!(
            "on-ground".parse::<RocketStatus>().unwrap(),
            RocketStatus::OnGround
        );
        assert!("ORBITING".parse::<RocketStatus>().is_err());
    }
}
