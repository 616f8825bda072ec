//! Domain model: Entities and their guard logic

pub mod mission;
pub mod rocket;

pub use mission::{Mission, MissionStatus};
pub use rocket::{Rocket, RocketStatus};
