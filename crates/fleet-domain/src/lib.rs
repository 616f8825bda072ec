//! # Fleet Domain Layer
//!
//! Entities and guard logic for the rocket-fleet registry.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                Domain Layer (This Crate)               │
//! │  model/    - Rocket and Mission entities + guards      │
//! │  registry/ - FleetRegistry trait (port, no impl here)  │
//! │  error     - FleetError taxonomy                       │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! Entity guards enforce entity-local invariants only (a rocket cannot be
//! grounded while linked, an ended mission is immutable). Cross-entity
//! policy — which manual status transitions are legal, how mission status
//! derives from rocket statuses — belongs to the registry implementation.

pub mod error;
pub mod model;
pub mod registry;

// Re-export commonly used types
pub use error::{EntityKind, ErrorKind, FleetError};
pub use model::{Mission, MissionStatus, Rocket, RocketStatus};
pub use registry::FleetRegistry;
