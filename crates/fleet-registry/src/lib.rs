//! # Fleet Registry
//!
//! In-memory implementation of the [`FleetRegistry`](fleet_domain::FleetRegistry)
//! port. Holds the rocket and mission maps behind a single mutex so every
//! operation is one atomic critical section; in particular the bulk
//! assignment is all-or-nothing and never partially visible to readers.

pub mod in_memory;

pub use in_memory::InMemoryFleetRegistry;
