//! Mission targets and the starting map for the Starbase simulation.
//!
//! This crate models the physical world the mission engine acts on:
//! locations with a distance from the station, a single extractable
//! resource with a finite reserve, and an occupancy slot enforcing one
//! mission at a time. The engine drives locations exclusively through
//! the [`LocationCapability`] contract.
//!
//! # Modules
//!
//! - [`location`] -- [`Location`] and its capability implementation.
//! - [`starting_locations`] -- the default four-target map.
//!
//! [`LocationCapability`]: starbase_types::LocationCapability

pub mod location;
pub mod starting_locations;

// Re-export primary types at crate root.
pub use location::Location;
pub use starting_locations::starting_locations;
