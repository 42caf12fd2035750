//! Default starting map for the Starbase simulation.
//!
//! Four mining targets at increasing distance from the station, one per
//! resource type. Reserves are sized so the nearest target is the
//! cheapest to work and the farthest carries the rarest resource.

use starbase_types::ResourceType;

use crate::location::Location;

/// Create the default set of mission targets.
///
/// Every location starts unoccupied with a full reserve.
pub fn starting_locations() -> Vec<Location> {
    vec![
        Location::new("Morpheus", 1, ResourceType::Metal, 2000),
        Location::new("Koboh", 4, ResourceType::Crystal, 1200),
        Location::new("Palaven", 11, ResourceType::Silicone, 800),
        Location::new("Crosie 3W", 13, ResourceType::Plutonium, 400),
    ]
}
