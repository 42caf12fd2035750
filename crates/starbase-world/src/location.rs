//! Mission target locations with occupancy tracking and reserve accounting.
//!
//! A [`Location`] is a planet or asteroid a ship can be sent to. It
//! carries the data the engine reads through [`LocationCapability`]:
//! distance from the station, the single resource extractable here, the
//! remaining reserve, and the back-reference slot recording which mission
//! currently occupies it. The slot enforces one mission at a time; the
//! engine refuses to start a mission on an occupied location and clears
//! the slot when the mission ends.

use serde::{Deserialize, Serialize};
use starbase_types::{LocationCapability, LocationId, MissionId, ResourceType};

/// A mission target in the station's reachable space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Unique location identifier.
    pub id: LocationId,
    /// Display name used in mission narration.
    pub name: String,
    /// Distance from the station, in abstract distance units.
    pub distance_from_station: u32,
    /// The single resource type extractable here.
    pub resource_type: ResourceType,
    /// Remaining extractable reserve, in resource units.
    pub resource_reserve: u32,
    /// The mission currently occupying this location, if any.
    pub current_mission: Option<MissionId>,
}

impl Location {
    /// Create a new, unoccupied location.
    pub fn new(
        name: impl Into<String>,
        distance_from_station: u32,
        resource_type: ResourceType,
        resource_reserve: u32,
    ) -> Self {
        Self {
            id: LocationId::new(),
            name: name.into(),
            distance_from_station,
            resource_type,
            resource_reserve,
            current_mission: None,
        }
    }

    /// Whether a mission is currently running against this location.
    pub const fn is_occupied(&self) -> bool {
        self.current_mission.is_some()
    }

    /// Whether the reserve has been mined out.
    pub const fn is_depleted(&self) -> bool {
        self.resource_reserve == 0
    }
}

impl LocationCapability for Location {
    fn id(&self) -> LocationId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn distance_from_station(&self) -> u32 {
        self.distance_from_station
    }

    fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    fn resource_reserve(&self) -> u32 {
        self.resource_reserve
    }

    fn set_resource_reserve(&mut self, reserve: u32) {
        self.resource_reserve = reserve;
    }

    fn current_mission(&self) -> Option<MissionId> {
        self.current_mission
    }

    fn set_current_mission(&mut self, mission: Option<MissionId>) {
        self.current_mission = mission;
    }
}
