//! Miner ship state and its capability implementations.
//!
//! A [`MinerShip`] is the concrete collaborator the engine drives through
//! the [`ShipCapability`] and [`MinerShipCapability`] contracts: travel
//! speed, drill extraction rate, a cargo hold, and the current-mission
//! slot that makes the ship unavailable while a mission is in flight.
//! Speed and drill efficiency are plain numbers here; the upgrade levels
//! that produce them live in the out-of-scope station catalog.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use starbase_types::{
    MinerShipCapability, MissionId, ResourceType, ShipCapability, ShipId, StorageError,
};

use crate::storage;

/// A ship's cargo hold: fixed capacity shared by all resource types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipStorage {
    /// Maximum number of units the hold can carry in total.
    pub capacity: u32,
    /// Units currently held, per resource type.
    pub contents: BTreeMap<ResourceType, u32>,
}

impl ShipStorage {
    /// Create an empty hold with the given capacity.
    pub const fn new(capacity: u32) -> Self {
        Self {
            capacity,
            contents: BTreeMap::new(),
        }
    }

    /// Remaining free space, in resource units.
    pub fn empty_space(&self) -> u32 {
        storage::empty_space(&self.contents, self.capacity).unwrap_or(0)
    }
}

/// A mining vessel in the station's hangar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinerShip {
    /// Unique ship identifier.
    pub id: ShipId,
    /// Display name chosen by the commander.
    pub name: String,
    /// Travel speed, in distance units per hour.
    pub speed: u32,
    /// Drill extraction rate, in resource units per hour.
    pub drill_efficiency: u32,
    /// The cargo hold.
    pub storage: ShipStorage,
    /// The mission currently occupying this ship, if any.
    pub current_mission: Option<MissionId>,
}

impl MinerShip {
    /// Create a new, available miner ship with an empty hold.
    pub fn new(
        name: impl Into<String>,
        speed: u32,
        drill_efficiency: u32,
        storage_capacity: u32,
    ) -> Self {
        Self {
            id: ShipId::new(),
            name: name.into(),
            speed,
            drill_efficiency,
            storage: ShipStorage::new(storage_capacity),
            current_mission: None,
        }
    }
}

impl ShipCapability for MinerShip {
    fn id(&self) -> ShipId {
        self.id
    }

    fn is_available(&self) -> bool {
        self.current_mission.is_none()
    }

    fn speed(&self) -> u32 {
        self.speed
    }

    fn current_mission(&self) -> Option<MissionId> {
        self.current_mission
    }

    fn set_current_mission(&mut self, mission: Option<MissionId>) {
        self.current_mission = mission;
    }
}

impl MinerShipCapability for MinerShip {
    fn extraction_rate(&self) -> u32 {
        self.drill_efficiency
    }

    fn empty_storage_space(&self) -> u32 {
        self.storage.empty_space()
    }

    fn deposit_resource(
        &mut self,
        resource: ResourceType,
        quantity: u32,
    ) -> Result<(), StorageError> {
        storage::deposit(
            &mut self.storage.contents,
            self.storage.capacity,
            resource,
            quantity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ship_is_available() {
        let ship = MinerShip::new("Built2Mine", 2, 5, 30);
        assert!(ship.is_available());
        assert_eq!(ship.empty_storage_space(), 30);
        assert_eq!(ship.extraction_rate(), 5);
    }

    #[test]
    fn mission_slot_controls_availability() {
        let mut ship = MinerShip::new("Built2Mine", 2, 5, 30);
        let mission = MissionId::new();

        ship.set_current_mission(Some(mission));
        assert!(!ship.is_available());
        assert_eq!(ShipCapability::current_mission(&ship), Some(mission));

        ship.set_current_mission(None);
        assert!(ship.is_available());
    }

    #[test]
    fn deposits_flow_into_the_hold() {
        let mut ship = MinerShip::new("Built2Mine", 2, 5, 12);
        assert!(ship.deposit_resource(ResourceType::Crystal, 9).is_ok());
        assert_eq!(ship.empty_storage_space(), 3);

        let err = ship.deposit_resource(ResourceType::Crystal, 4);
        assert!(err.is_err());
        assert_eq!(ship.empty_storage_space(), 3);
    }

    #[test]
    fn ship_roundtrip_serde() {
        let ship = MinerShip::new("Built2Mine", 2, 5, 30);
        let json = serde_json::to_string(&ship).ok();
        assert!(json.is_some());
        let back: Result<MinerShip, _> = serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(back.ok().as_ref(), Some(&ship));
    }
}
