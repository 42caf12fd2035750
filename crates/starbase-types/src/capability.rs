//! Capability contracts between the mission engine and its collaborators.
//!
//! The progression engine never touches concrete ship or location types;
//! it drives everything through these traits. Concrete implementations
//! live in `starbase-ships` and `starbase-world`, and test doubles can
//! implement them directly. Persistence and transport for the
//! implementors are out of scope here.

use crate::enums::ResourceType;
use crate::ids::{LocationId, MissionId, ShipId};

/// Errors surfaced by capability implementations during resource deposit.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The deposit would exceed the ship's storage capacity.
    #[error("cannot store {quantity} {resource}(s): only {free_space} free")]
    Overflow {
        /// The resource being deposited.
        resource: ResourceType,
        /// The quantity that was attempted.
        quantity: u32,
        /// The free space available at the time of the attempt.
        free_space: u32,
    },

    /// Arithmetic overflow during a checked storage operation.
    #[error("arithmetic overflow in storage calculation")]
    ArithmeticOverflow,
}

/// Operations every mission-capable ship exposes to the engine.
pub trait ShipCapability {
    /// The ship's unique identifier.
    fn id(&self) -> ShipId;

    /// Whether the ship can be assigned a new mission.
    fn is_available(&self) -> bool;

    /// The ship's travel speed (distance units per hour).
    fn speed(&self) -> u32;

    /// The mission currently occupying this ship, if any.
    fn current_mission(&self) -> Option<MissionId>;

    /// Record or clear the mission occupying this ship.
    fn set_current_mission(&mut self, mission: Option<MissionId>);
}

/// Additional operations a mining-capable ship exposes.
pub trait MinerShipCapability: ShipCapability {
    /// Units of resource extracted per hour of mining.
    fn extraction_rate(&self) -> u32;

    /// Remaining free storage space, in resource units.
    fn empty_storage_space(&self) -> u32;

    /// Deposit extracted resources into the ship's storage.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Overflow`] if the quantity does not fit.
    fn deposit_resource(&mut self, resource: ResourceType, quantity: u32)
    -> Result<(), StorageError>;
}

/// Operations a mission target location exposes to the engine.
pub trait LocationCapability {
    /// The location's unique identifier.
    fn id(&self) -> LocationId;

    /// The location's display name, used in event narration.
    fn name(&self) -> &str;

    /// Distance from the station, in abstract distance units.
    fn distance_from_station(&self) -> u32;

    /// The single resource type extractable here.
    fn resource_type(&self) -> ResourceType;

    /// Remaining extractable reserve, in resource units.
    fn resource_reserve(&self) -> u32;

    /// Overwrite the remaining reserve (depletion accounting).
    fn set_resource_reserve(&mut self, reserve: u32);

    /// The mission currently occupying this location, if any.
    fn current_mission(&self) -> Option<MissionId>;

    /// Record or clear the mission occupying this location.
    fn set_current_mission(&mut self, mission: Option<MissionId>);
}
