//! Shared type definitions for the Starbase simulation.
//!
//! This crate is the single source of truth for the types used across
//! the Starbase workspace. Entity types flow downstream to `TypeScript`
//! via `ts-rs` for the station dashboard.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for all entity identifiers
//! - [`enums`] -- Enumeration types (resources, statuses, event types)
//! - [`mission`] -- Mission record, timeline event, and detail view
//! - [`capability`] -- Contracts between the engine and its collaborators

pub mod capability;
pub mod enums;
pub mod ids;
pub mod mission;

// Re-export all public types at crate root for convenience.
pub use capability::{LocationCapability, MinerShipCapability, ShipCapability, StorageError};
pub use enums::{EventType, MissionStatus, MissionType, ResourceType};
pub use ids::{LocationId, MissionId, ShipId};
pub use mission::{Event, Mission, MissionDetail};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::MissionId::export_all();
        let _ = crate::ids::ShipId::export_all();
        let _ = crate::ids::LocationId::export_all();

        // Enums
        let _ = crate::enums::ResourceType::export_all();
        let _ = crate::enums::MissionStatus::export_all();
        let _ = crate::enums::MissionType::export_all();
        let _ = crate::enums::EventType::export_all();

        // Entities
        let _ = crate::mission::Event::export_all();
        let _ = crate::mission::Mission::export_all();
        let _ = crate::mission::MissionDetail::export_all();
    }
}
