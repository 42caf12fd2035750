//! Enumeration types for the Starbase simulation.
//!
//! Resource kinds, mission lifecycle states, timeline event types, and
//! the mission-type discriminant used by external layers to dispatch
//! without downcasting.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// A resource that can be extracted from a location and stored on a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ResourceType {
    /// Structural metal, the cheapest and most common ore.
    Metal,
    /// Energy crystals used by shields and advanced parts.
    Crystal,
    /// Fissile material for high-tier upgrades.
    Plutonium,
    /// Refined silicone for electronics.
    Silicone,
}

impl core::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Metal => "Metal",
            Self::Crystal => "Crystal",
            Self::Plutonium => "Plutonium",
            Self::Silicone => "Silicone",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Mission lifecycle
// ---------------------------------------------------------------------------

/// The phase a mission is currently in.
///
/// Transitions are driven lazily by the catch-up algorithm in
/// `starbase-missions`; see that crate for the state machine. `Archived`
/// is terminal post-processing applied by external layers only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum MissionStatus {
    /// Travelling from the station to the target location.
    EnRoute,
    /// On site, performing the mission activity.
    InProgress,
    /// Travelling back to the station.
    Returning,
    /// Back at the station; ship and location released.
    Over,
    /// Archived by an external layer after completion.
    Archived,
}

/// The kind of undertaking a mission represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum MissionType {
    /// Resource extraction at a mining target.
    Mining,
}

// ---------------------------------------------------------------------------
// Timeline events
// ---------------------------------------------------------------------------

/// The category of a timeline event.
///
/// `PirateAttack` and `MeteorStorm` are reserved for travel hazards; no
/// shipped phase behavior produces them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum EventType {
    /// The mission departed the station.
    Start,
    /// The ship reached the target location.
    ArrivalAtLocation,
    /// The on-site activity finished.
    ActivityComplete,
    /// The ship docked back at the station.
    ReturnedToStation,
    /// The mission was aborted by command.
    Abort,
    /// A pirate raid during a travel leg (reserved).
    PirateAttack,
    /// A meteor storm during a travel leg (reserved).
    MeteorStorm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_display_names() {
        assert_eq!(ResourceType::Metal.to_string(), "Metal");
        assert_eq!(ResourceType::Crystal.to_string(), "Crystal");
        assert_eq!(ResourceType::Plutonium.to_string(), "Plutonium");
        assert_eq!(ResourceType::Silicone.to_string(), "Silicone");
    }

    #[test]
    fn status_roundtrip_serde() {
        let json = serde_json::to_string(&MissionStatus::EnRoute).ok();
        assert!(json.is_some());
        let back: Result<MissionStatus, _> = serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(back.ok(), Some(MissionStatus::EnRoute));
    }
}
