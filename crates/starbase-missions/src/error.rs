//! Error types for the `starbase-missions` crate.
//!
//! All engine failures are synchronous return values; the engine has no
//! transient-failure surface of its own (no I/O). Operation-state
//! conflicts (busy ship, occupied location, abort on a finished mission)
//! and caller-input errors ([`MissionError::InvalidActivityDuration`])
//! are distinct variants so callers can map them to different responses.

use starbase_types::{EventType, LocationId, MissionId, MissionStatus, ShipId, StorageError};

/// Errors that can occur during mission progression.
#[derive(Debug, thiserror::Error)]
pub enum MissionError {
    /// The ship is already occupied by another mission.
    #[error("ship {ship} is already on a mission")]
    ShipUnavailable {
        /// The busy ship.
        ship: ShipId,
    },

    /// The target location already hosts a mission.
    #[error("a mission is already in progress at location {location}")]
    LocationOccupied {
        /// The occupied location.
        location: LocationId,
    },

    /// The requested activity duration is not a positive number of seconds.
    #[error("activity duration must be positive, got {requested}")]
    InvalidActivityDuration {
        /// The rejected duration, in seconds.
        requested: u64,
    },

    /// A ship reported zero speed; travel time is undefined.
    #[error("ship speed must be positive")]
    InvalidShipSpeed,

    /// A ship reported zero extraction rate where a fill time was needed.
    #[error("extraction rate must be positive")]
    InvalidExtractionRate,

    /// Abort was requested on a mission that already finished.
    #[error("mission {mission} is already over")]
    MissionAlreadyOver {
        /// The finished mission.
        mission: MissionId,
    },

    /// Abort was requested on a mission already travelling home.
    #[error("mission {mission} is already returning")]
    MissionAlreadyReturning {
        /// The returning mission.
        mission: MissionId,
    },

    /// A mission record carries no events; the record is corrupt.
    #[error("mission {mission} has an empty timeline")]
    EmptyTimeline {
        /// The corrupt mission.
        mission: MissionId,
    },

    /// The timeline's last event does not fit the mission's status.
    #[error("unexpected {event_type:?} event while {status:?}")]
    UnexpectedEvent {
        /// The mission's status at dispatch time.
        status: MissionStatus,
        /// The event type found at the end of the timeline.
        event_type: EventType,
    },

    /// Arithmetic overflow during a checked duration or yield calculation.
    #[error("arithmetic overflow in mission calculation")]
    ArithmeticOverflow,

    /// A ship storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
