//! Mission record, timeline event, and detail-view entity types.
//!
//! The [`Mission`] record is the single mutable state container for a
//! mission; it exclusively owns its ordered [`Event`] timeline. Ships and
//! locations are referenced by ID only.
//!
//! # Equality
//!
//! Persisted timestamps come back from storage with sub-second rounding,
//! so [`Event`] and [`Mission`] implement [`PartialEq`] with a
//! half-second tolerance on timestamps while comparing every other field
//! exactly. The tolerance makes equality non-transitive, which is why
//! neither type implements `Eq` or any ordering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{EventType, MissionStatus, MissionType};
use crate::ids::{LocationId, MissionId, ShipId};

/// Timestamp tolerance for equality comparisons, in milliseconds.
const TIMESTAMP_TOLERANCE_MS: u64 = 500;

/// Whether two timestamps agree within the half-second tolerance.
fn timestamps_agree(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.signed_duration_since(b).num_milliseconds().unsigned_abs() < TIMESTAMP_TOLERANCE_MS
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// A timestamped phase marker on a mission's timeline.
///
/// `end_time` is the instant the phase finished (for the initial event,
/// the instant the mission began). A `message` of `None` marks a
/// provisional marker whose narration is filled in once the phase
/// actually elapses.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Event {
    /// The instant this event's phase ended.
    pub end_time: DateTime<Utc>,
    /// The category of event.
    pub event_type: EventType,
    /// Human-readable narration; `None` while the event is provisional.
    pub message: Option<String>,
}

impl Event {
    /// Create a provisional marker event with no narration yet.
    pub const fn marker(event_type: EventType, end_time: DateTime<Utc>) -> Self {
        Self {
            end_time,
            event_type,
            message: None,
        }
    }

    /// Create a fully narrated event.
    pub const fn narrated(
        event_type: EventType,
        end_time: DateTime<Utc>,
        message: String,
    ) -> Self {
        Self {
            end_time,
            event_type,
            message: Some(message),
        }
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.event_type == other.event_type
            && self.message == other.message
            && timestamps_agree(self.end_time, other.end_time)
    }
}

// ---------------------------------------------------------------------------
// Mission
// ---------------------------------------------------------------------------

/// The mutable state container for a long-running mission.
///
/// Created by a start operation with status [`MissionStatus::EnRoute`]
/// and a single [`EventType::Start`] event; mutated exclusively through
/// the progression engine's catch-up and abort operations. The `events`
/// sequence is append-only except that the last event's message may be
/// rewritten in place, and it is never empty at operation boundaries.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Mission {
    /// Unique mission identifier.
    pub id: MissionId,
    /// When the mission left the station.
    pub start_time: DateTime<Utc>,
    /// When the currently active phase is expected to end.
    pub current_objective_time: DateTime<Utc>,
    /// Best current estimate of when the mission fully ends.
    pub approx_end_time: DateTime<Utc>,
    /// The phase the mission is currently in.
    pub current_status: MissionStatus,
    /// The kind of undertaking this mission represents.
    pub mission_type: MissionType,
    /// Duration of each travel leg, in whole seconds.
    pub travel_duration_in_secs: u64,
    /// Duration of the on-site activity, in whole seconds. Shrunk
    /// mid-flight when the activity ends earlier than requested.
    pub activity_duration_in_secs: u64,
    /// The ship assigned to this mission.
    pub ship: ShipId,
    /// The target location.
    pub location: LocationId,
    /// Ordered, append-only timeline of phase boundaries.
    pub events: Vec<Event>,
}

impl PartialEq for Mission {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.current_status == other.current_status
            && self.mission_type == other.mission_type
            && self.travel_duration_in_secs == other.travel_duration_in_secs
            && self.activity_duration_in_secs == other.activity_duration_in_secs
            && self.ship == other.ship
            && self.location == other.location
            && timestamps_agree(self.start_time, other.start_time)
            && timestamps_agree(self.current_objective_time, other.current_objective_time)
            && timestamps_agree(self.approx_end_time, other.approx_end_time)
            && self.events == other.events
    }
}

// ---------------------------------------------------------------------------
// Detail view
// ---------------------------------------------------------------------------

/// Structured summary of a mission for external callers.
///
/// Carries everything a transport layer needs to render the mission:
/// status, timestamps, durations, the target's name, and the full event
/// list with narrations. No wire format is prescribed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MissionDetail {
    /// Unique mission identifier.
    pub id: MissionId,
    /// The kind of mission.
    pub mission_type: MissionType,
    /// Current lifecycle phase.
    pub current_status: MissionStatus,
    /// When the mission left the station.
    pub start_time: DateTime<Utc>,
    /// When the currently active phase is expected to end.
    pub current_objective_time: DateTime<Utc>,
    /// Best current estimate of when the mission fully ends.
    pub approx_end_time: DateTime<Utc>,
    /// Duration of each travel leg, in whole seconds.
    pub travel_duration_in_secs: u64,
    /// Duration of the on-site activity, in whole seconds.
    pub activity_duration_in_secs: u64,
    /// Name of the target location.
    pub location_name: String,
    /// The full event timeline, oldest first.
    pub events: Vec<Event>,
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    fn base_time() -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH
    }

    #[test]
    fn events_equal_within_half_second() {
        let a = Event::narrated(EventType::Start, base_time(), String::from("Left station."));
        let mut b = a.clone();
        b.end_time = base_time() + TimeDelta::milliseconds(499);
        assert_eq!(a, b);
    }

    #[test]
    fn events_differ_at_half_second() {
        let a = Event::marker(EventType::ArrivalAtLocation, base_time());
        let mut b = a.clone();
        b.end_time = base_time() + TimeDelta::milliseconds(500);
        assert_ne!(a, b);
    }

    #[test]
    fn events_differ_by_type_or_message() {
        let a = Event::marker(EventType::ActivityComplete, base_time());
        let b = Event::marker(EventType::ReturnedToStation, base_time());
        assert_ne!(a, b);

        let c = Event::narrated(EventType::Abort, base_time(), String::from("Aborted."));
        let d = Event::marker(EventType::Abort, base_time());
        assert_ne!(c, d);
    }

    #[test]
    fn mission_equality_tolerates_timestamp_jitter() {
        let mission = Mission {
            id: MissionId::new(),
            start_time: base_time(),
            current_objective_time: base_time() + TimeDelta::seconds(9000),
            approx_end_time: base_time() + TimeDelta::seconds(19800),
            current_status: MissionStatus::EnRoute,
            mission_type: MissionType::Mining,
            travel_duration_in_secs: 9000,
            activity_duration_in_secs: 1800,
            ship: ShipId::new(),
            location: LocationId::new(),
            events: vec![Event::marker(EventType::Start, base_time())],
        };
        let mut jittered = mission.clone();
        jittered.start_time = base_time() + TimeDelta::milliseconds(300);
        assert_eq!(mission, jittered);

        let mut drifted = mission.clone();
        drifted.approx_end_time = base_time() + TimeDelta::seconds(19801);
        assert_ne!(mission, drifted);
    }

    #[test]
    fn mission_roundtrip_serde() {
        let mission = Mission {
            id: MissionId::new(),
            start_time: base_time(),
            current_objective_time: base_time(),
            approx_end_time: base_time(),
            current_status: MissionStatus::Over,
            mission_type: MissionType::Mining,
            travel_duration_in_secs: 60,
            activity_duration_in_secs: 60,
            ship: ShipId::new(),
            location: LocationId::new(),
            events: vec![Event::narrated(
                EventType::ReturnedToStation,
                base_time(),
                String::from("Returned to station."),
            )],
        };
        let json = serde_json::to_string(&mission).ok();
        assert!(json.is_some());
        let back: Result<Mission, _> = serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(back.ok().as_ref(), Some(&mission));
    }
}
