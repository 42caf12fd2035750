//! The mission progression driver.
//!
//! No background scheduler ticks missions forward. Instead, the state of
//! a mission is materialized lazily: whenever a caller looks at a
//! mission, [`MissionManager::update_status`] replays every phase
//! boundary the wall clock has crossed since the last observation, in
//! one pass, appending timeline events as it goes.
//!
//! The driver owns all state-machine transitions and timeline mutation.
//! Phase-specific effects (what happens on arrival, on activity
//! completion, on return) are delegated to a [`MissionPhases`] strategy;
//! the mining specialization lives in [`crate::mining`].
//!
//! # Catch-up mechanics
//!
//! Each phase in flight is represented by a provisional marker event at
//! the end of the timeline, timestamped with the instant the phase will
//! end. The loop inspects the last event: if it still lies in the
//! future, nothing has happened yet and the call is a no-op. If it has
//! passed, the transition it marks is applied (narrating the marker in
//! place) and the next phase's marker is pushed. A single call therefore
//! walks through as many phase boundaries as elapsed time justifies --
//! at most one transition per phase, never unbounded.
//!
//! # Concurrency
//!
//! The driver holds `&mut` borrows of the mission record, its ship, and
//! its location for its whole lifetime, so per-mission serialization is
//! enforced by the borrow checker; there is no internal locking.
//! Different missions touch disjoint state and may progress in parallel.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use starbase_types::{
    Event, EventType, LocationCapability, Mission, MissionDetail, MissionStatus, ShipCapability,
};
use tracing::{debug, info};

use crate::clock::add_secs;
use crate::error::MissionError;
use crate::timeline;

/// Seconds per hour, the unit all rates are quoted in.
pub(crate) const SECS_PER_HOUR: u64 = 3600;

/// Which travel leg of a mission an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelLeg {
    /// Station to target location.
    Outbound,
    /// Target location back to the station.
    Return,
}

/// The specialization's answer to "we have arrived, what now".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityPlan {
    /// Narration for the arrival event.
    pub arrival_message: String,
    /// The actual activity duration in seconds, possibly shorter than
    /// the requested one (capacity or reserve boundary).
    pub duration_in_secs: u64,
}

/// Phase-specific behavior plugged into the driver.
///
/// Implementations compute durations, apply resource effects, and choose
/// narrations; they never touch the timeline or the mission's status
/// fields directly. The driver reads `mission.activity_duration_in_secs`
/// as input to `finish_activity` and `abort_activity`, having set it
/// from the plan (or the abort truncation) beforehand.
pub trait MissionPhases<S: ShipCapability, L: LocationCapability> {
    /// Called when the ship reaches the target location. Returns the
    /// arrival narration and the actual activity duration.
    fn start_activity(
        &mut self,
        mission: &Mission,
        ship: &S,
        location: &L,
    ) -> Result<ActivityPlan, MissionError>;

    /// Called when the activity phase has elapsed. Applies resource
    /// effects and returns the narration for the completed activity.
    fn finish_activity(
        &mut self,
        mission: &Mission,
        ship: &mut S,
        location: &mut L,
    ) -> Result<String, MissionError>;

    /// Called when a mission is aborted mid-activity. Applies the
    /// partial-completion resource effect for the truncated
    /// `activity_duration_in_secs` and returns the abort narration.
    fn abort_activity(
        &mut self,
        mission: &Mission,
        ship: &mut S,
        location: &mut L,
    ) -> Result<String, MissionError>;

    /// Narration written on the final event when the ship docks.
    fn end_message(&self) -> String;

    /// Hook for hazard events during travel legs (pirate attacks, meteor
    /// storms). The default produces nothing; hazard mechanics are
    /// reserved and intentionally unspecified.
    fn travel_event(&mut self, rng: &mut StdRng, leg: TravelLeg) -> Option<Event> {
        let _ = (rng, leg);
        None
    }
}

/// Drives one mission through its phases against its ship and location.
///
/// Construct one per operation (the borrows are cheap); the mission
/// record itself is the durable state.
pub struct MissionManager<'a, S, L, P> {
    mission: &'a mut Mission,
    ship: &'a mut S,
    location: &'a mut L,
    phases: P,
    rng: StdRng,
}

impl<'a, S, L, P> MissionManager<'a, S, L, P>
where
    S: ShipCapability,
    L: LocationCapability,
    P: MissionPhases<S, L>,
{
    /// Wire a driver around a mission record and its collaborators.
    ///
    /// The `rng` feeds the travel-hazard hook only; no shipped phase
    /// behavior consumes randomness.
    pub fn new(
        mission: &'a mut Mission,
        ship: &'a mut S,
        location: &'a mut L,
        phases: P,
        rng: StdRng,
    ) -> Self {
        Self {
            mission,
            ship,
            location,
            phases,
            rng,
        }
    }

    /// Advance the mission to its correct state as of `now`.
    ///
    /// Idempotent and safe to call any number of times: if the mission
    /// is already over, or the current phase has not yet ended, nothing
    /// changes. Otherwise the driver applies every phase transition the
    /// elapsed time justifies, in order, and stops once the last event
    /// lies in the future again.
    pub fn update_status(&mut self, now: DateTime<Utc>) -> Result<(), MissionError> {
        loop {
            if matches!(
                self.mission.current_status,
                MissionStatus::Over | MissionStatus::Archived
            ) {
                return Ok(());
            }

            let Some(last) = timeline::peek_last(&self.mission.events) else {
                return Err(MissionError::EmptyTimeline {
                    mission: self.mission.id,
                });
            };
            // The current phase is still running; no event may be read
            // twice and no phase skipped.
            if last.end_time > now {
                return Ok(());
            }
            let last_type = last.event_type;
            let last_time = last.end_time;

            debug!(
                mission = %self.mission.id,
                status = ?self.mission.current_status,
                event_type = ?last_type,
                "catch-up transition"
            );

            match (self.mission.current_status, last_type) {
                // Departure (or a narrated travel hazard) is behind us;
                // materialize the end of the outbound leg.
                (
                    MissionStatus::EnRoute,
                    EventType::Start | EventType::PirateAttack | EventType::MeteorStorm,
                ) => self.push_travel_marker(TravelLeg::Outbound),

                (MissionStatus::EnRoute, EventType::ArrivalAtLocation) => {
                    self.begin_activity(last_time)?;
                }

                (MissionStatus::InProgress, EventType::ActivityComplete) => {
                    self.complete_activity(last_time)?;
                }

                // Return travel has started; materialize the end of the
                // homebound leg.
                (
                    MissionStatus::Returning,
                    EventType::ActivityComplete
                    | EventType::Abort
                    | EventType::PirateAttack
                    | EventType::MeteorStorm,
                ) => self.push_travel_marker(TravelLeg::Return),

                (MissionStatus::Returning, EventType::ReturnedToStation) => {
                    self.finish_return()?;
                }

                (status, event_type) => {
                    return Err(MissionError::UnexpectedEvent { status, event_type });
                }
            }
        }
    }

    /// Abort the mission and turn the ship around.
    ///
    /// Fails if the mission is already over, archived, or returning.
    /// Otherwise the pending marker is discarded; if the abort lands
    /// mid-activity, the activity duration is truncated to the time
    /// actually spent on site and the partial yield is applied before
    /// the homebound leg starts at `now`.
    pub fn abort(&mut self, now: DateTime<Utc>) -> Result<bool, MissionError> {
        match self.mission.current_status {
            MissionStatus::Over | MissionStatus::Archived => {
                return Err(MissionError::MissionAlreadyOver {
                    mission: self.mission.id,
                });
            }
            MissionStatus::Returning => {
                return Err(MissionError::MissionAlreadyReturning {
                    mission: self.mission.id,
                });
            }
            MissionStatus::EnRoute | MissionStatus::InProgress => {}
        }

        let pending =
            timeline::pop_last(&mut self.mission.events).ok_or(MissionError::EmptyTimeline {
                mission: self.mission.id,
            })?;

        let message = if pending.event_type == EventType::ActivityComplete {
            // Mid-activity: the previous event marks when work began.
            let activity_began = timeline::peek_last(&self.mission.events)
                .map(|event| event.end_time)
                .ok_or(MissionError::EmptyTimeline {
                    mission: self.mission.id,
                })?;
            let elapsed = now.signed_duration_since(activity_began).num_seconds();
            self.mission.activity_duration_in_secs = u64::try_from(elapsed.max(0)).unwrap_or(0);
            self.phases
                .abort_activity(self.mission, self.ship, self.location)?
        } else {
            String::from("Mission aborted by Command. Returning to station.")
        };

        self.mission
            .events
            .push(Event::narrated(EventType::Abort, now, message));

        let return_eta = add_secs(now, self.mission.travel_duration_in_secs)?;
        self.mission.current_status = MissionStatus::Returning;
        self.mission.current_objective_time = return_eta;
        self.mission.approx_end_time = return_eta;

        info!(mission = %self.mission.id, "mission aborted, returning to station");
        Ok(true)
    }

    /// Structured summary of the mission for external callers.
    pub fn detail_view(&self) -> MissionDetail {
        MissionDetail {
            id: self.mission.id,
            mission_type: self.mission.mission_type,
            current_status: self.mission.current_status,
            start_time: self.mission.start_time,
            current_objective_time: self.mission.current_objective_time,
            approx_end_time: self.mission.approx_end_time,
            travel_duration_in_secs: self.mission.travel_duration_in_secs,
            activity_duration_in_secs: self.mission.activity_duration_in_secs,
            location_name: self.location.name().to_string(),
            events: self.mission.events.clone(),
        }
    }

    /// Push the marker (or a hazard event) closing the current travel leg.
    fn push_travel_marker(&mut self, leg: TravelLeg) {
        if let Some(event) = self.phases.travel_event(&mut self.rng, leg) {
            debug!(mission = %self.mission.id, event_type = ?event.event_type, "travel hazard");
            self.mission.events.push(event);
            return;
        }
        let event_type = match leg {
            TravelLeg::Outbound => EventType::ArrivalAtLocation,
            TravelLeg::Return => EventType::ReturnedToStation,
        };
        self.mission
            .events
            .push(Event::marker(event_type, self.mission.current_objective_time));
    }

    /// `EnRoute` to `InProgress`: narrate the arrival, fix the actual
    /// activity duration, and schedule the activity's end.
    fn begin_activity(&mut self, arrival_time: DateTime<Utc>) -> Result<(), MissionError> {
        let plan = self
            .phases
            .start_activity(self.mission, self.ship, self.location)?;
        if !timeline::rewrite_last_message(&mut self.mission.events, plan.arrival_message) {
            return Err(MissionError::EmptyTimeline {
                mission: self.mission.id,
            });
        }

        let activity_end = add_secs(arrival_time, plan.duration_in_secs)?;
        self.mission.activity_duration_in_secs = plan.duration_in_secs;
        self.mission.current_objective_time = activity_end;
        self.mission.current_status = MissionStatus::InProgress;
        self.mission
            .events
            .push(Event::marker(EventType::ActivityComplete, activity_end));
        Ok(())
    }

    /// `InProgress` to `Returning`: apply the activity's effects, narrate
    /// its outcome, and schedule the homebound leg.
    fn complete_activity(&mut self, completed_at: DateTime<Utc>) -> Result<(), MissionError> {
        let message = self
            .phases
            .finish_activity(self.mission, self.ship, self.location)?;
        if !timeline::rewrite_last_message(&mut self.mission.events, message) {
            return Err(MissionError::EmptyTimeline {
                mission: self.mission.id,
            });
        }

        let return_eta = add_secs(completed_at, self.mission.travel_duration_in_secs)?;
        self.mission.current_status = MissionStatus::Returning;
        self.mission.current_objective_time = return_eta;
        self.mission.approx_end_time = return_eta;
        Ok(())
    }

    /// `Returning` to `Over`: narrate the docking and release the ship and
    /// the location for new missions.
    fn finish_return(&mut self) -> Result<(), MissionError> {
        let message = self.phases.end_message();
        if !timeline::rewrite_last_message(&mut self.mission.events, message) {
            return Err(MissionError::EmptyTimeline {
                mission: self.mission.id,
            });
        }
        self.mission.current_status = MissionStatus::Over;
        self.ship.set_current_mission(None);
        self.location.set_current_mission(None);
        info!(mission = %self.mission.id, "mission over, ship and location released");
        Ok(())
    }
}

/// Travel time for one leg, in whole seconds.
///
/// A leg takes `distance / speed` hours; the conversion to seconds uses
/// ceiling rounding so a partial second of travel is never dropped.
/// Distance 5 at speed 2 yields exactly 9000 seconds.
///
/// # Errors
///
/// Returns [`MissionError::InvalidShipSpeed`] for zero speed and
/// [`MissionError::ArithmeticOverflow`] on checked-math failure.
pub fn travel_duration_in_secs(speed: u32, distance_from_station: u32) -> Result<u64, MissionError> {
    if speed == 0 {
        return Err(MissionError::InvalidShipSpeed);
    }
    let distance_secs = u64::from(distance_from_station)
        .checked_mul(SECS_PER_HOUR)
        .ok_or(MissionError::ArithmeticOverflow)?;
    Ok(distance_secs.div_ceil(u64::from(speed)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travel_time_scales_with_distance_and_speed() {
        // The canonical ratio: distance 5 at speed 2 is 2.5 hours.
        assert_eq!(travel_duration_in_secs(2, 5).ok(), Some(9000));
        assert_eq!(travel_duration_in_secs(1, 1).ok(), Some(3600));
        assert_eq!(travel_duration_in_secs(36, 1).ok(), Some(100));
    }

    #[test]
    fn travel_time_rounds_partial_seconds_up() {
        // 1 / 7 hours = 514.28... seconds -> 515.
        assert_eq!(travel_duration_in_secs(7, 1).ok(), Some(515));
    }

    #[test]
    fn zero_speed_is_rejected() {
        assert!(travel_duration_in_secs(0, 5).is_err());
    }
}
