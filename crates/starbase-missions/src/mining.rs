//! Mining mission specialization: duration and yield calculations,
//! reserve depletion, storage-full early termination, and narration.
//!
//! All rate math is integer-exact. Rates are quoted in units per hour
//! and durations in whole seconds, so a yield is
//! `rate * secs / 3600` rounded down, and the time needed to reach a
//! quantity boundary is `quantity * 3600 / rate` rounded up. The
//! floor/ceil asymmetry means the engine never promises more resource
//! than time allows while never under-allocating the time needed to
//! reach a capacity or reserve boundary.

use starbase_types::{
    Event, EventType, LocationCapability, MinerShipCapability, Mission, MissionId, MissionStatus,
    MissionType, ResourceType,
};
use tracing::info;

use crate::clock::{Clock, add_secs};
use crate::error::MissionError;
use crate::manager::{
    ActivityPlan, MissionManager, MissionPhases, SECS_PER_HOUR, travel_duration_in_secs,
};

/// A [`MissionManager`] wired with the mining phase behaviors.
pub type MiningMissionManager<'a, S, L> = MissionManager<'a, S, L, MiningPhases>;

/// Phase behaviors for the mining use case.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiningPhases;

/// What one completed (or truncated) mining stint produced.
struct MiningYield {
    mined: u32,
    resource: ResourceType,
    depleted: bool,
}

impl<S, L> MissionPhases<S, L> for MiningPhases
where
    S: MinerShipCapability,
    L: LocationCapability,
{
    fn start_activity(
        &mut self,
        mission: &Mission,
        ship: &S,
        location: &L,
    ) -> Result<ActivityPlan, MissionError> {
        let duration_in_secs = mining_duration_in_secs(
            mission.activity_duration_in_secs,
            ship.extraction_rate(),
            ship.empty_storage_space(),
            location.resource_reserve(),
        )?;
        Ok(ActivityPlan {
            arrival_message: format!(
                "Arrived on {}. Starting mining operation.",
                location.name()
            ),
            duration_in_secs,
        })
    }

    fn finish_activity(
        &mut self,
        mission: &Mission,
        ship: &mut S,
        location: &mut L,
    ) -> Result<String, MissionError> {
        let haul = apply_mining_yield(mission, ship, location)?;
        // One narration per completion; depletion outranks a full hold.
        let message = if haul.depleted {
            format!(
                "Planet depleted. Mined {} {}(s). Returning to station.",
                haul.mined, haul.resource
            )
        } else if ship.empty_storage_space() == 0 {
            format!(
                "Storage is full. Mined {} {}(s). Returning to station.",
                haul.mined, haul.resource
            )
        } else {
            format!(
                "Mining complete. Mined {} {}(s). Returning to station.",
                haul.mined, haul.resource
            )
        };
        Ok(message)
    }

    fn abort_activity(
        &mut self,
        mission: &Mission,
        ship: &mut S,
        location: &mut L,
    ) -> Result<String, MissionError> {
        let haul = apply_mining_yield(mission, ship, location)?;
        Ok(format!(
            "Mission aborted by Command. Mined {} {}(s). Returning to station.",
            haul.mined, haul.resource
        ))
    }

    fn end_message(&self) -> String {
        String::from("Returned to station.")
    }
}

/// Start a mining mission against a location.
///
/// Validates that the ship is available, the location is unoccupied, and
/// the requested activity duration is positive -- before any mutation.
/// On success the mission record is created `EnRoute` with its start
/// event, and both the ship and the location are claimed.
///
/// # Errors
///
/// Returns [`MissionError::ShipUnavailable`],
/// [`MissionError::LocationOccupied`], or
/// [`MissionError::InvalidActivityDuration`] when a precondition fails.
pub fn start_mining_mission<S, L, C>(
    ship: &mut S,
    location: &mut L,
    activity_duration_in_secs: u64,
    clock: &C,
) -> Result<Mission, MissionError>
where
    S: MinerShipCapability,
    L: LocationCapability,
    C: Clock,
{
    if !ship.is_available() {
        return Err(MissionError::ShipUnavailable { ship: ship.id() });
    }
    if location.current_mission().is_some() {
        return Err(MissionError::LocationOccupied {
            location: location.id(),
        });
    }
    if activity_duration_in_secs == 0 {
        return Err(MissionError::InvalidActivityDuration {
            requested: activity_duration_in_secs,
        });
    }

    let start_time = clock.now();
    let travel = travel_duration_in_secs(ship.speed(), location.distance_from_station())?;
    let round_trip = travel
        .checked_mul(2)
        .and_then(|t| t.checked_add(activity_duration_in_secs))
        .ok_or(MissionError::ArithmeticOverflow)?;

    let id = MissionId::new();
    let mission = Mission {
        id,
        start_time,
        current_objective_time: add_secs(start_time, travel)?,
        approx_end_time: add_secs(start_time, round_trip)?,
        current_status: MissionStatus::EnRoute,
        mission_type: MissionType::Mining,
        travel_duration_in_secs: travel,
        activity_duration_in_secs,
        ship: ship.id(),
        location: location.id(),
        events: vec![Event::narrated(
            EventType::Start,
            start_time,
            format!("Left station for mining mission on {}.", location.name()),
        )],
    };

    ship.set_current_mission(Some(id));
    location.set_current_mission(Some(id));
    info!(mission = %id, ship = %ship.id(), location = %location.id(), "mining mission started");
    Ok(mission)
}

/// Units mined over a duration: `floor(rate * secs / 3600)`.
pub fn mined_quantity(extraction_rate: u32, duration_in_secs: u64) -> Result<u32, MissionError> {
    let unit_secs = u64::from(extraction_rate)
        .checked_mul(duration_in_secs)
        .ok_or(MissionError::ArithmeticOverflow)?;
    let mined = unit_secs
        .checked_div(SECS_PER_HOUR)
        .ok_or(MissionError::ArithmeticOverflow)?;
    u32::try_from(mined).map_err(|_| MissionError::ArithmeticOverflow)
}

/// Seconds needed to extract `quantity` units: `ceil(quantity * 3600 / rate)`.
fn secs_to_extract(quantity: u32, extraction_rate: u32) -> Result<u64, MissionError> {
    if extraction_rate == 0 {
        return Err(MissionError::InvalidExtractionRate);
    }
    let quantity_secs = u64::from(quantity)
        .checked_mul(SECS_PER_HOUR)
        .ok_or(MissionError::ArithmeticOverflow)?;
    Ok(quantity_secs.div_ceil(u64::from(extraction_rate)))
}

/// The actual mining duration: the requested one, unless the yield over
/// that time would outgrow the hold's free space or the site's reserve,
/// in which case mining stops at whichever boundary comes first.
fn mining_duration_in_secs(
    requested_secs: u64,
    extraction_rate: u32,
    free_space: u32,
    reserve: u32,
) -> Result<u64, MissionError> {
    let in_requested_time = mined_quantity(extraction_rate, requested_secs)?;
    if in_requested_time <= free_space && in_requested_time <= reserve {
        return Ok(requested_secs);
    }
    secs_to_extract(free_space.min(reserve), extraction_rate)
}

/// Apply one stint's yield: decrement the reserve, fill the hold.
///
/// The raw floor-formula yield is clamped to the remaining reserve and
/// the free space; ceiling-rounded durations can overshoot by one unit
/// at extraction rates above one unit per second, and the haul must
/// never exceed what the site holds or the hold can absorb.
fn apply_mining_yield<S, L>(
    mission: &Mission,
    ship: &mut S,
    location: &mut L,
) -> Result<MiningYield, MissionError>
where
    S: MinerShipCapability,
    L: LocationCapability,
{
    let reserve_before = location.resource_reserve();
    let raw = mined_quantity(ship.extraction_rate(), mission.activity_duration_in_secs)?;
    let mined = raw.min(reserve_before).min(ship.empty_storage_space());

    let resource = location.resource_type();
    location.set_resource_reserve(reserve_before.saturating_sub(mined));
    ship.deposit_resource(resource, mined)?;

    Ok(MiningYield {
        mined,
        resource,
        depleted: mined == reserve_before,
    })
}
