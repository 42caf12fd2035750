//! Mission progression engine for the Starbase simulation.
//!
//! Missions are long-running, asynchronous undertakings whose progress
//! is measured in wall-clock time but whose state is only materialized
//! lazily, on read. No daemon ticks the simulation: a single
//! [`MissionManager::update_status`] call jumps from the last known
//! state to the correct current state, however many phase boundaries
//! have been crossed since the last observation.
//!
//! # Modules
//!
//! - [`clock`] -- injectable time source and checked temporal arithmetic.
//! - [`error`] -- [`MissionError`], every way an operation can fail.
//! - [`timeline`] -- peek/push/pop/rewrite mechanics for the event log.
//! - [`manager`] -- the phase-transition driver and the
//!   [`MissionPhases`] strategy seam.
//! - [`mining`] -- the mining specialization: duration/yield math,
//!   depletion and storage-full handling, abort yields.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use starbase_missions::clock::SystemClock;
//! use starbase_missions::mining::{MiningPhases, start_mining_mission};
//! use starbase_missions::manager::MissionManager;
//! use starbase_ships::MinerShip;
//! use starbase_world::Location;
//! use starbase_types::ResourceType;
//!
//! # fn main() -> Result<(), starbase_missions::MissionError> {
//! let mut ship = MinerShip::new("Built2Mine", 2, 5, 30);
//! let mut location = Location::new("Morpheus", 1, ResourceType::Metal, 2000);
//! let clock = SystemClock;
//!
//! let mut mission = start_mining_mission(&mut ship, &mut location, 1800, &clock)?;
//!
//! // Later, on any read:
//! let mut manager = MissionManager::new(
//!     &mut mission,
//!     &mut ship,
//!     &mut location,
//!     MiningPhases,
//!     StdRng::seed_from_u64(0),
//! );
//! manager.update_status(chrono::Utc::now())?;
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod error;
pub mod manager;
pub mod mining;
pub mod timeline;

// Re-export primary types at crate root.
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::MissionError;
pub use manager::{ActivityPlan, MissionManager, MissionPhases, TravelLeg, travel_duration_in_secs};
pub use mining::{MiningMissionManager, MiningPhases, mined_quantity, start_mining_mission};
