//! Miner ships and storage accounting for the Starbase simulation.
//!
//! This crate provides the ship-side collaborator the mission engine
//! drives: the [`MinerShip`] with its cargo hold, speed, drill rate, and
//! one-mission-at-a-time slot. The engine only ever sees the capability
//! contracts from `starbase-types`; everything else here (naming, serde,
//! hold internals) exists for the surrounding station layers.
//!
//! # Modules
//!
//! - [`ship`] -- [`MinerShip`], [`ShipStorage`], capability impls.
//! - [`storage`] -- checked cargo-hold accounting primitives.

pub mod ship;
pub mod storage;

// Re-export primary types at crate root.
pub use ship::{MinerShip, ShipStorage};
