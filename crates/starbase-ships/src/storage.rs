//! Storage (cargo hold) operations for ships.
//!
//! A ship's hold has a fixed capacity shared by all resource types. This
//! module provides the checked accounting primitives -- no silent
//! overflows, no panics. Capacity itself comes from the (out-of-scope)
//! upgrade catalog; here it is just a number on the hold.

use std::collections::BTreeMap;

use starbase_types::{ResourceType, StorageError};

/// Compute the total number of units held, across all resource types.
///
/// Returns `None` if the sum overflows `u32`.
pub fn total_stored(contents: &BTreeMap<ResourceType, u32>) -> Option<u32> {
    let mut total: u32 = 0;
    for qty in contents.values() {
        total = total.checked_add(*qty)?;
    }
    Some(total)
}

/// Compute the remaining free space given the hold's capacity.
///
/// A hold holding more than its capacity (which the deposit path never
/// produces) reports zero free space rather than underflowing.
pub fn empty_space(contents: &BTreeMap<ResourceType, u32>, capacity: u32) -> Option<u32> {
    let stored = total_stored(contents)?;
    Some(capacity.saturating_sub(stored))
}

/// Deposit `quantity` units of `resource` into the hold.
///
/// Fails if the deposit would exceed `capacity`; the hold is left
/// untouched on failure.
pub fn deposit(
    contents: &mut BTreeMap<ResourceType, u32>,
    capacity: u32,
    resource: ResourceType,
    quantity: u32,
) -> Result<(), StorageError> {
    let free_space = empty_space(contents, capacity).ok_or(StorageError::ArithmeticOverflow)?;

    if quantity > free_space {
        return Err(StorageError::Overflow {
            resource,
            quantity,
            free_space,
        });
    }

    let entry = contents.entry(resource).or_insert(0);
    *entry = entry
        .checked_add(quantity)
        .ok_or(StorageError::ArithmeticOverflow)?;

    Ok(())
}
