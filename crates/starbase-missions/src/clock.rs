//! Clock abstraction and checked temporal arithmetic.
//!
//! The engine never reads the system time directly; a [`Clock`] is
//! injected wherever "now" matters so that catch-up behavior is
//! deterministic under test. Production callers use [`SystemClock`];
//! tests pin time with [`FixedClock`].

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::MissionError;

/// A source of the current instant.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Add a whole-second offset to an instant with overflow checking.
///
/// # Errors
///
/// Returns [`MissionError::ArithmeticOverflow`] if the offset does not
/// fit a signed delta or the resulting instant is out of range.
pub fn add_secs(instant: DateTime<Utc>, secs: u64) -> Result<DateTime<Utc>, MissionError> {
    let delta = i64::try_from(secs)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .ok_or(MissionError::ArithmeticOverflow)?;
    instant
        .checked_add_signed(delta)
        .ok_or(MissionError::ArithmeticOverflow)
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_instant() {
        let instant = DateTime::<Utc>::UNIX_EPOCH;
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn add_secs_advances_by_whole_seconds() {
        let base = DateTime::<Utc>::UNIX_EPOCH;
        let later = add_secs(base, 9000).ok();
        assert_eq!(later, Some(base + TimeDelta::seconds(9000)));
    }

    #[test]
    fn add_secs_rejects_absurd_offsets() {
        let base = DateTime::<Utc>::UNIX_EPOCH;
        assert!(add_secs(base, u64::MAX).is_err());
    }
}
