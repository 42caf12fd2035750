//! Event timeline mechanics.
//!
//! The engine addresses a mission's timeline only through these
//! operations: peek at the last event, push a new one, pop the last one,
//! and rewrite the last event's message in place. No random access or
//! reordering exists, and nothing here ever touches an event that is not
//! at the end of the sequence.
//!
//! The rewrite operation is how a provisional marker (pushed with
//! `message: None` when the phase's outcome is not yet known) becomes a
//! fully narrated historical record once its phase actually elapses.

use starbase_types::Event;

/// The last event on the timeline, if any.
pub const fn peek_last(events: &[Event]) -> Option<&Event> {
    events.last()
}

/// Remove and return the last event on the timeline.
pub fn pop_last(events: &mut Vec<Event>) -> Option<Event> {
    events.pop()
}

/// Replace the last event's message in place.
///
/// Returns `false` (and changes nothing) if the timeline is empty.
pub fn rewrite_last_message(events: &mut [Event], message: String) -> bool {
    match events.last_mut() {
        Some(event) => {
            event.message = Some(message);
            true
        }
        None => false,
    }
}
