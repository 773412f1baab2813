//! Event classifier — maps journey steps to descriptive backend event-name
//! strings for documentation and side panels.

pub mod hint;

pub use hint::event_hint;
