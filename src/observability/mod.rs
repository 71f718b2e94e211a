//! Observability for cadcad spaces
//!
//! Structured JSON log lines for the few things worth observing here:
//! registrations, rejected data and trajectory growth.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. Logging never fails the caller
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```
//! use cadcad_spaces::observability::{log_event_with_fields, Event, Logger, Severity};
//!
//! Logger::set_min_severity(Severity::Warn);
//! log_event_with_fields(Event::SpaceRegistered, &[("space", "Prey")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

#[cfg(test)]
pub(crate) use logger::take_captured;

/// Log an event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
