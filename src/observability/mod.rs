//! Observability for neodb
//!
//! - Structured logging (JSON lines on stderr)
//! - Typed lifecycle events
//! - Scope-based begin/complete logging
//!
//! # Usage
//!
//! ```ignore
//! use neodb::observability::{log_event, Event, ObservationScope};
//!
//! let scope = ObservationScope::with_fields("LOAD_NEOS", &[("path", "neos.csv")]);
//! // ... parse ...
//! scope.complete(&[("count", "23967")]);
//!
//! log_event(Event::QueryComplete, &[("matched", "12")]);
//! ```

mod events;
mod logger;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use scope::ObservationScope;

/// Logs a typed event at its own severity
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
