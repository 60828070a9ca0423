//! Observable events for neodb
//!
//! Events are explicit and typed. Scoped phases (load, link, write) emit
//! `*_BEGIN` / `*_COMPLETE` through `ObservationScope` instead.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration resolved
    ConfigLoaded,
    /// Indexes built and approaches linked
    DatabaseLinked,
    /// Duplicate designation kept in lenient mode
    DuplicateDesignation,
    /// Two NEOs share a name; the later one wins the name index
    NameCollision,
    /// Filter bounds cannot all hold
    ContradictoryFilters,
    /// Query stream consumed
    QueryComplete,
    /// Lookup found nothing
    LookupMiss,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatabaseLinked => "DATABASE_LINKED",
            Event::DuplicateDesignation => "DUPLICATE_DESIGNATION",
            Event::NameCollision => "NAME_COLLISION",
            Event::ContradictoryFilters => "CONTRADICTORY_FILTERS",
            Event::QueryComplete => "QUERY_COMPLETE",
            Event::LookupMiss => "LOOKUP_MISS",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::DuplicateDesignation | Event::ContradictoryFilters => Severity::Warn,
            Event::NameCollision | Event::LookupMiss => Severity::Trace,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
