//! Close approach entity
//!
//! A `CloseApproach` records one pass of an NEO near Earth: the UTC instant
//! (minute precision), the nominal distance in au and the relative velocity
//! in km/s. Until linked it only knows its NEO by designation; the database
//! installs the resolved `NeoId` exactly once.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::errors::{ModelError, ModelResult};
use super::neo::NeoId;

/// Source time format, e.g. `2021-Sep-24 16:42`
pub const SOURCE_TIME_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Output time format, e.g. `2021-09-24 16:42`
pub const OUTPUT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Handle of a close approach inside the database that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ApproachId(pub(crate) usize);

impl ApproachId {
    /// Position of the approach in the database's storage order
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A close approach to Earth by an NEO
#[derive(Debug, Clone, PartialEq)]
pub struct CloseApproach {
    designation: String,
    time: DateTime<Utc>,
    distance: f64,
    velocity: f64,
    neo: Option<NeoId>,
}

impl CloseApproach {
    /// Creates an unlinked close approach.
    pub fn new(
        designation: impl Into<String>,
        time: DateTime<Utc>,
        distance: f64,
        velocity: f64,
    ) -> ModelResult<Self> {
        let designation = designation.into();
        if designation.is_empty() {
            return Err(ModelError::EmptyDesignation);
        }

        Ok(Self {
            designation,
            time,
            distance: check_non_negative("distance", distance)?,
            velocity: check_non_negative("velocity", velocity)?,
            neo: None,
        })
    }

    /// Creates a close approach from the raw text of a source tuple.
    pub fn from_source(
        designation: &str,
        time: &str,
        distance: &str,
        velocity: &str,
    ) -> ModelResult<Self> {
        Self::new(
            designation,
            parse_source_time(time)?,
            parse_real("distance", distance)?,
            parse_real("velocity", velocity)?,
        )
    }

    /// Designation of the NEO this approach belongs to
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// UTC instant of closest approach
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Calendar date (UTC) of closest approach
    pub fn date(&self) -> NaiveDate {
        self.time.date_naive()
    }

    /// Nominal approach distance in au
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Relative approach velocity in km/s
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Owning NEO, once linked
    pub fn neo(&self) -> Option<NeoId> {
        self.neo
    }

    /// Approach time as `YYYY-MM-DD HH:MM`
    pub fn time_str(&self) -> String {
        self.time.format(OUTPUT_TIME_FORMAT).to_string()
    }

    pub(crate) fn link(&mut self, neo: NeoId) {
        debug_assert!(self.neo.is_none(), "approach linked twice");
        self.neo = Some(neo);
    }
}

/// Parses the compact source form `YYYY-MMM-DD HH:MM` as a UTC instant.
pub fn parse_source_time(s: &str) -> ModelResult<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, SOURCE_TIME_FORMAT)
        .map(|t| t.and_utc())
        .map_err(|_| ModelError::InvalidTime(s.to_string()))
}

pub(crate) fn parse_real(field: &'static str, s: &str) -> ModelResult<f64> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ModelError::InvalidNumber {
            field,
            value: s.to_string(),
        })
}

fn check_non_negative(field: &'static str, value: f64) -> ModelResult<f64> {
    if value.is_nan() {
        return Err(ModelError::InvalidNumber {
            field,
            value: value.to_string(),
        });
    }
    if value < 0.0 {
        return Err(ModelError::NegativeValue { field, value });
    }
    Ok(value)
}
