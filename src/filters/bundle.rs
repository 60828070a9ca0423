//! The filter bundle
//!
//! A static record of optional bounds. Every sub-filter is inactive while
//! its bounds are absent, and an inactive sub-filter always passes.
//! Evaluation is a fixed AND over the five sub-filters; there is no
//! open-ended predicate list and no dynamic dispatch.

use std::fmt;

use chrono::NaiveDate;

use crate::model::{CloseApproach, NearEarthObject};

use super::errors::{FilterError, FilterResult};

/// Inclusive numeric range on one attribute
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeFilter {
    name: &'static str,
    min: Option<f64>,
    max: Option<f64>,
}

impl RangeFilter {
    pub fn new(name: &'static str, min: Option<f64>, max: Option<f64>) -> Self {
        Self { name, min, max }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Returns true if either bound is present
    pub fn is_active(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    /// Checks a value against the active bounds.
    ///
    /// Any comparison against NaN fails, so a NaN value is rejected by every
    /// active bound and accepted only when the filter is inactive.
    pub fn admits(&self, value: f64) -> bool {
        if let Some(min) = self.min {
            if !(value >= min) {
                return false;
            }
        }
        if let Some(max) = self.max {
            if !(value <= max) {
                return false;
            }
        }
        true
    }

    fn check_bounds(&self) -> FilterResult<()> {
        match (self.min, self.max) {
            (Some(min), Some(max)) if min > max => Err(FilterError::ContradictoryBounds {
                filter: self.name,
                min: min.to_string(),
                max: max.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for RangeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(min={}, max={})",
            self.name,
            display_opt(self.min),
            display_opt(self.max)
        )
    }
}

/// Calendar-date filter: an exact date and an inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFilter {
    name: &'static str,
    on: Option<NaiveDate>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateFilter {
    pub fn new(on: Option<NaiveDate>, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            name: "date",
            on,
            start,
            end,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn on(&self) -> Option<NaiveDate> {
        self.on
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_active(&self) -> bool {
        self.on.is_some() || self.start.is_some() || self.end.is_some()
    }

    /// Compares calendar dates only; time of day never matters.
    pub fn admits(&self, date: NaiveDate) -> bool {
        self.on.map_or(true, |on| date == on)
            && self.start.map_or(true, |start| date >= start)
            && self.end.map_or(true, |end| date <= end)
    }

    fn check_bounds(&self) -> FilterResult<()> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start > end => Err(FilterError::ContradictoryBounds {
                filter: self.name,
                min: start.to_string(),
                max: end.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(on={}, start={}, end={})",
            self.name,
            display_opt(self.on),
            display_opt(self.start),
            display_opt(self.end)
        )
    }
}

/// Potentially-hazardous flag filter.
///
/// `Some(false)` excludes hazardous objects; `None` is inactive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HazardFilter {
    name: &'static str,
    hazardous: Option<bool>,
}

impl HazardFilter {
    pub fn new(hazardous: Option<bool>) -> Self {
        Self {
            name: "hazardous",
            hazardous,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn hazardous(&self) -> Option<bool> {
        self.hazardous
    }

    pub fn is_active(&self) -> bool {
        self.hazardous.is_some()
    }

    pub fn admits(&self, hazardous: bool) -> bool {
        self.hazardous.map_or(true, |wanted| hazardous == wanted)
    }
}

impl fmt::Display for HazardFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, display_opt(self.hazardous))
    }
}

/// All criteria of one query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Filters {
    pub distance: RangeFilter,
    pub diameter: RangeFilter,
    pub velocity: RangeFilter,
    pub date: DateFilter,
    pub hazard: HazardFilter,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            distance: RangeFilter::new("distance", None, None),
            diameter: RangeFilter::new("diameter", None, None),
            velocity: RangeFilter::new("velocity", None, None),
            date: DateFilter::new(None, None, None),
            hazard: HazardFilter::new(None),
        }
    }
}

impl Filters {
    /// Bundle with every sub-filter inactive
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true if at least one sub-filter has a bound
    pub fn is_active(&self) -> bool {
        self.distance.is_active()
            || self.diameter.is_active()
            || self.velocity.is_active()
            || self.date.is_active()
            || self.hazard.is_active()
    }

    /// Checks an approach and its NEO against every sub-filter (AND).
    pub fn matches(&self, approach: &CloseApproach, neo: &NearEarthObject) -> bool {
        self.distance.admits(approach.distance())
            && self.velocity.admits(approach.velocity())
            && self.diameter.admits(neo.diameter())
            && self.date.admits(approach.date())
            && self.hazard.admits(neo.hazardous())
    }

    /// Reports the first pair of contradictory bounds (min > max), if any.
    pub fn check_bounds(&self) -> FilterResult<()> {
        self.distance.check_bounds()?;
        self.diameter.check_bounds()?;
        self.velocity.check_bounds()?;
        self.date.check_bounds()
    }
}

impl fmt::Display for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Filters[{}, {}, {}, {}, {}]",
            self.distance, self.diameter, self.velocity, self.date, self.hazard
        )
    }
}

fn display_opt<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "none".to_string(), |v| v.to_string())
}
