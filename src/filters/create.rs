//! Building a filter bundle from user options

use chrono::NaiveDate;

use super::bundle::{DateFilter, Filters, HazardFilter, RangeFilter};
use super::errors::{FilterError, FilterResult};

/// Input date format for filter options
pub const FILTER_DATE_FORMAT: &str = "%Y-%m-%d";

/// User-supplied query criteria. Every option defaults to absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub distance_min: Option<f64>,
    pub distance_max: Option<f64>,
    pub velocity_min: Option<f64>,
    pub velocity_max: Option<f64>,
    pub diameter_min: Option<f64>,
    pub diameter_max: Option<f64>,
    pub hazardous: Option<bool>,
}

/// Creates the filter bundle for `NeoDatabase::query`.
pub fn create_filters(options: &FilterOptions) -> Filters {
    Filters {
        distance: RangeFilter::new("distance", options.distance_min, options.distance_max),
        diameter: RangeFilter::new("diameter", options.diameter_min, options.diameter_max),
        velocity: RangeFilter::new("velocity", options.velocity_min, options.velocity_max),
        date: DateFilter::new(options.date, options.start_date, options.end_date),
        hazard: HazardFilter::new(options.hazardous),
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> FilterResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), FILTER_DATE_FORMAT)
        .map_err(|_| FilterError::InvalidDate(s.to_string()))
}

/// Coerces text to a non-negative real bound.
pub fn parse_bound(s: &str) -> FilterResult<f64> {
    let value = s
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .ok_or_else(|| FilterError::InvalidNumber(s.to_string()))?;

    if value < 0.0 {
        return Err(FilterError::NegativeBound(value));
    }
    Ok(value)
}
