//! Query filters for neodb
//!
//! `create_filters` turns user options into a `Filters` bundle consumed by
//! `NeoDatabase::query`. `limit` truncates the resulting stream.
//!
//! # Semantics
//!
//! - Absent bound: sub-filter inactive, always passes
//! - Numeric bounds are inclusive; NaN fails every active bound
//! - Date bounds compare calendar dates (UTC) only
//! - All sub-filters combine with AND

mod bundle;
mod create;
mod errors;
mod limit;

pub use bundle::{DateFilter, Filters, HazardFilter, RangeFilter};
pub use create::{create_filters, parse_bound, parse_date, FilterOptions, FILTER_DATE_FORMAT};
pub use errors::{FilterError, FilterResult};
pub use limit::limit;
