//! neodb - Search and explore near-Earth objects and their close approaches
//!
//! Loads a NEO catalog (CSV) and close approach data (JSON), links them into
//! an in-memory `NeoDatabase`, and answers lookups and filtered queries.

pub mod cli;
pub mod database;
pub mod extract;
pub mod filters;
pub mod model;
pub mod observability;
pub mod write;

pub use database::{LinkOptions, NeoDatabase, Query, QueryStats};
pub use extract::{load_approaches, load_neos};
pub use filters::{create_filters, limit, FilterOptions, Filters};
pub use model::{ApproachView, CloseApproach, NearEarthObject};
pub use write::{write_to_csv, write_to_file, write_to_json};
