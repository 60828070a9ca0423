//! NEO database subsystem
//!
//! Holds the linked NEO/approach graph and answers point lookups and
//! filtered approach queries.
//!
//! # Invariants
//!
//! - Every approach resolves to exactly one NEO with the same designation
//! - Every NEO lists exactly the approaches that carry its designation
//! - Lookups never fail; a missing key yields `None`
//! - Queries scan linearly in storage order and never fail

mod database;
mod errors;
mod query;

pub use database::{LinkOptions, NeoDatabase};
pub use errors::{DatabaseError, DatabaseResult};
pub use query::{Query, QueryStats};
