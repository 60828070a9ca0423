//! Source dataset loaders
//!
//! - `load_neos`: NEO catalog (CSV)
//! - `load_approaches`: close approach data (JSON)
//!
//! Loaders return unlinked entities in source order; `NeoDatabase` links
//! them. The file handle is held only for the duration of the parse.

mod approaches;
mod errors;
mod neos;

pub use approaches::{load_approaches, read_approaches};
pub use errors::{ExtractError, ExtractResult};
pub use neos::{load_neos, read_neos};
