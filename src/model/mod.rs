//! Record model for neodb
//!
//! Two entities, immutable once linked:
//!
//! - `NearEarthObject`: keyed by its primary designation
//! - `CloseApproach`: refers to its NEO by designation until linked
//!
//! # Ownership
//!
//! Neither entity owns the other. `NeoDatabase` owns both collections and
//! installs the cross references as index handles (`NeoId`, `ApproachId`).

mod approach;
mod errors;
mod neo;
mod view;

pub use approach::{
    parse_source_time, ApproachId, CloseApproach, OUTPUT_TIME_FORMAT, SOURCE_TIME_FORMAT,
};
pub use errors::{ModelError, ModelResult};
pub use neo::{NearEarthObject, NeoId, NeoRecord};
pub use view::{ApproachDocument, ApproachRow, ApproachView, ROW_FIELDS};
