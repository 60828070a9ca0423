//! Near-Earth object entity
//!
//! A `NearEarthObject` carries a unique primary designation, an optional
//! name, a diameter in kilometers (NaN when unknown) and the
//! potentially-hazardous flag. Its approach list starts empty and is filled
//! exactly once by `NeoDatabase` during linking.

use std::fmt;

use serde::Serialize;

use super::approach::{parse_real, ApproachId};
use super::errors::{ModelError, ModelResult};

/// Handle of an NEO inside the database that owns it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeoId(pub(crate) usize);

impl NeoId {
    /// Position of the NEO in the database's storage order
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A near-Earth object
#[derive(Debug, Clone, PartialEq)]
pub struct NearEarthObject {
    designation: String,
    name: Option<String>,
    diameter: f64,
    hazardous: bool,
    approaches: Vec<ApproachId>,
}

impl NearEarthObject {
    /// Creates an unlinked NEO.
    ///
    /// An empty name is canonicalized to `None`. A missing diameter must be
    /// passed as `f64::NAN`, never as zero.
    pub fn new(
        designation: impl Into<String>,
        name: Option<String>,
        diameter: f64,
        hazardous: bool,
    ) -> ModelResult<Self> {
        let designation = designation.into();
        if designation.is_empty() {
            return Err(ModelError::EmptyDesignation);
        }
        if diameter < 0.0 {
            return Err(ModelError::NegativeValue {
                field: "diameter",
                value: diameter,
            });
        }

        Ok(Self {
            designation,
            name: name.filter(|n| !n.is_empty()),
            diameter,
            hazardous,
            approaches: Vec::new(),
        })
    }

    /// Creates an NEO from the raw column text of the source catalog.
    ///
    /// - `name`: empty means unnamed
    /// - `hazardous`: `"Y"` means hazardous, anything else does not
    /// - `diameter`: empty means unknown (NaN)
    pub fn from_source(
        designation: &str,
        name: &str,
        hazardous: &str,
        diameter: &str,
    ) -> ModelResult<Self> {
        let diameter = if diameter.trim().is_empty() {
            f64::NAN
        } else {
            parse_real("diameter", diameter)?
        };

        let name = (!name.is_empty()).then(|| name.to_string());

        Self::new(designation, name, diameter, hazardous == "Y")
    }

    /// Primary designation (join key)
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// IAU name, if the object has one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Diameter in kilometers, NaN when unknown
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Whether the diameter is known
    pub fn has_diameter(&self) -> bool {
        !self.diameter.is_nan()
    }

    /// Potentially-hazardous flag
    pub fn hazardous(&self) -> bool {
        self.hazardous
    }

    /// Handles of this NEO's close approaches, in link order
    pub fn approaches(&self) -> &[ApproachId] {
        &self.approaches
    }

    /// Designation followed by the name in parentheses, when named
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    /// Flat attribute record used by both output formats
    pub fn serialize(&self) -> NeoRecord<'_> {
        NeoRecord {
            designation: &self.designation,
            name: self.name.as_deref().unwrap_or(""),
            diameter_km: self.diameter,
            potentially_hazardous: self.hazardous,
        }
    }

    pub(crate) fn push_approach(&mut self, id: ApproachId) {
        self.approaches.push(id);
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEO {} has ", self.fullname())?;
        if self.has_diameter() {
            write!(f, "a diameter of {:.3} km", self.diameter)?;
        } else {
            write!(f, "an unknown diameter")?;
        }
        let verb = if self.hazardous { "is" } else { "is not" };
        write!(f, " and {} potentially hazardous.", verb)
    }
}

/// Serialized view of an NEO's attributes.
///
/// An absent name serializes as the empty string. A NaN diameter
/// serializes as JSON `null`; the row writer renders it as `nan`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NeoRecord<'a> {
    pub designation: &'a str,
    pub name: &'a str,
    pub diameter_km: f64,
    pub potentially_hazardous: bool,
}
