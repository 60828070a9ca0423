//! Linked view of a close approach and its NEO
//!
//! Query results are `ApproachView`s: a borrowed approach paired with the
//! NEO it was linked to. The view carries the two serialization adapters:
//! a nested document for JSON output and a flat row for CSV output.

use std::fmt;

use serde::Serialize;

use super::approach::{ApproachId, CloseApproach};
use super::neo::{NearEarthObject, NeoRecord};

/// Column order of the row-oriented output
pub const ROW_FIELDS: [&str; 7] = [
    "datetime_utc",
    "distance_au",
    "velocity_km_s",
    "designation",
    "name",
    "diameter_km",
    "potentially_hazardous",
];

/// A close approach together with its linked NEO
#[derive(Debug, Clone, Copy)]
pub struct ApproachView<'a> {
    id: ApproachId,
    approach: &'a CloseApproach,
    neo: &'a NearEarthObject,
}

impl<'a> ApproachView<'a> {
    pub(crate) fn new(
        id: ApproachId,
        approach: &'a CloseApproach,
        neo: &'a NearEarthObject,
    ) -> Self {
        debug_assert_eq!(approach.designation(), neo.designation());
        Self { id, approach, neo }
    }

    /// Handle of the approach in its database
    pub fn id(&self) -> ApproachId {
        self.id
    }

    /// The close approach
    pub fn approach(&self) -> &'a CloseApproach {
        self.approach
    }

    /// The NEO making the approach
    pub fn neo(&self) -> &'a NearEarthObject {
        self.neo
    }

    /// Nested document: approach attributes plus an `neo` sub-document
    pub fn serialize(&self) -> ApproachDocument<'a> {
        ApproachDocument {
            datetime_utc: self.approach.time_str(),
            distance_au: self.approach.distance(),
            velocity_km_s: self.approach.velocity(),
            neo: self.neo.serialize(),
        }
    }

    /// Flat row in `ROW_FIELDS` order
    pub fn to_row(&self) -> ApproachRow<'a> {
        let neo = self.neo.serialize();
        ApproachRow {
            datetime_utc: self.approach.time_str(),
            distance_au: self.approach.distance(),
            velocity_km_s: self.approach.velocity(),
            designation: neo.designation,
            name: neo.name,
            diameter_km: format_diameter(neo.diameter_km),
            potentially_hazardous: if neo.potentially_hazardous {
                "True"
            } else {
                "False"
            },
        }
    }
}

impl fmt::Display for ApproachView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.approach.time_str(),
            self.neo.fullname(),
            self.approach.distance(),
            self.approach.velocity()
        )
    }
}

/// Document-oriented form of an approach
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApproachDocument<'a> {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub neo: NeoRecord<'a>,
}

/// Row-oriented form of an approach
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApproachRow<'a> {
    pub datetime_utc: String,
    pub distance_au: f64,
    pub velocity_km_s: f64,
    pub designation: &'a str,
    pub name: &'a str,
    pub diameter_km: String,
    pub potentially_hazardous: &'static str,
}

fn format_diameter(diameter: f64) -> String {
    if diameter.is_nan() {
        "nan".to_string()
    } else {
        format!("{:?}", diameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(neo: (&str, &str, &str, &str)) -> (NearEarthObject, CloseApproach) {
        let neo = NearEarthObject::from_source(neo.0, neo.1, neo.2, neo.3).unwrap();
        let ca =
            CloseApproach::from_source(neo.designation(), "2020-Jan-01 12:00", "0.05", "20.0")
                .unwrap();
        (neo, ca)
    }

    #[test]
    fn test_row_for_named_hazardous() {
        let (neo, ca) = pair(("1999 RQ36", "Bennu", "Y", "0.492"));
        let row = ApproachView::new(ApproachId(0), &ca, &neo).to_row();

        assert_eq!(row.datetime_utc, "2020-01-01 12:00");
        assert_eq!(row.distance_au, 0.05);
        assert_eq!(row.velocity_km_s, 20.0);
        assert_eq!(row.designation, "1999 RQ36");
        assert_eq!(row.name, "Bennu");
        assert_eq!(row.diameter_km, "0.492");
        assert_eq!(row.potentially_hazardous, "True");
    }

    #[test]
    fn test_row_for_unnamed_unknown_diameter() {
        let (neo, ca) = pair(("2020 AA", "", "", ""));
        let row = ApproachView::new(ApproachId(0), &ca, &neo).to_row();

        assert_eq!(row.name, "");
        assert_eq!(row.diameter_km, "nan");
        assert_eq!(row.potentially_hazardous, "False");
    }

    #[test]
    fn test_whole_diameter_keeps_decimal_point() {
        let (neo, ca) = pair(("X", "", "", "1"));
        let row = ApproachView::new(ApproachId(0), &ca, &neo).to_row();
        assert_eq!(row.diameter_km, "1.0");
    }

    #[test]
    fn test_document_shape() {
        let (neo, ca) = pair(("433", "Eros", "", "16.84"));
        let doc = ApproachView::new(ApproachId(0), &ca, &neo).serialize();
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["datetime_utc"], "2020-01-01 12:00");
        assert_eq!(json["distance_au"], 0.05);
        assert_eq!(json["velocity_km_s"], 20.0);
        assert_eq!(json["neo"]["designation"], "433");
        assert_eq!(json["neo"]["name"], "Eros");
        assert_eq!(json["neo"]["diameter_km"], 16.84);
        assert_eq!(json["neo"]["potentially_hazardous"], false);
    }

    #[test]
    fn test_display() {
        let (neo, ca) = pair(("2020 AA", "", "", ""));
        let view = ApproachView::new(ApproachId(0), &ca, &neo);
        assert_eq!(
            view.to_string(),
            "On 2020-01-01 12:00, '2020 AA' approaches Earth at a distance of 0.05 au and a velocity of 20.00 km/s."
        );
    }
}
