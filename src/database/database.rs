//! In-memory NEO database
//!
//! Owns every NEO and close approach, the two primary-key indexes, and the
//! links between the collections.
//!
//! # Construction (single pass, O(|N| + |A|))
//!
//! 1. Index NEOs by designation (duplicates: error in strict mode,
//!    otherwise earlier occurrences are dropped)
//! 2. Index named NEOs by name (collisions: last write wins)
//! 3. Resolve each approach's designation, link both directions
//!
//! After construction the database is read-only.

use std::collections::HashMap;

use crate::filters::Filters;
use crate::model::{ApproachId, ApproachView, CloseApproach, NearEarthObject, NeoId};
use crate::observability::{log_event, Event};

use super::errors::{DatabaseError, DatabaseResult};
use super::query::Query;

/// Linking behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkOptions {
    /// Reject duplicate designations instead of keeping the last one
    pub strict_designations: bool,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            strict_designations: true,
        }
    }
}

/// A linked collection of NEOs and their close approaches
#[derive(Debug, Clone)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<String, NeoId>,
    by_name: HashMap<String, NeoId>,
}

impl NeoDatabase {
    /// Builds and links a database in strict mode.
    pub fn new(
        neos: Vec<NearEarthObject>,
        approaches: Vec<CloseApproach>,
    ) -> DatabaseResult<Self> {
        Self::with_options(neos, approaches, LinkOptions::default())
    }

    /// Builds and links a database.
    ///
    /// Entities come from the loaders unlinked: every NEO has no approaches
    /// and every approach has no NEO.
    pub fn with_options(
        mut neos: Vec<NearEarthObject>,
        mut approaches: Vec<CloseApproach>,
        options: LinkOptions,
    ) -> DatabaseResult<Self> {
        let mut by_designation = HashMap::with_capacity(neos.len());
        for (i, neo) in neos.iter().enumerate() {
            let previous = by_designation.insert(neo.designation().to_string(), NeoId(i));
            if previous.is_some() {
                if options.strict_designations {
                    return Err(DatabaseError::DataIntegrity {
                        designation: neo.designation().to_string(),
                    });
                }
                log_event(
                    Event::DuplicateDesignation,
                    &[("designation", neo.designation())],
                );
            }
        }

        // Replaced duplicates are dropped entirely; survivors keep input order.
        if by_designation.len() < neos.len() {
            let mut i = 0;
            neos.retain(|neo| {
                let kept = by_designation.get(neo.designation()) == Some(&NeoId(i));
                i += 1;
                kept
            });
            by_designation = neos
                .iter()
                .enumerate()
                .map(|(i, neo)| (neo.designation().to_string(), NeoId(i)))
                .collect();
        }

        let mut by_name = HashMap::new();
        for (i, neo) in neos.iter().enumerate() {
            if let Some(name) = neo.name() {
                if by_name.insert(name.to_string(), NeoId(i)).is_some() {
                    log_event(Event::NameCollision, &[("name", name)]);
                }
            }
        }

        for (i, approach) in approaches.iter_mut().enumerate() {
            let neo_id = by_designation
                .get(approach.designation())
                .copied()
                .ok_or_else(|| DatabaseError::DanglingReference {
                    designation: approach.designation().to_string(),
                    approach: i,
                })?;

            approach.link(neo_id);
            neos[neo_id.0].push_approach(ApproachId(i));
        }

        let neo_count = neos.len().to_string();
        let approach_count = approaches.len().to_string();
        log_event(
            Event::DatabaseLinked,
            &[
                ("approaches", approach_count.as_str()),
                ("neos", neo_count.as_str()),
            ],
        );

        Ok(Self {
            neos,
            approaches,
            by_designation,
            by_name,
        })
    }

    /// Exact-match lookup by primary designation
    pub fn by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .map(|id| &self.neos[id.0])
    }

    /// Exact-match lookup by name; unnamed NEOs are never matched
    pub fn by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name.get(name).map(|id| &self.neos[id.0])
    }

    /// Streams approaches that satisfy every active filter, in storage order
    pub fn query(&self, filters: &Filters) -> Query<'_> {
        Query::new(self, *filters)
    }

    /// All NEOs in storage order
    pub fn neos(&self) -> impl ExactSizeIterator<Item = &NearEarthObject> {
        self.neos.iter()
    }

    /// All close approaches in storage order
    pub fn approaches(&self) -> impl ExactSizeIterator<Item = &CloseApproach> {
        self.approaches.iter()
    }

    pub fn neo_count(&self) -> usize {
        self.neos.len()
    }

    pub fn approach_count(&self) -> usize {
        self.approaches.len()
    }

    /// NEO by handle
    pub fn neo(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.neos.get(id.0)
    }

    /// Close approach by handle
    pub fn approach(&self, id: ApproachId) -> Option<&CloseApproach> {
        self.approaches.get(id.0)
    }

    /// The NEO an approach was linked to.
    ///
    /// # Panics
    ///
    /// If the approach was never linked by a database. Every approach owned
    /// by a constructed `NeoDatabase` is linked.
    pub fn neo_of(&self, approach: &CloseApproach) -> &NearEarthObject {
        let id = approach
            .neo()
            .expect("close approach is not linked to an NEO");
        &self.neos[id.0]
    }

    /// An NEO's close approaches, paired with the NEO, in link order
    pub fn approaches_of<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = ApproachView<'a>> + 'a {
        neo.approaches()
            .iter()
            .map(move |&id| ApproachView::new(id, &self.approaches[id.0], neo))
    }

    pub(crate) fn approach_slice(&self) -> &[CloseApproach] {
        &self.approaches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neo(designation: &str, name: &str) -> NearEarthObject {
        NearEarthObject::from_source(designation, name, "", "").unwrap()
    }

    fn approach(designation: &str) -> CloseApproach {
        CloseApproach::from_source(designation, "2020-Jan-01 00:00", "0.1", "10").unwrap()
    }

    #[test]
    fn test_links_both_directions() {
        let db = NeoDatabase::new(
            vec![neo("A", "Alpha"), neo("B", "")],
            vec![approach("B"), approach("A"), approach("B")],
        )
        .unwrap();

        let b = db.by_designation("B").unwrap();
        assert_eq!(b.approaches(), &[ApproachId(0), ApproachId(2)]);
        for view in db.approaches_of(b) {
            assert_eq!(view.approach().designation(), "B");
            assert_eq!(view.neo().designation(), "B");
        }

        for ca in db.approaches() {
            assert_eq!(db.neo_of(ca).designation(), ca.designation());
        }
    }

    #[test]
    fn test_dangling_reference() {
        let err = NeoDatabase::new(vec![neo("A", "")], vec![approach("A"), approach("Z")])
            .unwrap_err();
        assert_eq!(
            err,
            DatabaseError::DanglingReference {
                designation: "Z".into(),
                approach: 1
            }
        );
    }

    #[test]
    fn test_duplicate_designation_strict() {
        let err = NeoDatabase::new(vec![neo("A", "One"), neo("A", "Two")], vec![]).unwrap_err();
        assert_eq!(err.code(), "NEO_DATA_INTEGRITY");
    }

    #[test]
    fn test_duplicate_designation_lenient_keeps_last() {
        let options = LinkOptions {
            strict_designations: false,
        };
        let db = NeoDatabase::with_options(
            vec![neo("A", "One"), neo("A", "Two")],
            vec![approach("A")],
            options,
        )
        .unwrap();

        let a = db.by_designation("A").unwrap();
        assert_eq!(a.name(), Some("Two"));
        assert_eq!(a.approaches().len(), 1);
        assert_eq!(db.neo_count(), 1);
        assert!(db.by_name("One").is_none());
        assert_eq!(db.neo(NeoId(0)).unwrap().name(), Some("Two"));
    }

    #[test]
    fn test_lenient_survivors_keep_input_order() {
        let options = LinkOptions {
            strict_designations: false,
        };
        let db = NeoDatabase::with_options(
            vec![neo("A", "One"), neo("B", ""), neo("A", "Two"), neo("C", "")],
            vec![approach("C"), approach("A")],
            options,
        )
        .unwrap();

        let order: Vec<_> = db.neos().map(|n| n.name().unwrap_or(n.designation())).collect();
        assert_eq!(order, ["B", "Two", "C"]);
        assert_eq!(db.by_designation("C").unwrap().approaches(), &[ApproachId(0)]);
        assert_eq!(db.by_designation("A").unwrap().approaches(), &[ApproachId(1)]);
    }

    #[test]
    fn test_name_collision_last_wins() {
        let db = NeoDatabase::new(vec![neo("A", "Same"), neo("B", "Same")], vec![]).unwrap();
        assert_eq!(db.by_name("Same").unwrap().designation(), "B");
    }

    #[test]
    fn test_unnamed_never_indexed() {
        let db = NeoDatabase::new(vec![neo("A", "")], vec![]).unwrap();
        assert!(db.by_name("").is_none());
        assert!(db.by_name("A").is_none());
    }

    #[test]
    fn test_lookup_is_exact() {
        let db = NeoDatabase::new(vec![neo("433", "Eros")], vec![]).unwrap();
        assert!(db.by_designation("433").is_some());
        assert!(db.by_designation(" 433").is_none());
        assert!(db.by_designation("433 ").is_none());
        assert!(db.by_name("eros").is_none());
    }

    #[test]
    fn test_empty_database() {
        let db = NeoDatabase::new(vec![], vec![]).unwrap();
        assert_eq!(db.neo_count(), 0);
        assert_eq!(db.query(&Filters::none()).count(), 0);
    }
}
