//! Lazy query over the approach collection

use std::iter::FusedIterator;

use crate::filters::Filters;
use crate::model::{ApproachId, ApproachView};

use super::database::NeoDatabase;

/// Counters for one query run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStats {
    /// Approaches examined so far
    pub scanned: usize,
    /// Approaches that passed every filter
    pub matched: usize,
}

/// Streams approaches matching a filter bundle, in storage order.
///
/// Nothing is materialized; each call to `next` scans forward only until
/// the next match.
#[derive(Debug, Clone)]
pub struct Query<'a> {
    db: &'a NeoDatabase,
    filters: Filters,
    cursor: usize,
    stats: QueryStats,
}

impl<'a> Query<'a> {
    pub(crate) fn new(db: &'a NeoDatabase, filters: Filters) -> Self {
        Self {
            db,
            filters,
            cursor: 0,
            stats: QueryStats::default(),
        }
    }

    /// The filters this query evaluates
    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    /// Counters accumulated by iteration so far
    pub fn stats(&self) -> QueryStats {
        self.stats
    }
}

impl<'a> Iterator for Query<'a> {
    type Item = ApproachView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let approaches = self.db.approach_slice();

        while let Some(approach) = approaches.get(self.cursor) {
            let id = ApproachId(self.cursor);
            self.cursor += 1;
            self.stats.scanned += 1;

            let neo = self.db.neo_of(approach);
            if self.filters.matches(approach, neo) {
                self.stats.matched += 1;
                return Some(ApproachView::new(id, approach, neo));
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.db.approach_slice().len().saturating_sub(self.cursor);
        (0, Some(remaining))
    }
}

impl FusedIterator for Query<'_> {}
