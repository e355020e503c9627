//! Trip selection set and total computation.
//!
//! The payment screen keeps a set of selected trip ids next to the current
//! payable-trip list. The two are allowed to drift: after a list refresh,
//! ids that disappeared stay in the set but are excluded from the total,
//! which is always recomputed from the current list snapshot.

use crate::payment::PayableTrip;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// A set of selected trip ids.
///
/// Mutated only by [`toggle`](SelectionSet::toggle),
/// [`select_all`](SelectionSet::select_all) and
/// [`clear`](SelectionSet::clear). Iteration order is ascending, so payload
/// construction is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<i64>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`.
    ///
    /// An id absent from the current item list may be toggled in; it is
    /// inert, because the total only counts ids present in the list.
    pub fn toggle(&mut self, id: i64) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Replaces the selection with every id in the given snapshot.
    pub fn select_all(&mut self, items: &[PayableTrip]) {
        self.ids = items.iter().map(|item| item.id).collect();
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<i64> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Sums the reimbursement amounts of the selected trips.
///
/// Pure over its inputs: only ids present in both the selection and the
/// item list contribute, and the empty intersection sums to zero. Exact
/// decimal arithmetic, no floating point.
pub fn compute_total(selection: &SelectionSet, items: &[PayableTrip]) -> Decimal {
    items
        .iter()
        .filter(|item| selection.contains(item.id))
        .map(|item| item.reimbursement)
        .sum()
}
