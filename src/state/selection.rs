//! Selection bookkeeping for the question list.
//!
//! `Selection` holds the checked ids. Every operation takes the current
//! filtered-id set so the subset invariant can be maintained without the
//! selection owning the records.

use crate::model::QuestionId;
use std::collections::BTreeSet;

/// Set of checked question ids.
///
/// # Invariant
/// After every operation the selection is a subset of the filtered ids
/// passed to that operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: BTreeSet<QuestionId>,
}

impl Selection {
    /// Empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is checked.
    pub fn is_selected(&self, id: QuestionId) -> bool {
        self.selected.contains(&id)
    }

    /// Number of checked ids.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// True when nothing is checked.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.selected.iter().copied()
    }

    /// Flip membership of `id`.
    ///
    /// No-op when `id` is not in `filtered_ids`.
    pub fn toggle_one(&mut self, id: QuestionId, filtered_ids: &[QuestionId]) {
        if !filtered_ids.contains(&id) {
            return;
        }
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Clear when everything filtered is selected, otherwise select exactly
    /// the filtered set.
    pub fn toggle_all(&mut self, filtered_ids: &[QuestionId]) {
        if self.equals(filtered_ids) {
            self.selected.clear();
        } else {
            self.selected = filtered_ids.iter().copied().collect();
        }
    }

    /// Drop every id absent from `filtered_ids`. Never adds.
    pub fn reconcile(&mut self, filtered_ids: &[QuestionId]) {
        let keep: BTreeSet<QuestionId> = filtered_ids.iter().copied().collect();
        self.selected.retain(|id| keep.contains(id));
    }

    /// Header checkbox state: a non-empty filtered set, fully selected.
    pub fn all_selected(&self, filtered_ids: &[QuestionId]) -> bool {
        !filtered_ids.is_empty() && self.equals(filtered_ids)
    }

    fn equals(&self, filtered_ids: &[QuestionId]) -> bool {
        let other: BTreeSet<QuestionId> = filtered_ids.iter().copied().collect();
        self.selected == other
    }
}
