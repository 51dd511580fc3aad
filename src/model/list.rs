// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Entry list state.
//!
//! [`ListState`] owns the ordered entries, the pending text of the add box and
//! the outcome of the last shuffle. Every change to the entries drops the
//! shuffle result, a result only describes the list it was drawn from.
//!
//! Entries are addressed by position. Deleting an entry shifts every later
//! entry down by one, so callers must not hold on to an index across a
//! delete.

use rand::{Rng, rng};
use thiserror::Error;
use tracing::{debug, info};

use crate::model::{ShuffleResult, shuffler};

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ListError {
    #[error("entry index {index} out of range for list of {len} entries")]
    InvalidIndex { index: usize, len: usize },
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ListState {
    entries: Vec<String>,
    result: Option<ShuffleResult>,
    pending: String,
}

impl ListState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn entries(&self) -> &[String] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn result(&self) -> Option<&ShuffleResult> {
        self.result.as_ref()
    }

    pub(crate) fn pending(&self) -> &str {
        &self.pending
    }

    /// Replaces the text waiting in the add box.
    pub(crate) fn set_pending(&mut self, text: &str) {
        self.pending.clear();
        self.pending.push_str(text);
    }

    /// Appends `text` to the list once trimmed.
    ///
    /// Blank text is ignored and leaves the state untouched. On success the
    /// pending input is cleared along with any shuffle result.
    pub(crate) fn add(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring blank entry");
            return false;
        }

        info!(entry = text, index = self.entries.len(), "Adding entry");
        self.entries.push(text.to_string());
        self.pending.clear();
        self.result = None;
        true
    }

    /// Adds whatever is waiting in the add box.
    pub(crate) fn submit_pending(&mut self) -> bool {
        let text = std::mem::take(&mut self.pending);
        let added = self.add(&text);
        if !added {
            self.pending = text;
        }
        added
    }

    /// Stores the trimmed `text` at `index`.
    ///
    /// The trimmed text may be empty, such entries are skipped when
    /// shuffling.
    pub(crate) fn edit(&mut self, index: usize, text: &str) -> Result<(), ListError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(ListError::InvalidIndex { index, len })?;

        let text = text.trim();
        info!(index, from = entry.as_str(), to = text, "Editing entry");
        *entry = text.to_string();
        self.result = None;
        Ok(())
    }

    /// Removes and returns the entry at `index`.
    pub(crate) fn delete(&mut self, index: usize) -> Result<String, ListError> {
        let len = self.entries.len();
        if index >= len {
            return Err(ListError::InvalidIndex { index, len });
        }

        let removed = self.entries.remove(index);
        info!(index, entry = removed.as_str(), "Deleted entry");
        self.result = None;
        Ok(removed)
    }

    /// Shuffles the entries using the thread-local generator.
    pub(crate) fn shuffle(&mut self) -> Option<&ShuffleResult> {
        self.shuffle_with(&mut rng())
    }

    /// Shuffles the non-blank entries and records the outcome.
    ///
    /// If no entry survives the filter, nothing changes and `None` is
    /// returned.
    pub(crate) fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&ShuffleResult> {
        let candidates: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| !entry.trim().is_empty())
            .cloned()
            .collect();

        let Some(result) = ShuffleResult::from_order(shuffler::shuffle(&candidates, rng)) else {
            debug!("Nothing to shuffle");
            return None;
        };

        info!(winner = result.winner(), count = result.order().len(), "Shuffled entries");
        self.result = Some(result);
        self.result.as_ref()
    }

    /// Clears entries, result and pending input.
    pub(crate) fn reset(&mut self) {
        info!(count = self.len(), "Resetting list");
        self.entries.clear();
        self.result = None;
        self.pending.clear();
    }
}
