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

//! Live edit buffer for a single entry.
//!
//! While an entry is being edited the text shown to the user (the draft) can
//! diverge from the value stored in the list. Nothing reaches the list until
//! [`Draft::commit`] is called, and the draft gives way to the list whenever
//! the stored value changes underneath it.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Draft {
    value: String,
    committed: String,
}

impl Draft {
    pub(crate) fn new(committed: &str) -> Self {
        Self {
            value: committed.to_string(),
            committed: committed.to_string(),
        }
    }

    pub(crate) fn value(&self) -> &str {
        &self.value
    }

    pub(crate) fn set_value(&mut self, value: &str) {
        self.value.clear();
        self.value.push_str(value);
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.value != self.committed
    }

    /// Trims the live value and makes it the committed value.
    ///
    /// The returned text is what should be written back to the list, it may
    /// be empty if the user cleared the entry.
    pub(crate) fn commit(&mut self) -> String {
        let trimmed = self.value.trim().to_string();
        self.value.clone_from(&trimmed);
        self.committed.clone_from(&trimmed);
        trimmed
    }

    /// Adopts `committed` if it differs from the last known committed value.
    ///
    /// Any uncommitted divergence is discarded. Returns `true` if the draft
    /// was replaced.
    pub(crate) fn sync(&mut self, committed: &str) -> bool {
        if self.committed == committed {
            return false;
        }

        self.committed = committed.to_string();
        self.value = committed.to_string();
        true
    }
}
