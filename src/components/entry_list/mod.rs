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

//! Entry table with selection and in-place editing.
//!
//! The view keeps a copy of the entries for drawing, the row selection and,
//! while an entry is being edited, an [`EditSession`] holding the live draft.
//! Entries are addressed by row index, so after every change to the list the
//! view is re-synced: the selection is clamped, and an open draft either
//! adopts the new stored value or is closed if its row disappeared.

mod event;
mod render;

use ratatui::widgets::TableState;
use tracing::debug;
use tui_input::Input;

use crate::model::draft::Draft;

/// An entry being edited.
pub(crate) struct EditSession {
    pub(crate) index: usize,
    pub(crate) draft: Draft,
    pub(crate) input: Input,
}

impl EditSession {
    fn new(index: usize, committed: &str) -> Self {
        Self {
            index,
            draft: Draft::new(committed),
            input: Input::new(committed.to_string()),
        }
    }

    fn sync(&mut self, committed: &str) {
        if self.draft.sync(committed) {
            debug!(index = self.index, "Entry changed while editing, discarding draft");
            self.input = Input::new(self.draft.value().to_string());
        }
    }
}

pub(crate) struct EntryListView {
    pub(crate) entries: Vec<String>,
    pub(crate) table_state: TableState,
    pub(crate) editing: Option<EditSession>,
    pub(crate) is_active: bool,
}

impl EntryListView {
    pub(crate) fn new() -> Self {
        Self {
            entries: vec![],
            table_state: TableState::new(),
            editing: None,
            is_active: false,
        }
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.table_state
            .selected()
            .filter(|i| *i < self.entries.len())
    }

    pub(crate) fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Mirrors `entries` and reconciles selection and any open draft.
    pub(crate) fn sync(&mut self, entries: &[String]) {
        self.entries.clear();
        self.entries.extend_from_slice(entries);

        let len = self.entries.len();
        match self.table_state.selected() {
            _ if len == 0 => self.table_state.select(None),
            Some(i) if i >= len => self.table_state.select(Some(len - 1)),
            None => self.table_state.select(Some(0)),
            Some(_) => {}
        }

        if let Some(session) = self.editing.as_mut() {
            match self.entries.get(session.index) {
                Some(committed) => session.sync(committed),
                None => {
                    debug!(index = session.index, "Edited entry no longer exists");
                    self.editing = None;
                }
            }
        }
    }

    /// Opens a draft for the selected entry.
    pub(crate) fn begin_edit(&mut self) -> bool {
        let Some(index) = self.selected() else {
            return false;
        };

        self.editing = Some(EditSession::new(index, &self.entries[index]));
        true
    }

    /// Closes the draft, returning the index and trimmed text to store.
    pub(crate) fn end_edit(&mut self) -> Option<(usize, String)> {
        let mut session = self.editing.take()?;
        Some((session.index, session.draft.commit()))
    }

    pub(crate) fn select_last(&mut self) {
        if !self.entries.is_empty() {
            self.table_state.select(Some(self.entries.len() - 1));
        }
    }

    fn goto_next(&mut self) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i > 0 && i < len => i - 1,
            _ => len - 1,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.entries.is_empty() {
            self.table_state.select(Some(0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn view_of(values: &[&str]) -> EntryListView {
        let mut view = EntryListView::new();
        view.sync(&entries(values));
        view
    }

    #[test]
    fn test_sync_selects_first_row() {
        let view = view_of(&["a", "b"]);
        assert_eq!(view.selected(), Some(0));
    }

    #[test]
    fn test_sync_clamps_selection() {
        let mut view = view_of(&["a", "b", "c"]);
        view.table_state.select(Some(2));

        view.sync(&entries(&["a", "b"]));
        assert_eq!(view.selected(), Some(1));

        view.sync(&[]);
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut view = view_of(&["a", "b", "c"]);
        view.goto_previous();
        assert_eq!(view.selected(), Some(2));
        view.goto_next();
        assert_eq!(view.selected(), Some(0));
        view.select_last();
        assert_eq!(view.selected(), Some(2));
        view.goto_first();
        assert_eq!(view.selected(), Some(0));
    }

    #[test]
    fn test_edit_round_trip() {
        let mut view = view_of(&["a", "b"]);
        view.table_state.select(Some(1));

        assert!(view.begin_edit());
        let session = view.editing.as_mut().unwrap();
        session.draft.set_value("  bee ");

        assert_eq!(view.end_edit(), Some((1, "bee".to_string())));
        assert!(!view.is_editing());
    }

    #[test]
    fn test_begin_edit_on_empty_list() {
        let mut view = EntryListView::new();
        assert!(!view.begin_edit());
        assert_eq!(view.end_edit(), None);
    }

    #[test]
    fn test_draft_resyncs_when_entry_changes() {
        let mut view = view_of(&["a", "b", "c"]);
        view.table_state.select(Some(1));
        view.begin_edit();
        view.editing.as_mut().unwrap().draft.set_value("b draft");

        // Entry 0 removed, row 1 now holds "c".
        view.sync(&entries(&["b", "c"]));

        let session = view.editing.as_ref().unwrap();
        assert_eq!(session.draft.value(), "c");
        assert_eq!(session.input.value(), "c");
    }

    #[test]
    fn test_draft_survives_unrelated_change() {
        let mut view = view_of(&["a", "b"]);
        view.begin_edit();
        view.editing.as_mut().unwrap().draft.set_value("a draft");

        view.sync(&entries(&["a", "b", "c"]));
        assert_eq!(view.editing.as_ref().unwrap().draft.value(), "a draft");
    }

    #[test]
    fn test_edit_closed_when_row_disappears() {
        let mut view = view_of(&["a", "b"]);
        view.table_state.select(Some(1));
        view.begin_edit();

        view.sync(&entries(&["a"]));
        assert!(!view.is_editing());
    }
}
