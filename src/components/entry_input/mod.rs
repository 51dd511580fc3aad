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

//! Text box used to add new entries.
//!
//! The box wraps a `tui_input` component. The text it shows mirrors the
//! pending input held by the list state, every keystroke is reported back
//! and the box is re-synced when the list clears the buffer.

mod event;
mod render;

use tui_input::Input;

pub(crate) const PLACEHOLDER: &str = "Enter a choice...";

pub(crate) struct EntryInput {
    pub(crate) input: Input,
    pub(crate) is_active: bool,
}

impl EntryInput {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
            is_active: true,
        }
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    /// Adopts `pending` if it differs from what the box currently shows.
    pub(crate) fn sync(&mut self, pending: &str) {
        if self.input.value() != pending {
            self.input = Input::new(pending.to_string());
        }
    }
}
