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

//! Outcome of the last shuffle.
//!
//! The winner stays pinned at the top of the panel. The order below it
//! scrolls a page at a time when it is longer than the panel.

mod render;

/// Winner line, spacer and the "Order:" label.
pub(crate) const HEADER_HEIGHT: u16 = 3;

pub(crate) struct ResultView {
    /// First order position shown, zero based.
    pub(crate) scroll: usize,
    /// Order rows that fit in the panel, as of the last draw.
    pub(crate) page: usize,
}

impl ResultView {
    pub(crate) fn new() -> Self {
        Self { scroll: 0, page: 1 }
    }

    pub(crate) fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub(crate) fn page_down(&mut self) {
        self.scroll = self.scroll.saturating_add(self.page.max(1));
    }

    pub(crate) fn page_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(self.page.max(1));
    }

    /// Keeps the last page full for an order of `len` rows.
    fn clamp(&mut self, len: usize) {
        self.scroll = self.scroll.min(len.saturating_sub(self.page));
    }
}
