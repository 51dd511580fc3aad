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

//! Interactive views.
//!
//! Each view keeps only presentation state (cursor, selection, the draft of
//! an entry being edited) and reports user intent by sending [`AppEvent`]s.
//! The entry list itself is owned by the application and pushed back into
//! the views after every change.
//!
//! [`AppEvent`]: crate::events::AppEvent

mod entry_input;
mod entry_list;
mod result_view;

pub(crate) use entry_input::EntryInput;
pub(crate) use entry_list::EntryListView;
pub(crate) use result_view::{HEADER_HEIGHT as RESULT_HEADER_HEIGHT, ResultView};
