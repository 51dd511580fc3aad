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

use anyhow::Result;
use tracing::{debug, info};

use crate::{App, Focus};

pub(super) fn handle_input_changed(app: &mut App, text: &str) {
    app.list.set_pending(text);
}

pub(super) fn handle_submit_input(app: &mut App) {
    if app.list.submit_pending() {
        app.entry_list.sync(app.list.entries());
        app.entry_list.select_last();
    }
}

pub(super) fn handle_commit_edit(app: &mut App, index: usize, text: &str) -> Result<()> {
    app.list.edit(index, text)?;

    Ok(())
}

pub(super) fn handle_delete_entry(app: &mut App, index: usize) -> Result<()> {
    app.list.delete(index)?;

    Ok(())
}

pub(super) fn handle_shuffle(app: &mut App) {
    if app.list.shuffle().is_none() {
        debug!("Shuffle requested with no usable entries");
    }
    app.result_view.scroll_to_top();
}

pub(super) fn handle_reset(app: &mut App) {
    app.entry_list.editing = None;
    app.list.reset();
    app.focus = Focus::Input;
}

pub(super) fn handle_set_focus(app: &mut App, focus: Focus) -> Result<()> {
    if app.focus == focus {
        return Ok(());
    }

    // Losing focus ends an edit and commits it.
    if let Some((index, text)) = app.entry_list.end_edit() {
        app.list.edit(index, &text)?;
    }

    info!(?focus, "Focus changed");
    app.focus = focus;

    Ok(())
}
