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

//! Key hints for the focused view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, Focus};

pub(crate) fn draw_footer(f: &mut Frame, area: Rect, app: &App) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    f.render_widget(
        Paragraph::new(hints(app)).style(Style::default().fg(app.theme.hint_colour)),
        container[0],
    );
}

fn hints(app: &App) -> String {
    let mut hints = match app.focus {
        Focus::Input => vec!["enter add", "tab entries"],
        Focus::Entries if app.entry_list.is_editing() => {
            vec!["enter/esc save", "tab save+add box", "n* unsaved"]
        },
        Focus::Entries => vec!["j/k move", "e edit", "d delete", "tab add box", "q quit"],
    };

    // Shuffle and reset only make sense with something in the list.
    if !app.list.is_empty() {
        hints.push("^s shuffle");
        hints.push("^r reset");
    }
    hints.push("^c quit");

    hints.join("  ")
}
