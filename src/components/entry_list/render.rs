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

//! UI rendering logic for the entry table.
//!
//! Rows are numbered from 1. The row being edited shows the live draft in
//! place of the stored text, with the cursor placed inside it.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table},
};

use crate::{components::EntryListView, render::Render, theme::Theme};

const INDEX_WIDTH: u16 = 4;
const COLUMN_SPACING: u16 = 1;

impl Render for EntryListView {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border_colour = if self.is_active {
            theme.focus_border_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .title(format!(" Entries ({}) ", self.entries.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1));

        if self.entries.is_empty() {
            let empty = Paragraph::new("No entries yet")
                .style(Style::default().fg(theme.placeholder_colour))
                .block(block);
            f.render_widget(empty, area);
            return;
        }

        let inner = block.inner(area);

        let rows = self.entries.iter().enumerate().map(|(i, entry)| {
            let (marker, text, style) = match &self.editing {
                Some(session) if session.index == i => (
                    if session.draft.is_dirty() { "*" } else { "." },
                    session.input.value().to_string(),
                    Style::default()
                        .fg(theme.entry_editing_fg)
                        .add_modifier(Modifier::UNDERLINED),
                ),
                _ => (".", entry.clone(), Style::default().fg(theme.entry_fg)),
            };

            Row::new(vec![
                Cell::from(Line::from(format!("{}{}", i + 1, marker)).right_aligned())
                    .style(Style::default().fg(theme.entry_index_fg)),
                Cell::from(text).style(style),
            ])
        });

        let table = Table::new(rows, [Constraint::Length(INDEX_WIDTH), Constraint::Min(1)])
            .column_spacing(COLUMN_SPACING)
            .block(block)
            .row_highlight_style(if self.is_active {
                Style::default().bg(theme.entry_selected_bg)
            } else {
                Style::default()
            });

        f.render_stateful_widget(table, area, &mut self.table_state);

        if let Some(session) = &self.editing {
            let Some(row) = session.index.checked_sub(self.table_state.offset()) else {
                return;
            };
            let row = row as u16;
            if row < inner.height {
                let x = inner.x + INDEX_WIDTH + COLUMN_SPACING + session.input.visual_cursor() as u16;
                f.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y + row));
            }
        }
    }
}
