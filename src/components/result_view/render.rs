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

//! Render the outcome of a shuffle.
//!
//! The winner is shown on its own line, followed by the order numbered from 1
//! with the winning row highlighted. The title shows which slice of the order
//! is visible when it does not fit.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::{ResultView, result_view::HEADER_HEIGHT},
    model::ShuffleResult,
    theme::Theme,
};

impl ResultView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, result: &ShuffleResult, theme: &Theme) {
        let order = result.order();

        let inner = Block::default()
            .borders(Borders::ALL)
            .padding(Padding::horizontal(1))
            .inner(area);
        self.page = inner.height.saturating_sub(HEADER_HEIGHT).max(1) as usize;
        self.clamp(order.len());

        let title = if order.len() > self.page {
            let last = (self.scroll + self.page).min(order.len());
            format!(" Result ({}-{} of {}, PgUp/PgDn) ", self.scroll + 1, last, order.len())
        } else {
            " Result ".to_string()
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.winner_fg))
            .padding(Padding::horizontal(1));

        let winner_style = Style::default()
            .fg(theme.winner_fg)
            .bg(theme.winner_bg)
            .add_modifier(Modifier::BOLD);

        let header = vec![
            Line::from(vec![
                Span::raw("Winner: "),
                Span::styled(result.winner().to_string(), winner_style),
            ]),
            Line::from(""),
            Line::from("Order:"),
        ];

        let lines: Vec<Line> = order
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(self.page)
            .map(|(i, entry)| {
                let text = format!("{:>3}. {}", i + 1, entry);
                if i == 0 {
                    Line::styled(text, winner_style)
                } else {
                    Line::styled(text, Style::default().fg(theme.order_fg))
                }
            })
            .collect();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
            .split(inner);

        f.render_widget(block, area);
        f.render_widget(Paragraph::new(header), chunks[0]);
        f.render_widget(Paragraph::new(lines), chunks[1]);
    }
}
