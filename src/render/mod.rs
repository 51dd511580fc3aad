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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod footer;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
};

use crate::{
    App,
    components::RESULT_HEADER_HEIGHT,
    render::footer::draw_footer,
    theme::Theme,
};

const TITLE: &str = "Shuffler";

/// Rows used by the result panel besides the order itself: the borders and
/// the pinned winner header.
const RESULT_CHROME_HEIGHT: u16 = 2 + RESULT_HEADER_HEIGHT;

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// From top to bottom: title, add box, result panel (only once a shuffle
/// has happened), entry table, and the key hint footer.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let result_height = app
        .list
        .result()
        .map(|r| (r.order().len() as u16).saturating_add(RESULT_CHROME_HEIGHT))
        .unwrap_or(0)
        .min(area.height / 2);

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(result_height),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(title, outer[0]);

    app.entry_input.draw(f, outer[1], &app.theme);

    if let Some(result) = app.list.result() {
        app.result_view.draw(f, outer[2], result, &app.theme);
    }

    app.entry_list.draw(f, outer[3], &app.theme);

    draw_footer(f, outer[4], app);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    use crate::{
        App,
        events::{AppEvent, handle_event},
    };

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        app.event_tx
            .send(AppEvent::Key(KeyEvent::new(code, modifiers)))
            .unwrap();
        while let Ok(event) = app.event_rx.try_recv() {
            assert!(handle_event(app, event).unwrap());
        }
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|f| super::draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let symbols: Vec<&str> = buffer.content().iter().map(|c| c.symbol()).collect();
        symbols
            .chunks(width)
            .map(|line| line.concat())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_draw_empty() {
        let mut app = App::new();
        let screen = screen(&mut app);

        assert!(screen.contains("Enter a choice..."));
        assert!(screen.contains("Entries (0)"));
        assert!(!screen.contains("Winner"));
    }

    #[test]
    fn test_draw_entries_and_result() {
        let mut app = App::new();
        app.list.add("pizza");
        app.list.add("sushi");
        app.list.shuffle();
        app.sync_views();

        let winner = app.list.result().unwrap().winner().to_string();
        let screen = screen(&mut app);

        assert!(screen.contains("Entries (2)"));
        assert!(screen.contains("1. pizza") || screen.contains("1.  pizza"));
        assert!(screen.contains("Winner"));
        assert!(screen.contains(&winner));
    }

    #[test]
    fn test_long_order_pages_through_every_position() {
        let mut app = App::new();
        for n in 1..=20 {
            app.list.add(&format!("idea {n:02}"));
        }
        app.list.shuffle();
        app.sync_views();

        let order = app.list.result().unwrap().order().to_vec();
        let mut seen = vec![false; order.len()];

        let first = screen(&mut app);
        assert!(first.contains("of 20, PgUp/PgDn"));

        let mut screen_text = first;
        for _ in 0..3 {
            for (i, entry) in order.iter().enumerate() {
                if screen_text.contains(&format!("{:>3}. {}", i + 1, entry)) {
                    seen[i] = true;
                }
            }
            press(&mut app, KeyCode::PageDown, KeyModifiers::NONE);
            screen_text = screen(&mut app);
        }

        let missing: Vec<usize> = (1..=order.len()).filter(|n| !seen[n - 1]).collect();
        assert!(missing.is_empty(), "positions never shown: {missing:?}");

        // The winner stays pinned while the order scrolls.
        assert!(screen_text.contains(&format!("Winner: {}", order[0])));
        assert!(screen_text.contains(&format!("{:>3}. {}", 20, order[19])));
        assert!(!screen_text.contains(&format!("{:>3}. {}", 1, order[0])));

        press(&mut app, KeyCode::PageUp, KeyModifiers::NONE);
        press(&mut app, KeyCode::PageUp, KeyModifiers::NONE);
        assert!(screen(&mut app).contains(&format!("{:>3}. {}", 1, order[0])));
    }

    #[test]
    fn test_unsaved_edit_is_marked() {
        let mut app = App::new();
        app.list.add("pizza");
        app.sync_views();

        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        press(&mut app, KeyCode::Char('g'), KeyModifiers::NONE);
        press(&mut app, KeyCode::Char('e'), KeyModifiers::NONE);

        let clean = screen(&mut app);
        assert!(clean.contains("1."));
        assert!(!clean.contains("1*"));
        assert!(clean.contains("n* unsaved"));

        press(&mut app, KeyCode::Char('!'), KeyModifiers::NONE);
        let dirty = screen(&mut app);
        assert!(dirty.contains("1*"));
        assert!(dirty.contains("pizza!"));
        assert_eq!(app.list.entries(), ["pizza"]);
    }
}
