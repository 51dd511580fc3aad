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

//! Application logic and event handling.
//!
//! This module acts as the central hub for the "Controller" logic of the
//! application. Key presses are routed to the focused view, views report
//! what the user wants as [`AppEvent`]s, and the handlers apply those to the
//! list state. After every event the views are re-synced from the list state
//! and the frame is redrawn.

mod handlers;
use handlers::*;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, prelude::CrosstermBackend};
use tracing::debug;

use crate::{App, Focus, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    InputChanged(String),
    SubmitInput,

    CommitEdit(usize, String),
    DeleteEntry(usize),

    Shuffle,
    Reset,

    SetFocus(Focus),

    ExitApplication,
}

pub(crate) trait AppEventProcessor {
    /// Handles `event`, returning `true` if it was consumed.
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool>;
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until an exit event is received or the event channel
/// is closed. A failed handler ends the loop with its error.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if !handle_event(app, event)? {
            break;
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Applies a single event to the application state.
///
/// Returns `false` once the application should exit.
pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<bool> {
    debug!(?event, "Handling event");

    match event {
        AppEvent::ExitApplication => return Ok(false),
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::InputChanged(text) => handle_input_changed(app, &text),
        AppEvent::SubmitInput => handle_submit_input(app),
        AppEvent::CommitEdit(index, text) => handle_commit_edit(app, index, &text)?,
        AppEvent::DeleteEntry(index) => handle_delete_entry(app, index)?,
        AppEvent::Shuffle => handle_shuffle(app),
        AppEvent::Reset => handle_reset(app),
        AppEvent::SetFocus(focus) => handle_set_focus(app, focus)?,
    }

    app.sync_views();
    Ok(true)
}

/// Routes a key press to the focused view, then to the global shortcuts.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    let handled = match app.focus {
        Focus::Input => app.entry_input.process_event(&event, &app.event_tx)?,
        Focus::Entries => app.entry_list.process_event(&event, &app.event_tx)?,
    };
    if handled {
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?
        }

        (KeyCode::Char('s'), KeyModifiers::CONTROL) if !app.list.is_empty() => {
            app.event_tx.send(AppEvent::Shuffle)?
        }
        (KeyCode::Char('r'), KeyModifiers::CONTROL) if !app.list.is_empty() => {
            app.event_tx.send(AppEvent::Reset)?
        }

        (KeyCode::PageDown, _) if app.list.result().is_some() => app.result_view.page_down(),
        (KeyCode::PageUp, _) if app.list.result().is_some() => app.result_view.page_up(),

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        app.event_tx
            .send(AppEvent::Key(KeyEvent::new(code, modifiers)))
            .unwrap();
        pump(app);
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    /// Handles queued events until the channel is empty.
    fn pump(app: &mut App) -> bool {
        while let Ok(event) = app.event_rx.try_recv() {
            if !handle_event(app, event).unwrap() {
                return false;
            }
        }
        true
    }

    fn app_with(entries: &[&str]) -> App {
        let mut app = App::new();
        for entry in entries {
            type_text(&mut app, entry);
            press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        }
        app
    }

    #[test]
    fn test_type_and_submit() {
        let mut app = App::new();
        type_text(&mut app, "  pizza ");
        assert_eq!(app.list.pending(), "  pizza ");

        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.list.entries(), ["pizza"]);
        assert_eq!(app.list.pending(), "");
        assert_eq!(app.entry_input.value(), "");
    }

    #[test]
    fn test_blank_submit_keeps_input() {
        let mut app = App::new();
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        assert!(app.list.is_empty());
        assert_eq!(app.entry_input.value(), "   ");
    }

    #[test]
    fn test_shuffle_shortcut() {
        let mut app = app_with(&["a", "b", "c"]);
        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

        let result = app.list.result().unwrap();
        assert_eq!(result.order().len(), 3);
        assert_eq!(result.winner(), result.order()[0]);
    }

    #[test]
    fn test_page_keys_scroll_result_from_any_view() {
        let mut app = app_with(&["a", "b", "c"]);
        press(&mut app, KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(app.result_view.scroll, 0);

        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        app.result_view.page = 1;
        press(&mut app, KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(app.result_view.scroll, 1);
        assert_eq!(app.entry_input.value(), "");

        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        press(&mut app, KeyCode::Char('e'), KeyModifiers::NONE);
        press(&mut app, KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(app.result_view.scroll, 2);
        assert!(app.entry_list.is_editing());

        // A fresh shuffle starts from the top again.
        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(app.result_view.scroll, 0);
    }

    #[test]
    fn test_shuffle_shortcut_ignored_when_empty() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(app.list.result().is_none());
    }

    #[test]
    fn test_reset_shortcut() {
        let mut app = app_with(&["a", "b"]);
        type_text(&mut app, "half typed");
        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        press(&mut app, KeyCode::Char('r'), KeyModifiers::CONTROL);

        assert!(app.list.is_empty());
        assert!(app.list.result().is_none());
        assert_eq!(app.list.pending(), "");
        assert_eq!(app.entry_input.value(), "");
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn test_edit_entry_in_place() {
        let mut app = app_with(&["a", "b"]);
        press(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(app.list.result().is_some());

        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.focus, Focus::Entries);

        press(&mut app, KeyCode::Char('g'), KeyModifiers::NONE);
        press(&mut app, KeyCode::Char('e'), KeyModifiers::NONE);
        press(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
        type_text(&mut app, " c ");

        // Nothing reaches the list until the draft is committed.
        assert_eq!(app.list.entries(), ["a", "b"]);
        assert!(app.list.result().is_some());

        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.list.entries(), ["c", "b"]);
        assert!(app.list.result().is_none());
    }

    #[test]
    fn test_delete_entry() {
        let mut app = app_with(&["a", "b", "c"]);
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        press(&mut app, KeyCode::Char('g'), KeyModifiers::NONE);
        press(&mut app, KeyCode::Char('j'), KeyModifiers::NONE);
        press(&mut app, KeyCode::Char('d'), KeyModifiers::NONE);

        assert_eq!(app.list.entries(), ["a", "c"]);
        assert_eq!(app.entry_list.selected(), Some(1));
    }

    #[test]
    fn test_leaving_list_commits_draft() {
        let mut app = app_with(&["a"]);
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        press(&mut app, KeyCode::Char('e'), KeyModifiers::NONE);
        type_text(&mut app, "z");

        handle_event(&mut app, AppEvent::SetFocus(Focus::Input)).unwrap();
        assert_eq!(app.list.entries(), ["az"]);
        assert!(!app.entry_list.is_editing());
    }

    #[test]
    fn test_invalid_index_is_an_error() {
        let mut app = app_with(&["a"]);
        assert!(handle_event(&mut app, AppEvent::DeleteEntry(3)).is_err());
        assert!(handle_event(&mut app, AppEvent::CommitEdit(1, "x".into())).is_err());
        assert_eq!(app.list.entries(), ["a"]);
    }

    #[test]
    fn test_exit() {
        let mut app = app_with(&["a"]);
        press_and_check_exit(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);

        let mut app = app_with(&["a"]);
        press(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        press_and_check_exit(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
    }

    fn press_and_check_exit(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        app.event_tx
            .send(AppEvent::Key(KeyEvent::new(code, modifiers)))
            .unwrap();
        assert!(!pump(app));
    }
}
