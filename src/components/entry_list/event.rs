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

//! Input handling for the entry table.
//!
//! Outside of editing, keys navigate the table and request list actions.
//! While an entry is being edited every key goes to the draft, and leaving
//! the draft by any route commits it.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    Focus,
    components::EntryListView,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for EntryListView {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        if !self.is_active {
            return Ok(false);
        }

        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if self.is_editing() {
            return self.process_edit_event(event, event_tx);
        }

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => self.goto_next(),
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => self.goto_previous(),
            (KeyCode::Char('g'), _) | (KeyCode::Home, _) => self.goto_first(),
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => self.select_last(),

            (KeyCode::Char('e'), _) | (KeyCode::Enter, _) => {
                self.begin_edit();
            }

            (KeyCode::Char('d'), _) | (KeyCode::Delete, _) => {
                if let Some(index) = self.selected() {
                    event_tx.send(AppEvent::DeleteEntry(index))?;
                }
            }

            (KeyCode::Char('s'), KeyModifiers::NONE) if !self.entries.is_empty() => {
                event_tx.send(AppEvent::Shuffle)?
            }
            (KeyCode::Char('r'), KeyModifiers::NONE) if !self.entries.is_empty() => {
                event_tx.send(AppEvent::Reset)?
            }

            (KeyCode::Char('i'), _) | (KeyCode::Tab, _) | (KeyCode::Esc, _) => {
                event_tx.send(AppEvent::SetFocus(Focus::Input))?
            }

            (KeyCode::Char('q'), _) => event_tx.send(AppEvent::ExitApplication)?,

            _ => return Ok(false),
        }

        Ok(true)
    }
}

impl EntryListView {
    fn process_edit_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match (key_event.code, key_event.modifiers) {
            (KeyCode::Enter, _) | (KeyCode::Esc, _) => self.send_commit(event_tx)?,

            (KeyCode::Tab, _) => {
                self.send_commit(event_tx)?;
                event_tx.send(AppEvent::SetFocus(Focus::Input))?;
            }

            // Global actions end the edit first, then fall through to the
            // global handler.
            (KeyCode::Char('s' | 'r'), KeyModifiers::CONTROL) => {
                self.send_commit(event_tx)?;
                return Ok(false);
            }

            (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Ok(false),
            (KeyCode::PageUp | KeyCode::PageDown, _) => return Ok(false),

            _ => {
                if let Some(session) = self.editing.as_mut() {
                    if session.input.handle_event(event).is_some() {
                        session.draft.set_value(session.input.value());
                    }
                }
            }
        }

        Ok(true)
    }

    fn send_commit(&mut self, event_tx: &Sender<AppEvent>) -> Result<()> {
        if let Some((index, text)) = self.end_edit() {
            event_tx.send(AppEvent::CommitEdit(index, text))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::mpsc;

    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn active_view(values: &[&str]) -> EntryListView {
        let mut view = EntryListView::new();
        let entries: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        view.sync(&entries);
        view.is_active = true;
        view
    }

    #[test]
    fn test_delete_selected() {
        let (tx, rx) = mpsc::channel();
        let mut view = active_view(&["a", "b"]);

        view.process_event(&key(KeyCode::Char('j')), &tx).unwrap();
        view.process_event(&key(KeyCode::Char('d')), &tx).unwrap();

        assert!(matches!(rx.try_recv(), Ok(AppEvent::DeleteEntry(1))));
    }

    #[test]
    fn test_shuffle_gated_on_entries() {
        let (tx, rx) = mpsc::channel();

        let mut empty = active_view(&[]);
        assert!(!empty.process_event(&key(KeyCode::Char('s')), &tx).unwrap());
        assert!(rx.try_recv().is_err());

        let mut view = active_view(&["a"]);
        view.process_event(&key(KeyCode::Char('s')), &tx).unwrap();
        assert!(matches!(rx.try_recv(), Ok(AppEvent::Shuffle)));
    }

    #[test]
    fn test_edit_commits_on_enter() {
        let (tx, rx) = mpsc::channel();
        let mut view = active_view(&["a"]);

        view.process_event(&key(KeyCode::Char('e')), &tx).unwrap();
        assert!(view.is_editing());

        // Keys that are shortcuts elsewhere are plain text in a draft.
        view.process_event(&key(KeyCode::Char('d')), &tx).unwrap();
        view.process_event(&key(KeyCode::Char(' ')), &tx).unwrap();
        assert_eq!(view.editing.as_ref().unwrap().draft.value(), "ad ");

        view.process_event(&key(KeyCode::Enter), &tx).unwrap();
        assert!(!view.is_editing());
        assert!(matches!(rx.try_recv(), Ok(AppEvent::CommitEdit(0, text)) if text == "ad"));
    }

    #[test]
    fn test_tab_commits_and_leaves() {
        let (tx, rx) = mpsc::channel();
        let mut view = active_view(&["a"]);

        view.process_event(&key(KeyCode::Enter), &tx).unwrap();
        view.process_event(&key(KeyCode::Tab), &tx).unwrap();

        assert!(matches!(rx.try_recv(), Ok(AppEvent::CommitEdit(0, _))));
        assert!(matches!(rx.try_recv(), Ok(AppEvent::SetFocus(Focus::Input))));
    }

    #[test]
    fn test_global_shuffle_commits_draft_first() {
        let (tx, rx) = mpsc::channel();
        let mut view = active_view(&["a"]);
        let ctrl_s = Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

        view.process_event(&key(KeyCode::Char('e')), &tx).unwrap();
        assert!(!view.process_event(&ctrl_s, &tx).unwrap());
        assert!(matches!(rx.try_recv(), Ok(AppEvent::CommitEdit(0, _))));
    }
}
