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

//! Event routing for the add box.
//!
//! Text editing keys are delegated to the managed input component, `Enter`
//! submits the pending text and `Tab` moves focus to the entry list.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyModifiers};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    Focus,
    components::EntryInput,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for EntryInput {
    fn process_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> Result<bool> {
        if !self.is_active {
            return Ok(false);
        }

        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        match (key_event.code, key_event.modifiers) {
            // Global shortcuts
            (KeyCode::Char('s' | 'r' | 'c'), KeyModifiers::CONTROL) => return Ok(false),
            (KeyCode::PageUp | KeyCode::PageDown, _) => return Ok(false),

            (KeyCode::Enter, _) => event_tx.send(AppEvent::SubmitInput)?,

            (KeyCode::Tab, _) | (KeyCode::Down, _) => {
                event_tx.send(AppEvent::SetFocus(Focus::Entries))?
            }

            _ => {
                let changed = self.input.handle_event(event).is_some_and(|c| c.value);
                if changed {
                    event_tx.send(AppEvent::InputChanged(self.input.value().to_string()))?;
                }
            }
        }

        Ok(true)
    }
}
