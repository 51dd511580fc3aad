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

//! # Shuffler TUI.
//!
//! A terminal list randomizer: enter a handful of choices, edit or remove
//! them, then shuffle to draw a winner and see the full random order.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! small in-memory state machine.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the application state, manages the terminal
//!   lifecycle and renders the UI.
//! * An **Input Thread** forwards key presses to the main thread.
//! * **Views** translate key presses into application events that mutate the
//!   entry list.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the input thread and the main thread is handled via
//! `std::sync::mpsc` channels.

mod components;
mod config;
mod events;
mod logging;
mod model;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
};
use tracing::{info, warn};

use crate::{
    components::{EntryInput, EntryListView, ResultView},
    events::{AppEvent, process_events},
    model::list::ListState,
    theme::Theme,
};

/// The view receiving key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Input,
    Entries,
}

/// Application state.
pub(crate) struct App {
    pub theme: Theme,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub list: ListState,

    pub entry_input: EntryInput,
    pub entry_list: EntryListView,
    pub result_view: ResultView,
}

impl App {
    /// Create a new instance of application state.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let mut app = Self {
            theme: Theme::default(),
            focus: Focus::Input,
            event_tx,
            event_rx,
            list: ListState::new(),
            entry_input: EntryInput::new(),
            entry_list: EntryListView::new(),
            result_view: ResultView::new(),
        };
        app.sync_views();
        app
    }

    /// Pushes the current list state and focus into the views.
    pub fn sync_views(&mut self) {
        self.entry_input.sync(self.list.pending());
        self.entry_list.sync(self.list.entries());
        if self.list.result().is_none() {
            self.result_view.scroll_to_top();
        }

        self.entry_input.is_active = self.focus == Focus::Input;
        self.entry_list.is_active = self.focus == Focus::Entries;
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, manages the terminal lifecycle,
/// and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    match logging::init_logging(&config) {
        Ok(Some(path)) => info!(path = %path.display(), "Logging started"),
        Ok(None) => {}
        Err(err) => eprintln!("Logging disabled: {err:#}"),
    }

    info!(version = config.version, "Starting");

    // Restore the terminal before the default hook prints the panic message.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        disable_raw_mode().ok();
        execute!(io::stdout(), LeaveAlternateScreen).ok();
        util::term::reset_terminal_bg().ok();
        original_hook(panic_info);
    }));

    let mut app = App::new();

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(err) = &res {
        warn!("Exiting with error: {err:#}");
    }
    info!("Stopped");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin black outline
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the input thread and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if key.kind == KeyEventKind::Press && tx_keys.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
        }
    });

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
