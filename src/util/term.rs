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

//! Terminal background control.
//!
//! Uses OSC 11 and OSC 111 escape sequences, which most modern terminal
//! emulators understand. Terminals that don't simply ignore them.

use std::io::{self, Write};

fn write_osc(sequence: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]{sequence}\x07")?;
    stdout.flush()
}

/// Sets the terminal background colour, e.g. `"#281432"`.
pub(crate) fn set_terminal_bg(hex_colour: &str) -> io::Result<()> {
    write_osc(&format!("11;{hex_colour}"))
}

/// Reverts the terminal background to the user's own configuration.
pub(crate) fn reset_terminal_bg() -> io::Result<()> {
    write_osc("111")
}
