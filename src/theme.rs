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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and the
//! hexadecimal strings understood by terminal emulators.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) focus_border_colour: Color,
    pub(crate) input_colour: Color,
    pub(crate) placeholder_colour: Color,
    pub(crate) hint_colour: Color,

    pub(crate) entry_index_fg: Color,
    pub(crate) entry_fg: Color,
    pub(crate) entry_selected_bg: Color,
    pub(crate) entry_editing_fg: Color,

    pub(crate) winner_fg: Color,
    pub(crate) winner_bg: Color,
    pub(crate) order_fg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            focus_border_colour: Color::Rgb(96, 165, 250),
            input_colour: Color::Rgb(255, 255, 255),
            placeholder_colour: Color::Rgb(120, 118, 126),
            hint_colour: Color::Rgb(162, 161, 166),

            entry_index_fg: Color::Rgb(162, 161, 166),
            entry_fg: Color::Rgb(255, 255, 255),
            entry_selected_bg: Color::Rgb(70, 50, 85),
            entry_editing_fg: Color::Rgb(96, 165, 250),

            winner_fg: Color::Rgb(74, 222, 128),
            winner_bg: Color::Rgb(20, 60, 40),
            order_fg: Color::Rgb(179, 157, 219),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is used to set the terminal emulator's background color via escape
    /// sequences. Only `Rgb` colours have a hexadecimal form, anything else
    /// yields `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(Theme::to_hex(Color::Rgb(40, 20, 50)).as_deref(), Some("#281432"));
        assert_eq!(Theme::to_hex(Color::Red), None);
    }
}
