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

//! Terminal background colour control through OSC escape sequences.
//!
//! Terminals that do not understand OSC 11/111 ignore these sequences.

use std::io::{self, Write};

use ratatui::style::Color;

use crate::theme::Theme;

/// Paints the whole terminal window with `colour` (OSC 11).
///
/// Without this a thin border of the user's own background would remain
/// around the drawn area.
pub(crate) fn set_terminal_bg(colour: Color) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]11;{}\x07", Theme::to_hex(colour))?;
    stdout.flush()
}

/// Reverts the background to the user's own setting (OSC 111).
pub(crate) fn reset_terminal_bg() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]111\x07")?;
    stdout.flush()
}
