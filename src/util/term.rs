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

//! Terminal environment and styling utilities.
//!
//! This module changes the terminal emulator's background color using OSC
//! (Operating System Command) escape sequences. Most modern terminals (XTerm,
//! iTerm2, Alacritty, Kitty) support these; others ignore them.

use std::io::{self, Write};

/// Sets the terminal background color using an OSC 11 escape sequence.
///
/// # Arguments
///
/// * `out` - The terminal output stream, flushed so the change applies
///   immediately.
/// * `hex_color` - The color as a hex string (e.g., `"#1e1e1e"`).
pub(crate) fn set_terminal_bg<W: Write>(out: &mut W, hex_color: &str) -> io::Result<()> {
    write!(out, "\x1b]11;{}\x07", hex_color)?;
    out.flush()
}

/// Resets the terminal background to the user's configured color using the
/// OSC 111 escape sequence.
pub(crate) fn reset_terminal_bg<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\x1b]111\x07")?;
    out.flush()
}
