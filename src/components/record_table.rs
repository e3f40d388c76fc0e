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

//! Selection state for a record table.
//!
//! The table does not own its records; every operation is given the current
//! number of rows so the selection always stays within the collection it is
//! drawn over, even after records are removed.

use ratatui::widgets::TableState;

pub(crate) struct RecordTableState {
    pub(crate) table_state: TableState,
}

impl RecordTableState {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    /// The selected row, if any row of a `len` row table is selected.
    pub(crate) fn selected(&self, len: usize) -> Option<usize> {
        self.table_state.selected().filter(|&i| i < len)
    }

    pub(crate) fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.selected(len) {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.selected(len) {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => len - 1,
        };
        self.table_state.select(Some(i));
    }

    pub(crate) fn goto_first(&mut self, len: usize) {
        self.table_state.select(if len == 0 { None } else { Some(0) });
    }

    pub(crate) fn goto_last(&mut self, len: usize) {
        self.table_state.select(len.checked_sub(1));
    }

    /// Pulls the selection back inside a table that has shrunk to `len` rows.
    pub(crate) fn clamp(&mut self, len: usize) {
        if let Some(i) = self.table_state.selected() {
            if i >= len {
                self.table_state.select(len.checked_sub(1));
            }
        }
    }
}
