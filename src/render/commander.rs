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

//! Render the command-line interface.
//!
//! While a command is being typed this shows the text and the cursor,
//! otherwise the line reports the outcome of the last action.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::App;

const KEY_HINT: &str = ":command  1-4 views  j/k move  d delete  q save and quit";

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;
    let theme = &app.theme;

    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    if commander.active() {
        f.render_widget(
            Paragraph::new(format!(":{}", commander.input.value())).style(
                Style::default()
                    .fg(theme.commander_colour)
                    .bg(theme.commander_background_colour),
            ),
            container[0],
        );

        // One column for the prompt.
        let cursor_x = container[0].x + 1 + commander.input.cursor() as u16;
        let cursor_y = container[0].y;
        f.set_cursor_position((cursor_x, cursor_y));
        return;
    }

    let line = match &app.status {
        Some(status) if status.is_error => Paragraph::new(status.text.as_str())
            .style(Style::default().fg(theme.error_colour)),
        Some(status) => Paragraph::new(status.text.as_str())
            .style(Style::default().fg(theme.status_colour)),
        None => Paragraph::new(KEY_HINT).style(Style::default().fg(theme.border_colour)),
    };

    f.render_widget(line, container[0]);
}
