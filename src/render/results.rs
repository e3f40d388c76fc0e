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

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{
    model::search::SearchResults,
    render::{framed, tables},
    theme::Theme,
};

pub(super) fn draw_results(
    f: &mut Frame,
    area: Rect,
    results: Option<&SearchResults>,
    theme: &Theme,
) {
    let Some(results) = results else {
        f.render_widget(
            Paragraph::new("Nothing searched yet. Use :far <artist>, :fg <genre> or :rank")
                .style(Style::default().fg(theme.status_colour))
                .block(framed("Results", theme)),
            area,
        );
        return;
    };

    let title = results.title();

    if !results.includes_songs() {
        tables::draw_static_records(
            f,
            area,
            framed(title, theme),
            &results.albums,
            "No albums.",
            theme,
        );
        return;
    }

    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    tables::draw_static_records(
        f,
        halves[0],
        framed(format!("{} - songs", title), theme),
        &results.songs,
        "No songs.",
        theme,
    );
    tables::draw_static_records(
        f,
        halves[1],
        framed(format!("{} - albums", title), theme),
        &results.albums,
        "No albums.",
        theme,
    );
}
