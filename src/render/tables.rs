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

//! UI rendering logic for record tables.
//!
//! This module handles the visual representation of songs, artists and
//! albums, including column layout, selection highlighting, and theme
//! application using the Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Paragraph, Row, Table, TableState},
};

use crate::{
    model::{Album, Artist, Song},
    theme::Theme,
    util::format::{format_duration, format_rating},
};

/// A record that can be shown as one row of a table.
pub(super) trait TableRecord {
    const EMPTY_MESSAGE: &'static str;

    fn header() -> Row<'static>;

    fn widths() -> Vec<Constraint>;

    fn row(&self, theme: &Theme) -> Row<'_>;
}

fn styled(text: &str, colour: ratatui::style::Color) -> Cell<'_> {
    Cell::from(Line::from(text).style(Style::default().fg(colour)))
}

fn right_aligned(text: String, colour: ratatui::style::Color) -> Cell<'static> {
    Cell::from(
        Line::from(text)
            .style(Style::default().fg(colour))
            .alignment(Alignment::Right),
    )
}

impl TableRecord for Song {
    const EMPTY_MESSAGE: &'static str = "No songs in the catalog. Add one with :as title;duration;genre;artist";

    fn header() -> Row<'static> {
        Row::new(vec![
            Cell::from("Title"),
            Cell::from("Artist"),
            Cell::from("Genre"),
            Cell::from(Line::from("Time").alignment(Alignment::Right)),
        ])
    }

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Percentage(45),
            Constraint::Percentage(30),
            Constraint::Percentage(15),
            Constraint::Length(8),
        ]
    }

    fn row(&self, theme: &Theme) -> Row<'_> {
        Row::new(vec![
            styled(self.title(), theme.table_title_fg),
            styled(self.artist(), theme.table_artist_fg),
            styled(self.genre(), theme.table_genre_fg),
            right_aligned(format_duration(self.duration()), theme.table_detail_fg),
        ])
    }
}

impl TableRecord for Artist {
    const EMPTY_MESSAGE: &'static str = "No artists in the catalog. Add one with :aa name;country;genre";

    fn header() -> Row<'static> {
        Row::new(vec![
            Cell::from("Name"),
            Cell::from("Country"),
            Cell::from("Genre"),
        ])
    }

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ]
    }

    fn row(&self, theme: &Theme) -> Row<'_> {
        Row::new(vec![
            styled(self.name(), theme.table_artist_fg),
            styled(self.country(), theme.table_detail_fg),
            styled(self.genre(), theme.table_genre_fg),
        ])
    }
}

impl TableRecord for Album {
    const EMPTY_MESSAGE: &'static str =
        "No albums in the catalog. Add one with :al name;artist;year;rating;genre";

    fn header() -> Row<'static> {
        Row::new(vec![
            Cell::from("Name"),
            Cell::from("Artist"),
            Cell::from(Line::from("Year").alignment(Alignment::Right)),
            Cell::from(Line::from("Rating").alignment(Alignment::Right)),
            Cell::from("Genre"),
        ])
    }

    fn widths() -> Vec<Constraint> {
        vec![
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Length(6),
            Constraint::Length(9),
            Constraint::Percentage(20),
        ]
    }

    fn row(&self, theme: &Theme) -> Row<'_> {
        Row::new(vec![
            styled(self.name(), theme.table_album_fg),
            styled(self.artist(), theme.table_artist_fg),
            right_aligned(self.year().to_string(), theme.table_detail_fg),
            right_aligned(format_rating(self.rating()), theme.table_rating_fg),
            styled(self.genre(), theme.table_genre_fg),
        ])
    }
}

fn build_table<'a, R: TableRecord>(records: &'a [R], block: Block<'a>, theme: &Theme) -> Table<'a> {
    let rows = records.iter().map(|record| record.row(theme));

    Table::new(rows, R::widths())
        .header(
            R::header()
                .style(
                    Style::default()
                        .fg(theme.accent_colour)
                        .add_modifier(Modifier::BOLD),
                )
                .bottom_margin(1),
        )
        .column_spacing(2)
        .block(block)
}

/// Draws a selectable table of records, or a hint when there are none.
pub(super) fn draw_records<R: TableRecord>(
    f: &mut Frame,
    area: Rect,
    block: Block<'_>,
    records: &[R],
    state: &mut TableState,
    theme: &Theme,
) {
    if records.is_empty() {
        draw_empty(f, area, block, R::EMPTY_MESSAGE, theme);
        return;
    }

    let table = build_table(records, block, theme)
        .row_highlight_style(Style::default().bg(theme.highlight_colour));

    f.render_stateful_widget(table, area, state);
}

/// Draws a read-only table of records, or `empty_message` when there are none.
pub(super) fn draw_static_records<R: TableRecord>(
    f: &mut Frame,
    area: Rect,
    block: Block<'_>,
    records: &[R],
    empty_message: &str,
    theme: &Theme,
) {
    if records.is_empty() {
        draw_empty(f, area, block, empty_message, theme);
        return;
    }

    f.render_widget(build_table(records, block, theme), area);
}

fn draw_empty(f: &mut Frame, area: Rect, block: Block<'_>, message: &str, theme: &Theme) {
    f.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(theme.status_colour))
            .block(block),
        area,
    );
}
