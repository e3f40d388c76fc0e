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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every handled event to provide a reactive user interface.

mod commander;
mod results;
mod tables;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
};

use crate::{App, MainView, render::commander::draw_commander, theme::Theme};

/// Renders the user interface to the terminal frame.
///
/// The screen is split into a row of view tabs, the active view, and the
/// command line which doubles as the status line.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing table
///   widgets to update their scroll positions.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_tabs(f, outer[0], app);

    let theme = app.theme;
    match app.main_view {
        MainView::Songs => tables::draw_records(
            f,
            outer[1],
            framed("Songs", &theme),
            app.library.songs().as_slice(),
            &mut app.song_table.table_state,
            &theme,
        ),
        MainView::Artists => tables::draw_records(
            f,
            outer[1],
            framed("Artists", &theme),
            app.library.artists().as_slice(),
            &mut app.artist_table.table_state,
            &theme,
        ),
        MainView::Albums => tables::draw_records(
            f,
            outer[1],
            framed("Albums", &theme),
            app.library.albums().as_slice(),
            &mut app.album_table.table_state,
            &theme,
        ),
        MainView::Results => results::draw_results(f, outer[1], app.results.as_ref(), &theme),
    }

    draw_commander(f, outer[2], app);
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
    let library = &app.library;
    let titles = vec![
        format!("1 Songs ({})", library.songs().len()),
        format!("2 Artists ({})", library.artists().len()),
        format!("3 Albums ({})", library.albums().len()),
        String::from("4 Results"),
    ];

    let selected = match app.main_view {
        MainView::Songs => 0,
        MainView::Artists => 1,
        MainView::Albums => 2,
        MainView::Results => 3,
    };

    let tabs = Tabs::new(titles.into_iter().map(Line::from))
        .select(selected)
        .style(Style::default().fg(app.theme.border_colour))
        .highlight_style(
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        );

    // Unsaved changes marker on the right.
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(9)])
        .split(area);

    f.render_widget(tabs, layout[0]);
    if library.is_dirty() {
        f.render_widget(
            Line::from("modified").style(Style::default().fg(app.theme.accent_colour)),
            layout[1],
        );
    }
}

pub(crate) fn framed<'a>(title: impl Into<Line<'a>>, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .title(title)
}
