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

//! # Music Catalog TUI.
//!
//! A terminal-based catalog of songs, artists and albums.
//!
//! The catalog is loaded from flat text files at startup, edited in memory
//! through a `ratatui` frontend, and written back when the user saves or
//! quits.
//!
//! ## Architecture
//!
//! The application is single-threaded. The main loop draws a frame, blocks
//! until the next terminal event arrives, and applies it to the application
//! state. It follows a strict setup-run-teardown pattern so the terminal state
//! is restored even when the loop fails.

mod commander;
mod components;
mod config;
mod events;
mod library;
mod logging;
mod model;
mod render;
mod store;
mod theme;
mod util;

use std::{fs, io};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{error, info};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{
    commander::Commander,
    components::RecordTableState,
    library::Library,
    model::{search::SearchResults, status::Status},
    store::FileStore,
    theme::Theme,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MainView {
    Songs,
    Artists,
    Albums,
    Results,
}

/// Application state.
pub(crate) struct App {
    pub theme: Theme,
    pub main_view: MainView,

    pub library: Library<FileStore>,

    pub commander: Commander,

    pub song_table: RecordTableState,
    pub artist_table: RecordTableState,
    pub album_table: RecordTableState,

    pub results: Option<SearchResults>,
    pub status: Option<Status>,

    pub should_quit: bool,
}

impl App {
    /// Create a new instance of application state around a loaded catalog.
    pub fn new(library: Library<FileStore>) -> Self {
        Self {
            theme: Theme::default(),
            main_view: MainView::Songs,
            library,
            commander: Commander::new(),
            song_table: RecordTableState::new(),
            artist_table: RecordTableState::new(),
            album_table: RecordTableState::new(),
            results: None,
            status: None,
            should_quit: false,
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, loads the catalog, manages the
/// terminal lifecycle, and returns an error if any part of the execution
/// fails.
///
/// A catalog file that cannot be parsed stops the application before the
/// terminal is touched, so the unreadable file is never overwritten.
fn main() -> Result<()> {
    let config = config::load_config();

    if let Some(dir) = &config.data_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
    }

    logging::init_logger(&config.data_path(&config.log_file))?;
    info!("Starting with configuration {:?}", config);

    let store = FileStore::from_config(&config);
    let library = Library::open(store)
        .inspect_err(|e| error!("Failed to load catalog: {}", e))
        .context("Failed to load the music catalog")?;

    let mut app = App::new(library);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    info!("Exiting");
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
        util::term::set_terminal_bg(&mut io::stdout(), &hex).ok();
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
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg(&mut io::stdout()).ok();
    terminal.show_cursor().ok();
}

/// Runs the application event loop until the user quits.
///
/// Each iteration draws the current state, then blocks on the next terminal
/// event. Only key presses are handled; resize events simply cause a redraw.
///
/// # Errors
///
/// Returns an error if drawing fails or terminal events cannot be read.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        terminal
            .draw(|f| render::draw(f, app))
            .context("Failed to draw frame")?;

        if let Event::Key(key) = event::read().context("Failed to read terminal event")? {
            if key.kind == KeyEventKind::Press {
                events::process_key_event(app, key);
            }
        }
    }

    Ok(())
}
