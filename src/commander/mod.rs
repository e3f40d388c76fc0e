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

//! Command-line input logic and state management.
//!
//! This module implements the logic for a command-line processing component,
//! handling a text input component, and parsing the submitted text into a
//! [`ShellCommand`] when typing is finished.
//!
//! # Commands
//!
//! | Command | Action |
//! |---|---|
//! | `as title;duration;genre;artist` | add a song |
//! | `aa name;country;genre` | add an artist |
//! | `al name;artist;year;rating;genre` | add an album |
//! | `rs title` / `ra name` / `rl name` | remove songs / artists / albums |
//! | `far artist` | songs and albums by an artist |
//! | `fg genre` | songs and albums in a genre |
//! | `rank` | albums ranked by rating |
//! | `w` / `q` / `q!` | save / save and quit / quit without saving |
//! | `1` .. `4` | switch view |

use crossterm::event::{Event, KeyCode};
use thiserror::Error;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    MainView,
    model::{Album, Artist, Song},
    store::{Delimited, codec::DELIMITER},
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ShellCommand {
    AddSong(Song),
    AddArtist(Artist),
    AddAlbum(Album),

    RemoveSong(String),
    RemoveArtist(String),
    RemoveAlbum(String),

    FindByArtist(String),
    FindByGenre(String),
    RankAlbums,

    SetMainView(MainView),

    Save,
    SaveAndQuit,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub(crate) enum CommandError {
    #[error("Unknown command '{0}'")]
    Unknown(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Expected {}", expected_fields(.names))]
    FieldCount { names: &'static [&'static str] },

    #[error("Invalid {field} '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}

fn expected_fields(names: &[&str]) -> String {
    names.join(&DELIMITER.to_string())
}

/// Outcome of offering an input event to the [`Commander`].
#[derive(Debug, PartialEq)]
pub(crate) enum CommanderEvent {
    /// The event was not for the command line.
    Ignored,
    /// The event was consumed by the command line.
    Handled,
    /// A command line was submitted.
    Submitted(Result<ShellCommand, CommandError>),
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn handle_event(&mut self, event: &Event) -> CommanderEvent {
        let Event::Key(key_event) = event else {
            return CommanderEvent::Ignored;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return CommanderEvent::Handled;
            }
            return CommanderEvent::Ignored;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
                CommanderEvent::Handled
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;

                if buffer.is_empty() {
                    CommanderEvent::Handled
                } else {
                    CommanderEvent::Submitted(parse_command(&buffer))
                }
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
                CommanderEvent::Handled
            }
        }
    }
}

/// Parses one line of command text.
///
/// Text fields of added records are trimmed of surrounding whitespace so
/// `as Imagine; 3.05; Rock; John Lennon` works as expected. Keys given to the
/// remove and find commands are trimmed as a whole and matched exactly.
///
/// # Errors
///
/// Returns a [`CommandError`] describing the first problem found. Records are
/// only built from complete, well-formed input.
pub(crate) fn parse_command(buffer: &str) -> Result<ShellCommand, CommandError> {
    let buffer = buffer.trim();
    let (command, argument) = match buffer.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (buffer, ""),
    };

    let command = match command {
        "as" => ShellCommand::AddSong(parse_song(argument)?),
        "aa" => ShellCommand::AddArtist(parse_artist(argument)?),
        "al" => ShellCommand::AddAlbum(parse_album(argument)?),

        "rs" => ShellCommand::RemoveSong(required("rs", "a song title", argument)?),
        "ra" => ShellCommand::RemoveArtist(required("ra", "an artist name", argument)?),
        "rl" => ShellCommand::RemoveAlbum(required("rl", "an album name", argument)?),

        "far" => ShellCommand::FindByArtist(required("far", "an artist name", argument)?),
        "fg" => ShellCommand::FindByGenre(required("fg", "a genre", argument)?),
        "rank" => ShellCommand::RankAlbums,

        "1" => ShellCommand::SetMainView(MainView::Songs),
        "2" => ShellCommand::SetMainView(MainView::Artists),
        "3" => ShellCommand::SetMainView(MainView::Albums),
        "4" => ShellCommand::SetMainView(MainView::Results),

        "w" => ShellCommand::Save,
        "q" => ShellCommand::SaveAndQuit,
        "q!" => ShellCommand::Quit,

        unknown => return Err(CommandError::Unknown(unknown.to_string())),
    };

    Ok(command)
}

fn required(
    command: &'static str,
    argument: &'static str,
    value: &str,
) -> Result<String, CommandError> {
    if value.is_empty() {
        return Err(CommandError::MissingArgument { command, argument });
    }
    Ok(value.to_string())
}

fn split_fields<R: Delimited>(argument: &str) -> Result<Vec<&str>, CommandError> {
    let fields: Vec<&str> = argument.split(DELIMITER).map(str::trim).collect();
    if fields.len() != R::FIELD_COUNT {
        return Err(CommandError::FieldCount {
            names: R::FIELD_NAMES,
        });
    }
    Ok(fields)
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_song(argument: &str) -> Result<Song, CommandError> {
    let fields = split_fields::<Song>(argument)?;
    let duration = parse_number("duration", fields[1])?;
    Ok(Song::new(fields[0], duration, fields[2], fields[3]))
}

fn parse_artist(argument: &str) -> Result<Artist, CommandError> {
    let fields = split_fields::<Artist>(argument)?;
    Ok(Artist::new(fields[0], fields[1], fields[2]))
}

fn parse_album(argument: &str) -> Result<Album, CommandError> {
    let fields = split_fields::<Album>(argument)?;
    let year = parse_number("year", fields[2])?;
    let rating = parse_number("rating", fields[3])?;
    Ok(Album::new(fields[0], fields[1], year, rating, fields[4]))
}
