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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the catalog (Songs, Artists
//! and Albums). Each is a flat value object: fields are set when the record is
//! constructed and are read-only afterwards, so changing a record means
//! removing it and adding a replacement.
//!
//! No validation is performed on construction. Empty strings, negative
//! durations, out-of-range ratings and non-positive years are all accepted.

pub(crate) mod collection;
pub(crate) mod search;
pub(crate) mod status;

use std::fmt;

/// Upper bound of the album rating scale, used for display labels only.
pub(crate) const RATING_SCALE_MAX: u32 = 10;

/// The three kinds of record held by the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum RecordKind {
    Song,
    Artist,
    Album,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordKind::Song => "song",
            RecordKind::Artist => "artist",
            RecordKind::Album => "album",
        };
        f.write_str(label)
    }
}

/// Behaviour shared by every catalog record.
///
/// The key field identifies a record for removal: the title of a song, the
/// name of an artist or album. Keys are not unique.
pub(crate) trait Record {
    const KIND: RecordKind;

    fn key(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Song {
    title: String,
    duration: f64,
    genre: String,
    artist: String,
}

impl Song {
    pub(crate) fn new(
        title: impl Into<String>,
        duration: f64,
        genre: impl Into<String>,
        artist: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            duration,
            genre: genre.into(),
            artist: artist.into(),
        }
    }

    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    /// Duration in minutes.
    pub(crate) fn duration(&self) -> f64 {
        self.duration
    }

    pub(crate) fn genre(&self) -> &str {
        &self.genre
    }

    pub(crate) fn artist(&self) -> &str {
        &self.artist
    }
}

impl Record for Song {
    const KIND: RecordKind = RecordKind::Song;

    fn key(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Artist {
    name: String,
    country: String,
    genre: String,
}

impl Artist {
    pub(crate) fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            genre: genre.into(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn country(&self) -> &str {
        &self.country
    }

    pub(crate) fn genre(&self) -> &str {
        &self.genre
    }
}

impl Record for Artist {
    const KIND: RecordKind = RecordKind::Artist;

    fn key(&self) -> &str {
        &self.name
    }
}

/// An album, rated on a scale of zero to [`RATING_SCALE_MAX`].
///
/// The artist is free text and is not checked against the artist collection.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Album {
    name: String,
    artist: String,
    year: i32,
    rating: f64,
    genre: String,
}

impl Album {
    pub(crate) fn new(
        name: impl Into<String>,
        artist: impl Into<String>,
        year: i32,
        rating: f64,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            artist: artist.into(),
            year,
            rating,
            genre: genre.into(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn artist(&self) -> &str {
        &self.artist
    }

    pub(crate) fn year(&self) -> i32 {
        self.year
    }

    pub(crate) fn rating(&self) -> f64 {
        self.rating
    }

    pub(crate) fn genre(&self) -> &str {
        &self.genre
    }
}

impl Record for Album {
    const KIND: RecordKind = RecordKind::Album;

    fn key(&self) -> &str {
        &self.name
    }
}
