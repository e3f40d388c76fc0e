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

//! Search and ranking results.
//!
//! This module provides state for the results view, holding a snapshot of the
//! songs and albums matched by the most recent query.

use crate::model::{Album, Song};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SearchQuery {
    ByArtist(String),
    ByGenre(String),
    Ranking,
}

#[derive(Debug, Clone)]
pub(crate) struct SearchResults {
    pub(crate) query: SearchQuery,
    pub(crate) songs: Vec<Song>,
    pub(crate) albums: Vec<Album>,
}

impl SearchResults {
    pub(crate) fn new(query: SearchQuery, songs: Vec<&Song>, albums: Vec<&Album>) -> Self {
        Self {
            query,
            songs: songs.into_iter().cloned().collect(),
            albums: albums.into_iter().cloned().collect(),
        }
    }

    pub(crate) fn title(&self) -> String {
        match &self.query {
            SearchQuery::ByArtist(artist) => format!("By artist '{}'", artist),
            SearchQuery::ByGenre(genre) => format!("In genre '{}'", genre),
            SearchQuery::Ranking => String::from("Album ranking by rating"),
        }
    }

    /// Whether the query covers songs; the ranking only lists albums.
    pub(crate) fn includes_songs(&self) -> bool {
        !matches!(self.query, SearchQuery::Ranking)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.songs.is_empty() && self.albums.is_empty()
    }
}
