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

//! Data access layer.
//!
//! This module persists the catalog to flat text files, one file per record
//! kind, using the delimited line format implemented in [`codec`].
//!
//! # Files
//!
//! * songs - `music_database.txt` by default.
//! * artists - `artist_database.txt` by default.
//! * albums - `album_database.txt` by default.
//!
//! # Failure modes
//!
//! A file that is missing or cannot be opened loads as an empty collection,
//! which is how a first run with no prior data looks. A path naming a
//! directory, unreadable bytes and malformed content are errors that name the
//! file and line. Saving rewrites the whole file in place with no atomic replace, so a
//! crash part way through a save can leave a truncated file.

pub(crate) mod codec;

use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
    path::{Path, PathBuf},
};

use log::{debug, error, info, warn};
use thiserror::Error;

use crate::{config::AppConfig, model::RecordKind};

pub(crate) use codec::Delimited;

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("cannot open {kind} file {}: {source}", .path.display())]
    Open {
        kind: RecordKind,
        path: PathBuf,
        source: io::Error,
    },

    #[error("{kind} line {line}: cannot read: {source}")]
    Read {
        kind: RecordKind,
        line: usize,
        source: io::Error,
    },

    #[error("{kind} path {} is a directory", .path.display())]
    NotAFile { kind: RecordKind, path: PathBuf },

    #[error("{}: {error}", .path.display())]
    Load {
        path: PathBuf,
        error: Box<StoreError>,
    },

    #[error("failed writing {kind} file {}: {source}", .path.display())]
    Write {
        kind: RecordKind,
        path: PathBuf,
        source: io::Error,
    },

    #[error("{kind} line {line}: expected {expected} fields, found {found}")]
    MissingFields {
        kind: RecordKind,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{kind} line {line}: invalid {field} '{value}'")]
    InvalidNumber {
        kind: RecordKind,
        line: usize,
        field: &'static str,
        value: String,
    },
}

/// Persistence collaborator used by the library to load and save records.
pub(crate) trait Store {
    /// Loads every record of one kind.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if stored data exists but is malformed. Absent
    /// data is not an error and yields an empty vector.
    fn load<R: Delimited>(&self) -> Result<Vec<R>, StoreError>;

    /// Replaces the stored records of one kind.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the destination cannot be opened, in which
    /// case nothing is written, or if writing fails part way.
    fn save<R: Delimited>(&self, records: &[R]) -> Result<(), StoreError>;
}

/// A [`Store`] backed by one text file per record kind.
#[derive(Debug, Clone)]
pub(crate) struct FileStore {
    songs: PathBuf,
    artists: PathBuf,
    albums: PathBuf,
}

impl FileStore {
    pub(crate) fn new(
        songs: impl Into<PathBuf>,
        artists: impl Into<PathBuf>,
        albums: impl Into<PathBuf>,
    ) -> Self {
        Self {
            songs: songs.into(),
            artists: artists.into(),
            albums: albums.into(),
        }
    }

    pub(crate) fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.data_path(&config.songs_file),
            config.data_path(&config.artists_file),
            config.data_path(&config.albums_file),
        )
    }

    pub(crate) fn path(&self, kind: RecordKind) -> &Path {
        match kind {
            RecordKind::Song => &self.songs,
            RecordKind::Artist => &self.artists,
            RecordKind::Album => &self.albums,
        }
    }
}

impl Store for FileStore {
    fn load<R: Delimited>(&self) -> Result<Vec<R>, StoreError> {
        let path = self.path(R::KIND);

        if path.is_dir() {
            return Err(StoreError::NotAFile {
                kind: R::KIND,
                path: path.to_path_buf(),
            });
        }

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("No {} file at {}, starting empty", R::KIND, path.display());
                return Ok(vec![]);
            }
            Err(e) => {
                error!("Cannot open {} file {}: {}", R::KIND, path.display(), e);
                return Ok(vec![]);
            }
        };

        let records = codec::decode(BufReader::new(file)).map_err(|e| StoreError::Load {
            path: path.to_path_buf(),
            error: Box::new(e),
        })?;
        info!("Loaded {} {} records from {}", records.len(), R::KIND, path.display());

        Ok(records)
    }

    fn save<R: Delimited>(&self, records: &[R]) -> Result<(), StoreError> {
        let path = self.path(R::KIND);

        let file = File::create(path).map_err(|source| StoreError::Open {
            kind: R::KIND,
            path: path.to_path_buf(),
            source,
        })?;

        codec::encode(records, BufWriter::new(file)).map_err(|source| StoreError::Write {
            kind: R::KIND,
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Saved {} {} records to {}", records.len(), R::KIND, path.display());

        Ok(())
    }
}
