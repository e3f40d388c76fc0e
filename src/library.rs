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

//! The music catalog.
//!
//! [`Library`] is the application context: it owns the song, artist and album
//! collections and the [`Store`] they are loaded from and saved to. The user
//! interface only ever talks to the catalog through this type.

use log::{error, info};

use crate::{
    model::{Album, Artist, Song, collection::Collection},
    store::{Delimited, Store, StoreError},
};

pub(crate) struct Library<S: Store> {
    store: S,
    songs: Collection<Song>,
    artists: Collection<Artist>,
    albums: Collection<Album>,
    dirty: bool,
}

/// Outcome of saving every collection.
///
/// Each collection is saved independently, so one failure does not prevent
/// the others from being written.
#[derive(Debug, Default)]
pub(crate) struct SaveReport {
    pub(crate) failures: Vec<StoreError>,
}

impl SaveReport {
    pub(crate) fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

impl<S: Store> Library<S> {
    /// Loads every collection from the store.
    ///
    /// Missing data loads as empty collections.
    ///
    /// # Errors
    ///
    /// Returns the first [`StoreError`] raised for malformed data. Nothing is
    /// loaded in that case, so the caller can refuse to continue rather than
    /// later overwrite the unreadable data with a partial catalog.
    pub(crate) fn open(store: S) -> Result<Self, StoreError> {
        let songs = store.load::<Song>()?;
        let artists = store.load::<Artist>()?;
        let albums = store.load::<Album>()?;

        Ok(Self {
            store,
            songs: songs.into(),
            artists: artists.into(),
            albums: albums.into(),
            dirty: false,
        })
    }

    pub(crate) fn songs(&self) -> &Collection<Song> {
        &self.songs
    }

    pub(crate) fn artists(&self) -> &Collection<Artist> {
        &self.artists
    }

    pub(crate) fn albums(&self) -> &Collection<Album> {
        &self.albums
    }

    /// Whether the catalog changed since it was loaded or last saved.
    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn add_song(&mut self, song: Song) {
        self.songs.append(song);
        self.dirty = true;
    }

    pub(crate) fn add_artist(&mut self, artist: Artist) {
        self.artists.append(artist);
        self.dirty = true;
    }

    pub(crate) fn add_album(&mut self, album: Album) {
        self.albums.append(album);
        self.dirty = true;
    }

    /// Removes every song with the given title.
    pub(crate) fn remove_song(&mut self, title: &str) -> bool {
        let removed = self.songs.remove_by_key(title);
        self.mark_removed(removed, "song", title);
        removed
    }

    /// Removes every artist with the given name.
    pub(crate) fn remove_artist(&mut self, name: &str) -> bool {
        let removed = self.artists.remove_by_key(name);
        self.mark_removed(removed, "artist", name);
        removed
    }

    /// Removes every album with the given name.
    pub(crate) fn remove_album(&mut self, name: &str) -> bool {
        let removed = self.albums.remove_by_key(name);
        self.mark_removed(removed, "album", name);
        removed
    }

    fn mark_removed(&mut self, removed: bool, kind: &str, key: &str) {
        if removed {
            info!("Removed {} '{}'", kind, key);
            self.dirty = true;
        }
    }

    pub(crate) fn songs_by_artist(&self, artist: &str) -> Vec<&Song> {
        self.songs.find_by(Song::artist, artist)
    }

    pub(crate) fn albums_by_artist(&self, artist: &str) -> Vec<&Album> {
        self.albums.find_by(Album::artist, artist)
    }

    pub(crate) fn songs_by_genre(&self, genre: &str) -> Vec<&Song> {
        self.songs.find_by(Song::genre, genre)
    }

    pub(crate) fn albums_by_genre(&self, genre: &str) -> Vec<&Album> {
        self.albums.find_by(Album::genre, genre)
    }

    /// Albums ordered by rating, best first.
    pub(crate) fn album_ranking(&self) -> Vec<&Album> {
        self.albums.rank_by_rating()
    }

    /// Writes every collection back to the store.
    ///
    /// Failures are logged and collected in the returned report rather than
    /// aborting the save.
    pub(crate) fn save(&mut self) -> SaveReport {
        let mut report = SaveReport::default();

        save_collection(&self.store, &self.songs, &mut report);
        save_collection(&self.store, &self.artists, &mut report);
        save_collection(&self.store, &self.albums, &mut report);

        if report.is_ok() {
            info!(
                "Saved {} songs, {} artists, {} albums",
                self.songs.len(),
                self.artists.len(),
                self.albums.len()
            );
            self.dirty = false;
        }

        report
    }
}

fn save_collection<S: Store, R: Delimited>(
    store: &S,
    collection: &Collection<R>,
    report: &mut SaveReport,
) {
    if let Err(e) = store.save(collection.as_slice()) {
        error!("Failed to save {} records: {}", R::KIND, e);
        report.failures.push(e);
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        collections::{HashMap, HashSet},
        io::Cursor,
    };

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{Record, RecordKind},
        store::codec,
    };

    /// An in-memory [`Store`] holding the encoded text of each record kind.
    #[derive(Default)]
    struct MemoryStore {
        files: RefCell<HashMap<RecordKind, String>>,
        read_only: HashSet<RecordKind>,
    }

    impl MemoryStore {
        fn with_file(self, kind: RecordKind, text: &str) -> Self {
            self.files.borrow_mut().insert(kind, text.to_string());
            self
        }

        fn text(&self, kind: RecordKind) -> Option<String> {
            self.files.borrow().get(&kind).cloned()
        }
    }

    impl Store for MemoryStore {
        fn load<R: Delimited>(&self) -> Result<Vec<R>, StoreError> {
            match self.files.borrow().get(&R::KIND) {
                Some(text) => codec::decode(Cursor::new(text.clone())),
                None => Ok(vec![]),
            }
        }

        fn save<R: Delimited>(&self, records: &[R]) -> Result<(), StoreError> {
            if self.read_only.contains(&R::KIND) {
                return Err(StoreError::Open {
                    kind: R::KIND,
                    path: format!("memory/{}", R::KIND).into(),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                });
            }

            let mut buffer = Vec::new();
            codec::encode(records, &mut buffer).map_err(|source| StoreError::Write {
                kind: R::KIND,
                path: format!("memory/{}", R::KIND).into(),
                source,
            })?;
            let text = String::from_utf8_lossy(&buffer).into_owned();
            self.files.borrow_mut().insert(R::KIND, text);
            Ok(())
        }
    }

    fn keys<'a, R: Record + 'a>(records: impl IntoIterator<Item = &'a R>) -> Vec<&'a str> {
        records.into_iter().map(R::key).collect()
    }

    fn library() -> Library<MemoryStore> {
        let store = MemoryStore::default()
            .with_file(
                RecordKind::Song,
                "Imagine;3.05;Rock;John Lennon\nDancing Queen;3.51;Pop;Abba\nImagine;3.2;Pop;A Perfect Circle\n",
            )
            .with_file(RecordKind::Artist, "Abba;Sweden;Pop\nJohn Lennon;UK;Rock\n")
            .with_file(
                RecordKind::Album,
                "A;X;2000;7;Rock\nB;Y;2010;9;Pop\nC;Z;1995;9;Jazz\nArrival;Abba;1976;8.5;Pop\n",
            );
        Library::open(store).unwrap()
    }

    #[test]
    fn open_loads_every_collection() {
        let library = library();
        assert_eq!(library.songs().len(), 3);
        assert_eq!(library.artists().len(), 2);
        assert_eq!(library.albums().len(), 4);
        assert!(!library.is_dirty());
    }

    #[test]
    fn open_without_data_is_empty() {
        let library = Library::open(MemoryStore::default()).unwrap();
        assert!(library.songs().is_empty());
        assert!(library.artists().is_empty());
        assert!(library.albums().is_empty());
    }

    #[test]
    fn open_fails_on_malformed_data() {
        let store = MemoryStore::default().with_file(RecordKind::Song, "Imagine;long;Rock;John Lennon\n");
        assert!(matches!(
            Library::open(store),
            Err(StoreError::InvalidNumber { kind: RecordKind::Song, .. })
        ));
    }

    #[test]
    fn removing_a_shared_title_removes_every_song() {
        let mut library = library();

        assert!(library.remove_song("Imagine"));
        assert_eq!(keys(library.songs().iter()), vec!["Dancing Queen"]);
        assert!(library.is_dirty());
    }

    #[test]
    fn removing_an_unknown_key_changes_nothing() {
        let mut library = library();

        assert!(!library.remove_song("Yesterday"));
        assert!(!library.remove_artist("abba"));
        assert!(!library.remove_album("D"));
        assert_eq!(library.songs().len(), 3);
        assert_eq!(library.artists().len(), 2);
        assert_eq!(library.albums().len(), 4);
        assert!(!library.is_dirty());
    }

    #[test]
    fn search_by_artist_and_genre() {
        let library = library();

        assert_eq!(keys(library.songs_by_artist("Abba")), vec!["Dancing Queen"]);
        assert_eq!(keys(library.albums_by_artist("Abba")), vec!["Arrival"]);
        assert_eq!(keys(library.songs_by_genre("Pop")), vec!["Dancing Queen", "Imagine"]);
        assert_eq!(keys(library.albums_by_genre("Pop")), vec!["B", "Arrival"]);
        assert!(library.songs_by_artist("Queen").is_empty());
        assert!(library.albums_by_genre("Polka").is_empty());
    }

    #[test]
    fn ranking_orders_albums_by_rating() {
        let library = library();
        assert_eq!(keys(library.album_ranking()), vec!["B", "C", "Arrival", "A"]);
    }

    #[test]
    fn additions_are_saved_and_reloaded() {
        let mut library = library();
        library.add_song(Song::new("Yesterday", 2.05, "Pop", "The Beatles"));
        library.add_artist(Artist::new("The Beatles", "UK", "Rock"));
        library.add_album(Album::new("Help!", "The Beatles", 1965, 8.0, "Rock"));
        assert!(library.is_dirty());

        let report = library.save();
        assert!(report.is_ok());
        assert!(!library.is_dirty());

        let reopened = Library::open(library.store).unwrap();
        assert_eq!(reopened.songs().as_slice().get(3), Some(&Song::new("Yesterday", 2.05, "Pop", "The Beatles")));
        assert_eq!(reopened.artists().len(), 3);
        assert_eq!(keys(reopened.albums().iter()), vec!["A", "B", "C", "Arrival", "Help!"]);
    }

    #[test]
    fn one_failing_save_does_not_stop_the_others() {
        let mut store = MemoryStore::default();
        store.read_only.insert(RecordKind::Artist);
        let mut library = Library::open(store).unwrap();

        library.add_song(Song::new("Imagine", 3.05, "Rock", "John Lennon"));
        library.add_artist(Artist::new("Queen", "UK", "Rock"));
        library.add_album(Album::new("A", "X", 2000, 7.0, "Rock"));

        let report = library.save();
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(report.failures[0], StoreError::Open { kind: RecordKind::Artist, .. }));
        assert!(library.is_dirty());

        assert_eq!(
            library.store.text(RecordKind::Song).as_deref(),
            Some("Imagine;3.05;Rock;John Lennon\n")
        );
        assert_eq!(library.store.text(RecordKind::Artist), None);
        assert_eq!(library.store.text(RecordKind::Album).as_deref(), Some("A;X;2000;7;Rock\n"));
    }
}
