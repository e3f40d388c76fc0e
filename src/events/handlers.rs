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

use log::{info, warn};

use crate::{
    App, MainView,
    model::{
        Album, Artist, Record, Song,
        search::{SearchQuery, SearchResults},
        status::Status,
    },
};

pub(super) fn set_main_view(app: &mut App, view: MainView) {
    app.main_view = view;
}

pub(super) fn add_song(app: &mut App, song: Song) {
    app.status = Some(Status::info(format!("Song '{}' added", song.title())));
    app.library.add_song(song);
}

pub(super) fn add_artist(app: &mut App, artist: Artist) {
    app.status = Some(Status::info(format!("Artist '{}' added", artist.name())));
    app.library.add_artist(artist);
}

pub(super) fn add_album(app: &mut App, album: Album) {
    app.status = Some(Status::info(format!("Album '{}' added", album.name())));
    app.library.add_album(album);
}

pub(super) fn remove_song(app: &mut App, title: &str) {
    let before = app.library.songs().len();
    let removed = app.library.remove_song(title);
    let remaining = app.library.songs().len();
    app.song_table.clamp(remaining);

    app.status = Some(if removed {
        Status::info(format!("Removed {} titled '{}'", count(before - remaining, "song"), title))
    } else {
        Status::error(format!("No song titled '{}'", title))
    });
}

pub(super) fn remove_artist(app: &mut App, name: &str) {
    let before = app.library.artists().len();
    let removed = app.library.remove_artist(name);
    let remaining = app.library.artists().len();
    app.artist_table.clamp(remaining);

    app.status = Some(if removed {
        Status::info(format!("Removed {} named '{}'", count(before - remaining, "artist"), name))
    } else {
        Status::error(format!("No artist named '{}'", name))
    });
}

pub(super) fn remove_album(app: &mut App, name: &str) {
    let before = app.library.albums().len();
    let removed = app.library.remove_album(name);
    let remaining = app.library.albums().len();
    app.album_table.clamp(remaining);

    app.status = Some(if removed {
        Status::info(format!("Removed {} named '{}'", count(before - remaining, "album"), name))
    } else {
        Status::error(format!("No album named '{}'", name))
    });
}

/// Removes every record sharing the key of the selected row.
pub(super) fn remove_selected(app: &mut App) {
    match app.main_view {
        MainView::Songs => {
            let songs = app.library.songs();
            if let Some(key) = selected_key(songs.as_slice(), app.song_table.selected(songs.len())) {
                remove_song(app, &key);
            }
        }
        MainView::Artists => {
            let artists = app.library.artists();
            if let Some(key) = selected_key(artists.as_slice(), app.artist_table.selected(artists.len())) {
                remove_artist(app, &key);
            }
        }
        MainView::Albums => {
            let albums = app.library.albums();
            if let Some(key) = selected_key(albums.as_slice(), app.album_table.selected(albums.len())) {
                remove_album(app, &key);
            }
        }
        MainView::Results => {}
    }
}

fn selected_key<R: Record>(records: &[R], selected: Option<usize>) -> Option<String> {
    selected
        .and_then(|i| records.get(i))
        .map(|record| record.key().to_string())
}

pub(super) fn find_by_artist(app: &mut App, artist: String) {
    let songs = app.library.songs_by_artist(&artist);
    let albums = app.library.albums_by_artist(&artist);
    let results = SearchResults::new(SearchQuery::ByArtist(artist.clone()), songs, albums);

    let status = if results.is_empty() {
        format!("No songs or albums by '{}'", artist)
    } else {
        format!("Found {} by '{}'", found(&results), artist)
    };

    show_results(app, results, status);
}

pub(super) fn find_by_genre(app: &mut App, genre: String) {
    let songs = app.library.songs_by_genre(&genre);
    let albums = app.library.albums_by_genre(&genre);
    let results = SearchResults::new(SearchQuery::ByGenre(genre.clone()), songs, albums);

    let status = if results.is_empty() {
        format!("No songs or albums in genre '{}'", genre)
    } else {
        format!("Found {} in genre '{}'", found(&results), genre)
    };

    show_results(app, results, status);
}

fn found(results: &SearchResults) -> String {
    format!(
        "{} and {}",
        count(results.songs.len(), "song"),
        count(results.albums.len(), "album")
    )
}

pub(super) fn rank_albums(app: &mut App) {
    if app.library.albums().is_empty() {
        app.status = Some(Status::info("No albums in the catalog to rank"));
        return;
    }

    let results = SearchResults::new(SearchQuery::Ranking, vec![], app.library.album_ranking());
    let status = format!("Ranked {}", count(results.albums.len(), "album"));
    show_results(app, results, status);
}

fn show_results(app: &mut App, results: SearchResults, status: String) {
    app.results = Some(results);
    app.main_view = MainView::Results;
    app.status = Some(Status::info(status));
}

/// Saves the catalog, returning whether every file was written.
pub(super) fn save(app: &mut App) -> bool {
    let report = app.library.save();

    if report.is_ok() {
        app.status = Some(Status::info("Catalog saved"));
        return true;
    }

    let reasons: Vec<String> = report.failures.iter().map(ToString::to_string).collect();
    app.status = Some(Status::error(format!(
        "Save failed: {} (q! quits without saving)",
        reasons.join("; ")
    )));
    false
}

pub(super) fn quit_without_saving(app: &mut App) {
    if app.library.is_dirty() {
        warn!("Quitting with unsaved changes");
    } else {
        info!("Quitting without saving");
    }
    app.should_quit = true;
}

pub(super) fn select_next(app: &mut App) {
    match app.main_view {
        MainView::Songs => app.song_table.goto_next(app.library.songs().len()),
        MainView::Artists => app.artist_table.goto_next(app.library.artists().len()),
        MainView::Albums => app.album_table.goto_next(app.library.albums().len()),
        MainView::Results => {}
    }
}

pub(super) fn select_previous(app: &mut App) {
    match app.main_view {
        MainView::Songs => app.song_table.goto_previous(app.library.songs().len()),
        MainView::Artists => app.artist_table.goto_previous(app.library.artists().len()),
        MainView::Albums => app.album_table.goto_previous(app.library.albums().len()),
        MainView::Results => {}
    }
}

pub(super) fn select_first(app: &mut App) {
    match app.main_view {
        MainView::Songs => app.song_table.goto_first(app.library.songs().len()),
        MainView::Artists => app.artist_table.goto_first(app.library.artists().len()),
        MainView::Albums => app.album_table.goto_first(app.library.albums().len()),
        MainView::Results => {}
    }
}

pub(super) fn select_last(app: &mut App) {
    match app.main_view {
        MainView::Songs => app.song_table.goto_last(app.library.songs().len()),
        MainView::Artists => app.artist_table.goto_last(app.library.artists().len()),
        MainView::Albums => app.album_table.goto_last(app.library.albums().len()),
        MainView::Results => {}
    }
}

fn count(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", n, noun)
    }
}
