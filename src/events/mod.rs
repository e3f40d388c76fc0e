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

//! Application logic, event handling, and command dispatching.
//!
//! This module acts as the "Controller" of the application. Key events are
//! offered to the command line first; anything it does not consume is treated
//! as a global key binding. Submitted commands are applied to the catalog and
//! the outcome is reported on the status line.

mod handlers;

use crossterm::event::{Event, KeyCode, KeyEvent};
use log::warn;

use crate::{
    App, MainView,
    commander::{CommanderEvent, ShellCommand},
    model::status::Status,
};

/// Routes a single key press.
///
/// # Key bindings
///
/// | Key | Action |
/// |---|---|
/// | `:` | open the command line |
/// | `1`..`4` | songs, artists, albums, results view |
/// | `j` / `Down`, `k` / `Up` | move the selection |
/// | `g` / `Home`, `G` / `End` | first / last row |
/// | `d` | remove every record sharing the selected row's key |
/// | `q` | save and quit |
pub(crate) fn process_key_event(app: &mut App, key: KeyEvent) {
    let event = Event::Key(key);

    match app.commander.handle_event(&event) {
        CommanderEvent::Ignored => process_global_key_event(app, key),
        CommanderEvent::Handled => {}
        CommanderEvent::Submitted(Ok(command)) => apply_command(app, command),
        CommanderEvent::Submitted(Err(e)) => {
            warn!("Rejected command: {}", e);
            app.status = Some(Status::error(e.to_string()));
        }
    }
}

fn process_global_key_event(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => apply_command(app, ShellCommand::SaveAndQuit),

        KeyCode::Char('1') => handlers::set_main_view(app, MainView::Songs),
        KeyCode::Char('2') => handlers::set_main_view(app, MainView::Artists),
        KeyCode::Char('3') => handlers::set_main_view(app, MainView::Albums),
        KeyCode::Char('4') => handlers::set_main_view(app, MainView::Results),

        KeyCode::Char('j') | KeyCode::Down => handlers::select_next(app),
        KeyCode::Char('k') | KeyCode::Up => handlers::select_previous(app),
        KeyCode::Char('g') | KeyCode::Home => handlers::select_first(app),
        KeyCode::Char('G') | KeyCode::End => handlers::select_last(app),

        KeyCode::Char('d') | KeyCode::Delete => handlers::remove_selected(app),

        _ => {}
    }
}

/// Applies a parsed command to the application state.
pub(crate) fn apply_command(app: &mut App, command: ShellCommand) {
    match command {
        ShellCommand::AddSong(song) => handlers::add_song(app, song),
        ShellCommand::AddArtist(artist) => handlers::add_artist(app, artist),
        ShellCommand::AddAlbum(album) => handlers::add_album(app, album),

        ShellCommand::RemoveSong(title) => handlers::remove_song(app, &title),
        ShellCommand::RemoveArtist(name) => handlers::remove_artist(app, &name),
        ShellCommand::RemoveAlbum(name) => handlers::remove_album(app, &name),

        ShellCommand::FindByArtist(artist) => handlers::find_by_artist(app, artist),
        ShellCommand::FindByGenre(genre) => handlers::find_by_genre(app, genre),
        ShellCommand::RankAlbums => handlers::rank_albums(app),

        ShellCommand::SetMainView(view) => handlers::set_main_view(app, view),

        ShellCommand::Save => {
            handlers::save(app);
        }
        ShellCommand::SaveAndQuit => {
            if handlers::save(app) {
                app.should_quit = true;
            }
        }
        ShellCommand::Quit => handlers::quit_without_saving(app),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;
    use crate::{
        library::Library,
        model::{Album, Record, Song},
        store::FileStore,
    };

    struct Fixture {
        dir: TempDir,
        app: App,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            fs::write(
                dir.path().join("songs.txt"),
                "Imagine;3.05;Rock;John Lennon\nDancing Queen;3.51;Pop;Abba\nImagine;3.2;Pop;A Perfect Circle\n",
            )
            .unwrap();
            fs::write(dir.path().join("artists.txt"), "Abba;Sweden;Pop\n").unwrap();
            fs::write(
                dir.path().join("albums.txt"),
                "A;X;2000;7;Rock\nB;Y;2010;9;Pop\nC;Z;1995;9;Jazz\n",
            )
            .unwrap();

            let store = Self::store(&dir);
            let app = App::new(Library::open(store).unwrap());
            Self { dir, app }
        }

        fn store(dir: &TempDir) -> FileStore {
            FileStore::new(
                dir.path().join("songs.txt"),
                dir.path().join("artists.txt"),
                dir.path().join("albums.txt"),
            )
        }

        fn read(&self, name: &str) -> String {
            fs::read_to_string(self.dir.path().join(name)).unwrap()
        }

        fn press(&mut self, code: KeyCode) {
            process_key_event(&mut self.app, KeyEvent::new(code, KeyModifiers::NONE));
        }

        fn run(&mut self, command: &str) {
            self.press(KeyCode::Char(':'));
            for c in command.chars() {
                self.press(KeyCode::Char(c));
            }
            self.press(KeyCode::Enter);
        }

        fn status(&self) -> Status {
            self.app.status.clone().expect("status message")
        }
    }

    fn keys<R: Record>(records: &[R]) -> Vec<&str> {
        records.iter().map(R::key).collect()
    }

    #[test]
    fn add_command_appends_to_the_catalog() {
        let mut fixture = Fixture::new();

        fixture.run("as Yesterday;2.05;Pop;The Beatles");

        let songs = fixture.app.library.songs();
        assert_eq!(songs.len(), 4);
        assert_eq!(songs.as_slice().get(3), Some(&Song::new("Yesterday", 2.05, "Pop", "The Beatles")));
        assert_eq!(fixture.status(), Status::info("Song 'Yesterday' added"));
    }

    #[test]
    fn bad_command_reports_an_error_and_changes_nothing() {
        let mut fixture = Fixture::new();

        fixture.run("al Help!;The Beatles;1965;great;Rock");

        assert_eq!(fixture.app.library.albums().len(), 3);
        assert_eq!(fixture.status(), Status::error("Invalid rating 'great'"));
    }

    #[test]
    fn remove_command_removes_every_match() {
        let mut fixture = Fixture::new();

        fixture.run("rs Imagine");

        assert_eq!(keys(fixture.app.library.songs().as_slice()), vec!["Dancing Queen"]);
        assert_eq!(fixture.status(), Status::info("Removed 2 songs titled 'Imagine'"));
    }

    #[test]
    fn remove_of_unknown_key_is_reported_not_found() {
        let mut fixture = Fixture::new();

        fixture.run("ra Queen");

        assert_eq!(fixture.app.library.artists().len(), 1);
        assert_eq!(fixture.status(), Status::error("No artist named 'Queen'"));
    }

    #[test]
    fn find_by_artist_shows_songs_and_albums() {
        let mut fixture = Fixture::new();
        fixture.app.library.add_album(Album::new("Arrival", "Abba", 1976, 8.5, "Pop"));

        fixture.run("far Abba");

        assert_eq!(fixture.app.main_view, MainView::Results);
        let results = fixture.app.results.as_ref().unwrap();
        assert_eq!(keys(&results.songs), vec!["Dancing Queen"]);
        assert_eq!(keys(&results.albums), vec!["Arrival"]);
        assert_eq!(fixture.status(), Status::info("Found 1 song and 1 album by 'Abba'"));
    }

    #[test]
    fn find_by_genre_without_matches_is_empty() {
        let mut fixture = Fixture::new();

        fixture.run("fg Polka");

        let results = fixture.app.results.as_ref().unwrap();
        assert!(results.is_empty());
        assert_eq!(fixture.status(), Status::info("No songs or albums in genre 'Polka'"));
    }

    #[test]
    fn rank_orders_albums_by_rating() {
        let mut fixture = Fixture::new();

        fixture.run("rank");

        let results = fixture.app.results.as_ref().unwrap();
        assert_eq!(keys(&results.albums), vec!["B", "C", "A"]);
        assert!(results.songs.is_empty());
    }

    #[test]
    fn rank_of_empty_catalog_keeps_the_view() {
        let mut fixture = Fixture::new();
        for name in ["A", "B", "C"] {
            fixture.app.library.remove_album(name);
        }

        fixture.run("rank");

        assert!(fixture.app.results.is_none());
        assert_eq!(fixture.app.main_view, MainView::Songs);
        assert_eq!(fixture.status(), Status::info("No albums in the catalog to rank"));
    }

    #[test]
    fn delete_key_removes_selected_key() {
        let mut fixture = Fixture::new();

        fixture.press(KeyCode::Char('j'));
        fixture.press(KeyCode::Char('d'));

        assert_eq!(keys(fixture.app.library.songs().as_slice()), vec!["Dancing Queen"]);
        assert_eq!(fixture.app.song_table.selected(1), Some(0));
    }

    #[test]
    fn delete_without_selection_does_nothing() {
        let mut fixture = Fixture::new();
        fixture.press(KeyCode::Char('3'));
        fixture.press(KeyCode::Char('d'));

        assert_eq!(fixture.app.library.albums().len(), 3);
    }

    #[test]
    fn quit_key_saves_and_quits() {
        let mut fixture = Fixture::new();
        fixture.run("aa Queen;UK;Rock");

        fixture.press(KeyCode::Char('q'));

        assert!(fixture.app.should_quit);
        assert_eq!(fixture.read("artists.txt"), "Abba;Sweden;Pop\nQueen;UK;Rock\n");
        assert_eq!(
            fixture.read("albums.txt"),
            "A;X;2000;7;Rock\nB;Y;2010;9;Pop\nC;Z;1995;9;Jazz\n"
        );
    }

    #[test]
    fn failed_save_keeps_the_application_open() {
        let mut fixture = Fixture::new();
        let broken = FileStore::new(
            fixture.dir.path().join("missing/songs.txt"),
            fixture.dir.path().join("missing/artists.txt"),
            fixture.dir.path().join("missing/albums.txt"),
        );
        fixture.app.library = Library::open(broken).unwrap();

        fixture.run("q");

        assert!(!fixture.app.should_quit);
        assert!(fixture.status().is_error);

        fixture.run("q!");
        assert!(fixture.app.should_quit);
    }

    #[test]
    fn quit_without_saving_leaves_files_alone() {
        let mut fixture = Fixture::new();
        fixture.run("rl A");

        fixture.run("q!");

        assert!(fixture.app.should_quit);
        assert_eq!(
            fixture.read("albums.txt"),
            "A;X;2000;7;Rock\nB;Y;2010;9;Pop\nC;Z;1995;9;Jazz\n"
        );
    }

    #[test]
    fn keys_typed_into_the_command_line_are_not_bindings() {
        let mut fixture = Fixture::new();

        fixture.press(KeyCode::Char(':'));
        fixture.press(KeyCode::Char('q'));
        fixture.press(KeyCode::Char('d'));

        assert!(!fixture.app.should_quit);
        assert_eq!(fixture.app.commander.input.value(), "qd");
    }
}
