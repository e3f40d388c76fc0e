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

//! Application configuration.
//!
//! This module manages the application configuration file, which names the
//! catalog data files and the log file. Relative file names are resolved
//! against `data_dir`, or the working directory when no data directory is
//! configured.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "musicat";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub version: u32,
    pub data_dir: Option<PathBuf>,
    pub songs_file: String,
    pub artists_file: String,
    pub albums_file: String,
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            data_dir: None,
            songs_file: String::from("music_database.txt"),
            artists_file: String::from("artist_database.txt"),
            albums_file: String::from("album_database.txt"),
            log_file: String::from("musicat.log"),
        }
    }
}

impl AppConfig {
    /// Resolves a configured file name against the data directory.
    pub fn data_path(&self, file_name: &str) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.join(file_name),
            None => Path::new(file_name).to_path_buf(),
        }
    }
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_names() {
        let config = AppConfig::default();
        assert_eq!(config.data_path(&config.songs_file), PathBuf::from("music_database.txt"));
        assert_eq!(config.data_path(&config.artists_file), PathBuf::from("artist_database.txt"));
        assert_eq!(config.data_path(&config.albums_file), PathBuf::from("album_database.txt"));
    }

    #[test]
    fn data_dir_prefixes_relative_names() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/srv/music")),
            ..AppConfig::default()
        };
        assert_eq!(
            config.data_path(&config.albums_file),
            PathBuf::from("/srv/music/album_database.txt")
        );
    }
}
