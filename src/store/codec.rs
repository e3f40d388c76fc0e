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

//! Delimited line mapping for domain models.
//!
//! Each record is stored as a single line with its fields joined by
//! [`DELIMITER`] in a fixed order per record kind:
//!
//! * Song: `title;duration;genre;artist`
//! * Artist: `name;country;genre`
//! * Album: `name;artist;year;rating;genre`
//!
//! There is no header and no escaping. A text field that itself contains the
//! delimiter will not survive a save and load: the line is split into exactly
//! the expected number of fields, so surplus delimiters end up in the last
//! field and earlier fields shift.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::{
    model::{Album, Artist, Record, Song},
    store::StoreError,
};

pub(crate) const DELIMITER: char = ';';

/// A record that can be written to and read from one delimited line.
pub(crate) trait Delimited: Record + Sized {
    const FIELD_COUNT: usize;
    const FIELD_NAMES: &'static [&'static str];

    fn to_fields(&self) -> Vec<String>;

    /// Builds a record from exactly [`Self::FIELD_COUNT`] fields.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] naming the field if a numeric field cannot be
    /// parsed.
    fn from_fields(fields: &[&str]) -> Result<Self, FieldError>;
}

/// A single field that failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FieldError {
    pub(crate) field: &'static str,
    pub(crate) value: String,
}

fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T, FieldError> {
    value.trim().parse().map_err(|_| FieldError {
        field,
        value: value.to_string(),
    })
}

impl Delimited for Song {
    const FIELD_COUNT: usize = 4;
    const FIELD_NAMES: &'static [&'static str] = &["title", "duration", "genre", "artist"];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.title().to_string(),
            self.duration().to_string(),
            self.genre().to_string(),
            self.artist().to_string(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, FieldError> {
        Ok(Song::new(
            fields[0],
            parse_number("duration", fields[1])?,
            fields[2],
            fields[3],
        ))
    }
}

impl Delimited for Artist {
    const FIELD_COUNT: usize = 3;
    const FIELD_NAMES: &'static [&'static str] = &["name", "country", "genre"];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.name().to_string(),
            self.country().to_string(),
            self.genre().to_string(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, FieldError> {
        Ok(Artist::new(fields[0], fields[1], fields[2]))
    }
}

impl Delimited for Album {
    const FIELD_COUNT: usize = 5;
    const FIELD_NAMES: &'static [&'static str] = &["name", "artist", "year", "rating", "genre"];

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.name().to_string(),
            self.artist().to_string(),
            self.year().to_string(),
            self.rating().to_string(),
            self.genre().to_string(),
        ]
    }

    fn from_fields(fields: &[&str]) -> Result<Self, FieldError> {
        Ok(Album::new(
            fields[0],
            fields[1],
            parse_number("year", fields[2])?,
            parse_number("rating", fields[3])?,
            fields[4],
        ))
    }
}

/// Writes one delimited line per record.
///
/// Reals use the shortest representation that parses back to the same value,
/// so a decoded record compares equal to the one that was encoded.
///
/// # Errors
///
/// Returns any I/O error raised by the writer.
pub(crate) fn encode<R: Delimited, W: Write>(records: &[R], mut writer: W) -> std::io::Result<()> {
    let delimiter = DELIMITER.to_string();
    for record in records {
        writeln!(writer, "{}", record.to_fields().join(&delimiter))?;
    }
    writer.flush()
}

/// Reads records from delimited lines until the reader is exhausted.
///
/// Blank lines are skipped. Each remaining line must split into exactly
/// [`Delimited::FIELD_COUNT`] fields.
///
/// # Errors
///
/// The whole decode fails on the first bad line, with no partial result:
///
/// * [`StoreError::MissingFields`] if a line has too few fields.
/// * [`StoreError::InvalidNumber`] if a numeric field cannot be parsed.
/// * [`StoreError::Read`] if the reader fails.
pub(crate) fn decode<R: Delimited, B: BufRead>(reader: B) -> Result<Vec<R>, StoreError> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| StoreError::Read {
            kind: R::KIND,
            line: line_number,
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.splitn(R::FIELD_COUNT, DELIMITER).collect();
        if fields.len() < R::FIELD_COUNT {
            return Err(StoreError::MissingFields {
                kind: R::KIND,
                line: line_number,
                expected: R::FIELD_COUNT,
                found: fields.len(),
            });
        }

        let record = R::from_fields(&fields).map_err(|e| StoreError::InvalidNumber {
            kind: R::KIND,
            line: line_number,
            field: e.field,
            value: e.value,
        })?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn encode_to_string<R: Delimited>(records: &[R]) -> String {
        let mut buffer = Vec::new();
        encode(records, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn songs_are_written_in_field_order() {
        let songs = vec![
            Song::new("Imagine", 3.05, "Rock", "John Lennon"),
            Song::new("So What", 9.0, "Jazz", "Miles Davis"),
        ];

        assert_eq!(
            encode_to_string(&songs),
            "Imagine;3.05;Rock;John Lennon\nSo What;9;Jazz;Miles Davis\n"
        );
    }

    #[test]
    fn artists_and_albums_are_written_in_field_order() {
        let artists = vec![Artist::new("Abba", "Sweden", "Pop")];
        assert_eq!(encode_to_string(&artists), "Abba;Sweden;Pop\n");

        let albums = vec![Album::new("Kind of Blue", "Miles Davis", 1959, 9.5, "Jazz")];
        assert_eq!(encode_to_string(&albums), "Kind of Blue;Miles Davis;1959;9.5;Jazz\n");
    }

    #[test]
    fn decoded_records_equal_encoded_records() {
        let albums = vec![
            Album::new("A", "X", 2000, 7.0, "Rock"),
            Album::new("B", "Y", -5, 0.1 + 0.2, ""),
            Album::new("", "", 0, -1.25, "Jazz"),
        ];

        let text = encode_to_string(&albums);
        let decoded: Vec<Album> = decode(Cursor::new(text)).unwrap();
        assert_eq!(decoded, albums);
    }

    #[test]
    fn empty_input_decodes_to_nothing() {
        let songs: Vec<Song> = decode(Cursor::new("")).unwrap();
        assert!(songs.is_empty());
        assert_eq!(encode_to_string::<Song>(&[]), "");
    }

    #[test]
    fn blank_lines_and_crlf_are_tolerated() {
        let text = "Queen;UK;Rock\r\n\r\n\nAbba;Sweden;Pop\n\n";
        let artists: Vec<Artist> = decode(Cursor::new(text)).unwrap();
        assert_eq!(
            artists,
            vec![Artist::new("Queen", "UK", "Rock"), Artist::new("Abba", "Sweden", "Pop")]
        );
    }

    #[test]
    fn numeric_fields_allow_surrounding_whitespace() {
        let albums: Vec<Album> = decode(Cursor::new("Blue; Joni Mitchell ; 1971 ; 9.0 ;Folk\n")).unwrap();
        assert_eq!(albums, vec![Album::new("Blue", " Joni Mitchell ", 1971, 9.0, "Folk")]);
    }

    #[test]
    fn surplus_delimiters_end_up_in_the_last_field() {
        let song = Song::new("Title", 1.0, "Rock", "Simon; Garfunkel");
        let text = encode_to_string(&[song.clone()]);
        let decoded: Vec<Song> = decode(Cursor::new(text)).unwrap();
        assert_eq!(decoded, vec![song]);

        // A delimiter in an earlier field shifts everything after it.
        let song = Song::new("Hello; Goodbye", 3.0, "Pop", "The Beatles");
        let text = encode_to_string(&[song]);
        let result: Result<Vec<Song>, _> = decode(Cursor::new(text));
        assert!(matches!(
            result,
            Err(StoreError::InvalidNumber { field: "duration", .. })
        ));
    }

    #[rstest]
    #[case::year("Album;Artist;nineteen;9.0;Rock\n", "year", "nineteen")]
    #[case::rating("Album;Artist;1999;great;Rock\n", "rating", "great")]
    #[case::empty_rating("Album;Artist;1999;;Rock\n", "rating", "")]
    fn malformed_album_number_fails_the_load(
        #[case] text: &str,
        #[case] expected_field: &str,
        #[case] expected_value: &str,
    ) {
        let result: Result<Vec<Album>, _> = decode(Cursor::new(text));
        match result {
            Err(StoreError::InvalidNumber { line, field, value, .. }) => {
                assert_eq!(line, 1);
                assert_eq!(field, expected_field);
                assert_eq!(value, expected_value);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn bad_line_discards_everything_read_before_it() {
        let text = "Imagine;3.05;Rock;John Lennon\nBroken;abc;Rock;Nobody\n";
        let result: Result<Vec<Song>, _> = decode(Cursor::new(text));
        assert!(matches!(
            result,
            Err(StoreError::InvalidNumber { line: 2, field: "duration", .. })
        ));
    }

    #[test]
    fn short_line_is_reported_with_field_counts() {
        let text = "Queen;UK;Rock\nAbba;Sweden\n";
        let result: Result<Vec<Artist>, _> = decode(Cursor::new(text));
        match result {
            Err(StoreError::MissingFields { line, expected, found, .. }) => {
                assert_eq!((line, expected, found), (2, 3, 2));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn field_names_match_field_counts() {
        assert_eq!(Song::FIELD_NAMES.len(), Song::FIELD_COUNT);
        assert_eq!(Artist::FIELD_NAMES.len(), Artist::FIELD_COUNT);
        assert_eq!(Album::FIELD_NAMES.len(), Album::FIELD_COUNT);
    }
}
