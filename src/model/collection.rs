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

//! Ordered in-memory record collections.
//!
//! A [`Collection`] keeps records in insertion order and provides the linear
//! scan operations the catalog needs: append, remove by key, find by field
//! and rank by a numeric score.

use std::cmp::Ordering;

use crate::model::{Album, Record};

#[derive(Debug, Clone)]
pub(crate) struct Collection<R> {
    records: Vec<R>,
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self { records: vec![] }
    }
}

impl<R> From<Vec<R>> for Collection<R> {
    fn from(records: Vec<R>) -> Self {
        Self { records }
    }
}

impl<R: Record> Collection<R> {
    /// Adds a record to the end of the collection.
    ///
    /// Duplicates are allowed and nothing is validated.
    pub(crate) fn append(&mut self, record: R) {
        self.records.push(record);
    }

    /// Removes every record whose key field equals `key` exactly.
    ///
    /// Matching is case-sensitive. Returns `true` if at least one record was
    /// removed; the collection is untouched otherwise.
    pub(crate) fn remove_by_key(&mut self, key: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.key() != key);
        self.records.len() != before
    }

    /// Returns every record whose selected field equals `value` exactly, in
    /// collection order.
    ///
    /// # Arguments
    ///
    /// * `field` - Selects the text field to compare, e.g. [`super::Song::artist`].
    /// * `value` - The value the field must equal.
    pub(crate) fn find_by<F>(&self, field: F, value: &str) -> Vec<&R>
    where
        F: Fn(&R) -> &str,
    {
        self.iter().filter(|record| field(record) == value).collect()
    }

    /// Returns the records ordered by `score`, highest first.
    ///
    /// The sort is stable so records with equal scores keep their relative
    /// order. NaN scores are ranked after every other value. The collection
    /// itself is not reordered.
    pub(crate) fn rank_by<F>(&self, score: F) -> Vec<&R>
    where
        F: Fn(&R) -> f64,
    {
        let mut ranked: Vec<&R> = self.iter().collect();
        ranked.sort_by(|a, b| compare_descending(score(a), score(b)));
        ranked
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub(crate) fn as_slice(&self) -> &[R] {
        &self.records
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Collection<Album> {
    /// Albums ordered by rating, best first, ties in insertion order.
    pub(crate) fn rank_by_rating(&self) -> Vec<&Album> {
        self.rank_by(Album::rating)
    }
}

// NaN after everything else; -0.0 and 0.0 tie.
fn compare_descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (a_nan, b_nan) => a_nan.cmp(&b_nan),
    }
}
