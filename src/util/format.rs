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

use crate::model::RATING_SCALE_MAX;

/// Formats a song duration given in minutes as `M:SS`.
///
/// Durations are not validated when records are created, so negative or
/// non-finite values are shown as the raw number rather than a clock time.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_duration(3.5), "3:30");
/// assert_eq!(format_duration(-1.0), "-1");
/// ```
pub(crate) fn format_duration(minutes: f64) -> String {
    if !minutes.is_finite() || minutes < 0.0 {
        return minutes.to_string();
    }

    let total_seconds = (minutes * 60.0).round() as u64;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Formats an album rating against the rating scale, e.g. `8.5/10`.
pub(crate) fn format_rating(rating: f64) -> String {
    format!("{}/{}", rating, RATING_SCALE_MAX)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(3.5, "3:30")]
    #[case(3.05, "3:03")]
    #[case(0.0, "0:00")]
    #[case(75.0, "75:00")]
    #[case(-2.5, "-2.5")]
    #[case(f64::INFINITY, "inf")]
    fn durations(#[case] minutes: f64, #[case] expected: &str) {
        assert_eq!(format_duration(minutes), expected);
    }

    #[test]
    fn ratings_show_the_scale() {
        assert_eq!(format_rating(8.5), "8.5/10");
        assert_eq!(format_rating(9.0), "9/10");
    }
}
