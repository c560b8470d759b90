//! Show start-time handling: canonical storage format, human display
//! formatting, and the past/upcoming classification used by detail views.
//!
//! Classification is pure; the reference instant is always passed in by the
//! caller, so handlers supply the wall clock and tests supply fixed instants.

use chrono::{NaiveDateTime, ParseError};

/// Canonical text representation of a show start time in the database.
/// Zero-padded, so lexicographic order equals chronological order.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// HTML `datetime-local` inputs submit this shape.
const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn parse_start_time(s: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(s, STORAGE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, DATETIME_LOCAL_FORMAT))
}

pub fn format_start_time(t: NaiveDateTime) -> String {
    t.format(STORAGE_FORMAT).to_string()
}

/// Human-readable form used on rendered pages, e.g. "Fri Jun 15, 2035 8:00PM".
pub fn display_start_time(t: NaiveDateTime) -> String {
    t.format("%a %b %-d, %Y %-I:%M%p").to_string()
}

/// A show starting exactly at the reference instant counts as past.
pub fn is_upcoming(start_time: NaiveDateTime, now: NaiveDateTime) -> bool {
    start_time > now
}

pub trait HasStartTime {
    fn start_time(&self) -> NaiveDateTime;
}

impl HasStartTime for crate::directory_store::VenueShow {
    fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }
}

impl HasStartTime for crate::directory_store::ArtistShow {
    fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }
}

/// Shows split by the classification rule, each side in the order the input
/// arrived (query order; no chronological sort is promised).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> Partition<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}

pub fn partition<T: HasStartTime>(shows: Vec<T>, now: NaiveDateTime) -> Partition<T> {
    let mut result = Partition {
        past: Vec::new(),
        upcoming: Vec::new(),
    };
    for show in shows {
        if is_upcoming(show.start_time(), now) {
            result.upcoming.push(show);
        } else {
            result.past.push(show);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub(NaiveDateTime);

    impl HasStartTime for Stub {
        fn start_time(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn t(s: &str) -> NaiveDateTime {
        parse_start_time(s).unwrap()
    }

    #[test]
    fn parses_canonical_format() {
        let parsed = t("2035-04-01 20:30:00");
        assert_eq!(format_start_time(parsed), "2035-04-01 20:30:00");
    }

    #[test]
    fn parses_datetime_local_format() {
        let parsed = t("2035-04-01T20:30");
        assert_eq!(format_start_time(parsed), "2035-04-01 20:30:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_start_time("next friday").is_err());
        assert!(parse_start_time("2035-13-01 20:30:00").is_err());
    }

    #[test]
    fn strictly_later_is_upcoming() {
        let now = t("2026-01-01 12:00:00");
        assert!(is_upcoming(t("2026-01-01 12:00:01"), now));
        assert!(!is_upcoming(t("2026-01-01 11:59:59"), now));
    }

    #[test]
    fn start_equal_to_now_is_past() {
        let now = t("2026-01-01 12:00:00");
        assert!(!is_upcoming(now, now));
    }

    #[test]
    fn partition_is_exclusive_and_exhaustive() {
        let now = t("2026-01-01 12:00:00");
        let shows = vec![
            Stub(t("2020-05-21 21:30:00")),
            Stub(t("2026-01-01 12:00:00")),
            Stub(t("2035-04-01 20:00:00")),
            Stub(t("2035-04-08 20:00:00")),
        ];
        let total = shows.len();
        let split = partition(shows, now);
        assert_eq!(split.past_count(), 2);
        assert_eq!(split.upcoming_count(), 2);
        assert_eq!(split.past_count() + split.upcoming_count(), total);
    }

    #[test]
    fn partition_preserves_input_order() {
        let now = t("2026-01-01 12:00:00");
        let shows = vec![
            Stub(t("2035-04-08 20:00:00")),
            Stub(t("2035-04-01 20:00:00")),
        ];
        let split = partition(shows, now);
        assert_eq!(
            split.upcoming[0].0,
            t("2035-04-08 20:00:00"),
            "later show listed first because the query returned it first"
        );
    }

    #[test]
    fn storage_format_sorts_chronologically() {
        let earlier = format_start_time(t("2026-01-02 09:00:00"));
        let later = format_start_time(t("2026-01-10 09:00:00"));
        assert!(earlier < later);
    }
}
