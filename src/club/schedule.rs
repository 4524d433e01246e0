//! Upcoming/past classification of club events.
//!
//! Filtering uses a strict tokenized parse of `"Month D, YYYY"` plus the start
//! of a `"H:MM AM - H:MM PM"` range. Ordering of past events uses the looser
//! [`loose_date`], so a record can be classified by one and sorted by the other.

use std::cmp::Reverse;
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};
use regex::Regex;
use tracing::debug;

use super::event::ClubEvent;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Formats accepted when ordering past events by end date.
const LOOSE_FORMATS: [&str; 5] = ["%B %d, %Y", "%b %d, %Y", "%B %d %Y", "%Y-%m-%d", "%m/%d/%Y"];

/// Resolve the local date-time an event is considered to happen at.
///
/// Returns `None` when the date is not exactly `<Month> <Day>[,] <Year>`, the
/// month is not a full English name, or no `H:MM AM/PM` start time is found.
/// Day, hour and minute values past their range roll over into the next unit,
/// so `September 31` is October 1 and day 0 is the last day of the month before.
pub fn event_start(end_date: &str, time: &str) -> Option<NaiveDateTime> {
    let tokens: Vec<&str> = end_date.split(' ').collect();
    let &[month, day, year] = tokens.as_slice() else {
        return None;
    };

    let month = MONTHS.iter().position(|m| *m == month)? as u32 + 1;
    let day: u32 = day.strip_suffix(',').unwrap_or(day).parse().ok()?;
    let year: i32 = year.parse().ok()?;
    let (hour, minute) = start_time(time)?;

    let offset = TimeDelta::days(i64::from(day) - 1)
        + TimeDelta::hours(i64::from(hour))
        + TimeDelta::minutes(i64::from(minute));
    NaiveDate::from_ymd_opt(year, month, 1)?
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(offset)
}

/// Whether the event started strictly before `now`. Unparseable records are never past.
pub fn is_past(end_date: &str, time: &str, now: NaiveDateTime) -> bool {
    match event_start(end_date, time) {
        Some(at) => now > at,
        None => {
            debug!(end_date, time, "unparseable event date/time, keeping it upcoming");
            false
        }
    }
}

/// Start of a time range as a 24-hour `(hour, minute)`.
fn start_time(time: &str) -> Option<(u32, u32)> {
    const RE: &str = r"(\d{1,2}):(\d{2})\s(?i:(AM|PM))";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());

    let start = time.split(" - ").next().unwrap_or(time).trim();
    let captures = re.captures(start)?;

    let mut hour: u32 = captures[1].parse().ok()?;
    let minute: u32 = captures[2].parse().ok()?;
    let pm = captures[3].eq_ignore_ascii_case("PM");

    if pm && hour != 12 {
        hour += 12;
    } else if !pm && hour == 12 {
        hour = 0;
    }

    Some((hour, minute))
}

/// General-purpose date parse used only for ordering.
pub fn loose_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    LOOSE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Split `events` into `(upcoming, past)`.
///
/// Upcoming keeps source order. Past is sorted newest end date first; ties and
/// dates [`loose_date`] cannot read keep source order, the latter at the end.
pub fn partition(
    events: &[ClubEvent],
    now: NaiveDateTime,
) -> (Vec<&ClubEvent>, Vec<&ClubEvent>) {
    let (mut past, upcoming): (Vec<&ClubEvent>, Vec<&ClubEvent>) = events
        .iter()
        .partition(|e| is_past(&e.end_date, &e.time, now));

    past.sort_by_key(|e| Reverse(loose_date(&e.end_date)));

    (upcoming, past)
}

/// Both buckets, with a single cursor space running through upcoming then past.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule<'a> {
    pub upcoming: Vec<&'a ClubEvent>,
    pub past: Vec<&'a ClubEvent>,
}

impl<'a> Schedule<'a> {
    pub fn new(events: &'a [ClubEvent], now: NaiveDateTime) -> Self {
        let (upcoming, past) = partition(events, now);
        Self { upcoming, past }
    }

    pub fn len(&self) -> usize {
        self.upcoming.len() + self.past.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.past.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a ClubEvent> {
        if index < self.upcoming.len() {
            self.upcoming.get(index).copied()
        } else {
            self.past.get(index - self.upcoming.len()).copied()
        }
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.upcoming
            .iter()
            .chain(self.past.iter())
            .position(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::event::sample;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn event_from_yesterday_is_past() {
        assert!(is_past("March 5, 2025", "6:00 PM - 8:00 PM", at(2025, 3, 6, 0, 0)));
    }

    #[test]
    fn event_later_in_year_is_upcoming() {
        assert!(!is_past("December 1, 2025", "6:00 PM - 8:00 PM", at(2025, 3, 6, 0, 0)));
    }

    #[test]
    fn garbage_time_is_never_past() {
        assert!(!is_past("June 10, 2025", "garbage", at(2030, 1, 1, 0, 0)));
        assert!(!is_past("June 10, 2025", "", at(2030, 1, 1, 0, 0)));
        assert!(!is_past("June 10, 2025", "18:00 - 20:00", at(2030, 1, 1, 0, 0)));
    }

    #[test]
    fn exact_start_is_not_past() {
        let start = at(2025, 3, 5, 18, 0);
        assert!(!is_past("March 5, 2025", "6:00 PM - 8:00 PM", start));
        assert!(is_past(
            "March 5, 2025",
            "6:00 PM - 8:00 PM",
            start + chrono::Duration::seconds(1)
        ));
    }

    #[test]
    fn only_start_of_range_counts() {
        // 7 PM is after the 6 PM start but before the 8 PM end.
        assert!(is_past("March 5, 2025", "6:00 PM - 8:00 PM", at(2025, 3, 5, 19, 0)));
    }

    #[test]
    fn meridiem_conversion() {
        assert_eq!(
            event_start("March 5, 2025", "12:00 AM - 1:00 AM"),
            Some(at(2025, 3, 5, 0, 0))
        );
        assert_eq!(
            event_start("March 5, 2025", "12:30 PM - 1:30 PM"),
            Some(at(2025, 3, 5, 12, 30))
        );
        assert_eq!(
            event_start("March 5, 2025", "9:15 AM - 11:00 AM"),
            Some(at(2025, 3, 5, 9, 15))
        );
        assert_eq!(
            event_start("March 5, 2025", "11:45 pm - 11:59 pm"),
            Some(at(2025, 3, 5, 23, 45))
        );
    }

    #[test]
    fn start_time_found_inside_text() {
        assert_eq!(
            event_start("March 5, 2025", "Doors 6:00 PM - 8:00 PM"),
            Some(at(2025, 3, 5, 18, 0))
        );
    }

    #[test]
    fn minute_needs_two_digits() {
        assert_eq!(event_start("March 5, 2025", "6:0 PM - 8:00 PM"), None);
    }

    #[test]
    fn day_comma_is_optional() {
        assert_eq!(
            event_start("March 5 2025", "6:00 PM - 8:00 PM"),
            Some(at(2025, 3, 5, 18, 0))
        );
    }

    #[test]
    fn malformed_dates_are_not_past() {
        let now = at(2030, 1, 1, 0, 0);
        let time = "6:00 PM - 8:00 PM";
        for date in [
            "Mar 5, 2025",
            "march 5, 2025",
            "Sept ember 5, 2025",
            "March five, 2025",
            "March 5, twenty",
            "March 5,  2025",
            "2025-03-05",
            "",
        ] {
            assert!(!is_past(date, time, now), "{date:?} should not be past");
        }
    }

    #[test]
    fn overflowing_day_rolls_into_next_month() {
        let time = "6:00 PM - 8:00 PM";
        assert_eq!(event_start("September 31, 2025", time), Some(at(2025, 10, 1, 18, 0)));
        assert_eq!(event_start("February 30, 2025", time), Some(at(2025, 3, 2, 18, 0)));
        assert_eq!(event_start("December 32, 2025", time), Some(at(2026, 1, 1, 18, 0)));
        assert!(is_past("September 31, 2025", time, at(2030, 1, 1, 0, 0)));
        assert!(!is_past("September 31, 2025", time, at(2025, 10, 1, 18, 0)));
    }

    #[test]
    fn day_zero_is_last_day_of_previous_month() {
        assert_eq!(
            event_start("March 0, 2024", "6:00 PM - 8:00 PM"),
            Some(at(2024, 2, 29, 18, 0))
        );
    }

    #[test]
    fn overflowing_time_rolls_forward() {
        assert_eq!(
            event_start("March 5, 2025", "13:00 PM - 2:00 PM"),
            Some(at(2025, 3, 6, 1, 0))
        );
        assert_eq!(
            event_start("March 5, 2025", "6:75 PM - 8:00 PM"),
            Some(at(2025, 3, 5, 19, 15))
        );
        assert!(is_past("March 5, 2025", "13:00 PM - 2:00 PM", at(2030, 1, 1, 0, 0)));
    }

    #[test]
    fn loose_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 5);
        assert_eq!(loose_date("March 5, 2025"), expected);
        assert_eq!(loose_date("Mar 5, 2025"), expected);
        assert_eq!(loose_date("March 5 2025"), expected);
        assert_eq!(loose_date("2025-03-05"), expected);
        assert_eq!(loose_date("03/05/2025"), expected);
        assert_eq!(loose_date("2025-03-05T10:00:00Z"), expected);
        assert_eq!(loose_date("sometime soon"), None);
    }

    #[test]
    fn empty_input_gives_empty_buckets() {
        let (upcoming, past) = partition(&[], at(2025, 1, 1, 0, 0));
        assert!(upcoming.is_empty());
        assert!(past.is_empty());
    }

    #[test]
    fn partition_keeps_upcoming_order_and_sorts_past_descending() {
        let events = vec![
            sample("a", "January 10, 2025", "6:00 PM - 8:00 PM"),
            sample("b", "December 1, 2025", "6:00 PM - 8:00 PM"),
            sample("c", "February 20, 2025", "6:00 PM - 8:00 PM"),
            sample("d", "November 3, 2025", "6:00 PM - 8:00 PM"),
            sample("e", "January 10, 2025", "9:00 AM - 10:00 AM"),
            sample("f", "June 1, 2025", "TBD"),
        ];
        let (upcoming, past) = partition(&events, at(2025, 3, 6, 0, 0));

        let up: Vec<&str> = upcoming.iter().map(|e| e.id.as_str()).collect();
        let done: Vec<&str> = past.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(up, ["b", "d", "f"]);
        // a and e share an end date and keep their source order.
        assert_eq!(done, ["c", "a", "e"]);
        assert_eq!(upcoming.len() + past.len(), events.len());
    }

    #[test]
    fn all_upcoming_leaves_past_empty() {
        let events = vec![
            sample("a", "December 1, 2025", "6:00 PM - 8:00 PM"),
            sample("b", "December 2, 2025", "6:00 PM - 8:00 PM"),
        ];
        let (upcoming, past) = partition(&events, at(2025, 3, 6, 0, 0));
        assert_eq!(upcoming.len(), 2);
        assert!(past.is_empty());
    }

    #[test]
    fn unsortable_past_dates_go_last() {
        // Integer parsing takes a leading '+' on the day; the loose formats do not.
        let events = vec![
            sample("odd", "January +10, 2025", "6:00 PM - 8:00 PM"),
            sample("old", "January 5, 2025", "6:00 PM - 8:00 PM"),
            sample("new", "February 5, 2025", "6:00 PM - 8:00 PM"),
        ];
        let (upcoming, past) = partition(&events, at(2025, 3, 6, 0, 0));
        assert!(upcoming.is_empty());
        let ids: Vec<&str> = past.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["new", "old", "odd"]);
    }

    #[test]
    fn schedule_cursor_spans_both_buckets() {
        let events = vec![
            sample("past", "January 10, 2025", "6:00 PM - 8:00 PM"),
            sample("next", "December 1, 2025", "6:00 PM - 8:00 PM"),
        ];
        let schedule = Schedule::new(&events, at(2025, 3, 6, 0, 0));
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule.get(0).map(|e| e.id.as_str()), Some("next"));
        assert_eq!(schedule.get(1).map(|e| e.id.as_str()), Some("past"));
        assert_eq!(schedule.get(2), None);
        assert_eq!(schedule.position("past"), Some(1));
        assert_eq!(schedule.position("missing"), None);
    }
}
