//! Classification and ordering through the public API.

use chrono::{NaiveDate, NaiveDateTime};
use club_tui::club::schedule::{event_start, loose_date};
use club_tui::club::{is_past, partition, Catalog, ClubEvent};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn catalog(json: &str) -> Catalog {
    Catalog::from_json(json).unwrap()
}

const MIXED: &str = r#"{"events": [
    {"id": 1, "title": "Kickoff", "startDate": "September 4, 2025", "endDate": "September 4, 2025", "time": "5:00 PM - 7:00 PM"},
    {"id": 2, "title": "Panel", "startDate": "November 13, 2025", "endDate": "November 13, 2025", "time": "6:00 PM - 8:00 PM"},
    {"id": 3, "title": "Social", "startDate": "April 10, 2026", "endDate": "April 10, 2026", "time": "TBD"},
    {"id": 4, "title": "CTF", "startDate": "October 3, 2025", "endDate": "October 4, 2025", "time": "6:00 PM - 9:00 PM"},
    {"id": 5, "title": "Workshop", "startDate": "January 22, 2026", "endDate": "January 22, 2026", "time": "5:30 PM - 7:30 PM"}
]}"#;

fn ids(events: &[&ClubEvent]) -> Vec<String> {
    events.iter().map(|e| e.id.clone()).collect()
}

#[test]
fn concrete_cases() {
    let now = at(2025, 3, 6, 0, 0);
    assert!(is_past("March 5, 2025", "6:00 PM - 8:00 PM", now));
    assert!(!is_past("December 1, 2025", "6:00 PM - 8:00 PM", now));
    assert!(!is_past("June 10, 2025", "garbage", now));
    assert!(!is_past("June 10, 2025", "garbage", at(2099, 1, 1, 0, 0)));
}

#[test]
fn is_past_agrees_with_event_start() {
    let now = at(2025, 11, 1, 12, 0);
    for ev in catalog(MIXED).events() {
        let expected = event_start(&ev.end_date, &ev.time).map_or(false, |start| now > start);
        assert_eq!(is_past(&ev.end_date, &ev.time, now), expected, "event {}", ev.id);
    }
}

#[test]
fn partition_is_total_at_any_instant() {
    let cat = catalog(MIXED);
    for now in [
        at(2024, 1, 1, 0, 0),
        at(2025, 10, 4, 18, 0),
        at(2025, 12, 31, 23, 59),
        at(2030, 1, 1, 0, 0),
    ] {
        let (upcoming, past) = partition(cat.events(), now);
        assert_eq!(upcoming.len() + past.len(), cat.len());

        let mut all = ids(&upcoming);
        all.extend(ids(&past));
        all.sort();
        assert_eq!(all, ["1", "2", "3", "4", "5"]);
    }
}

#[test]
fn mid_season_split() {
    let cat = catalog(MIXED);
    let (upcoming, past) = partition(cat.events(), at(2025, 12, 1, 0, 0));
    // Source order for upcoming, the TBD social stays upcoming forever.
    assert_eq!(ids(&upcoming), ["3", "5"]);
    // Newest end date first.
    assert_eq!(ids(&past), ["2", "4", "1"]);
}

#[test]
fn unparseable_time_stays_upcoming_long_after() {
    let cat = catalog(MIXED);
    let (upcoming, past) = partition(cat.events(), at(2030, 1, 1, 0, 0));
    assert_eq!(ids(&upcoming), ["3"]);
    assert_eq!(ids(&past), ["5", "2", "4", "1"]);
}

#[test]
fn everything_upcoming_before_the_season() {
    let cat = catalog(MIXED);
    let (upcoming, past) = partition(cat.events(), at(2024, 1, 1, 0, 0));
    assert_eq!(ids(&upcoming), ["1", "2", "3", "4", "5"]);
    assert!(past.is_empty());
}

#[test]
fn multi_day_event_uses_end_date() {
    let cat = catalog(MIXED);
    let ctf = cat.find("4").unwrap();
    // Day one of the CTF has started but the record is keyed on its end date.
    assert!(!is_past(&ctf.end_date, &ctf.time, at(2025, 10, 3, 20, 0)));
    assert!(is_past(&ctf.end_date, &ctf.time, at(2025, 10, 4, 18, 1)));
}

#[test]
fn sort_and_filter_parsers_differ() {
    // The strict parser rejects ISO dates, the loose one accepts them.
    assert_eq!(event_start("2025-03-05", "6:00 PM - 8:00 PM"), None);
    assert_eq!(loose_date("2025-03-05"), NaiveDate::from_ymd_opt(2025, 3, 5));
}

#[test]
fn empty_catalog() {
    let cat = catalog(r#"{"events": []}"#);
    let (upcoming, past) = partition(cat.events(), at(2025, 3, 6, 0, 0));
    assert!(upcoming.is_empty());
    assert!(past.is_empty());
}

#[test]
fn out_of_range_day_rolls_over() {
    let time = "6:00 PM - 8:00 PM";
    assert_eq!(event_start("September 31, 2025", time), Some(at(2025, 10, 1, 18, 0)));
    assert!(!is_past("September 31, 2025", time, at(2025, 9, 30, 23, 0)));
    assert!(is_past("September 31, 2025", time, at(2025, 10, 1, 18, 1)));
}
