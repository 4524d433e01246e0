use std::io::{self, Write};

use crate::club::{ClubEvent, Schedule};
use crate::components::events_view::{NO_PAST, NO_UPCOMING};

/// Plain-text dump of both buckets, used by `--list`.
pub fn write_listing<W: Write>(out: &mut W, schedule: &Schedule<'_>) -> io::Result<()> {
    writeln!(out, "Upcoming Events")?;
    if schedule.upcoming.is_empty() {
        writeln!(out, "  {}", NO_UPCOMING)?;
    }
    for ev in &schedule.upcoming {
        write_event(out, ev)?;
    }

    writeln!(out)?;
    writeln!(out, "Past Events")?;
    if schedule.past.is_empty() {
        writeln!(out, "  {}", NO_PAST)?;
    }
    for ev in &schedule.past {
        write_event(out, ev)?;
    }
    Ok(())
}

fn write_event<W: Write>(out: &mut W, ev: &ClubEvent) -> io::Result<()> {
    write!(out, "  [{}] {} | {} | {}", ev.id, ev.title, ev.date_range_display(), ev.time)?;
    if !ev.location.is_empty() {
        write!(out, " | {}", ev.location)?;
    }
    if !ev.tags.is_empty() {
        write!(out, " | {}", ev.tags_display())?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::event::sample;
    use chrono::NaiveDate;

    #[test]
    fn empty_buckets_print_placeholders() {
        let mut buf = Vec::new();
        write_listing(&mut buf, &Schedule::default()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(NO_UPCOMING));
        assert!(text.contains(NO_PAST));
    }

    #[test]
    fn events_are_listed_under_their_bucket() {
        let events = vec![
            sample("1", "January 10, 2025", "6:00 PM - 8:00 PM"),
            sample("2", "December 1, 2025", "6:00 PM - 8:00 PM"),
        ];
        let now = NaiveDate::from_ymd_opt(2025, 3, 6)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut buf = Vec::new();
        write_listing(&mut buf, &Schedule::new(&events, now)).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let upcoming_at = text.find("[2] Event 2").unwrap();
        let past_header = text.find("Past Events").unwrap();
        let past_at = text.find("[1] Event 1").unwrap();
        assert!(upcoming_at < past_header && past_header < past_at);
        assert!(text.contains("| ETLC 1-001"));
    }
}
