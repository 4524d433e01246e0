use std::time::{Duration, Instant};

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::club::{is_past, Catalog, Clock, ClubEvent, CounterAnimation, HeroStats, Schedule};
use crate::components::{events_view, ResourcesView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Team,
    Events,
    Ctfs,
    Sponsors,
    Started,
    Rubric,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Team,
        Section::Events,
        Section::Ctfs,
        Section::Sponsors,
        Section::Started,
        Section::Rubric,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Team => "Team",
            Section::Events => "Events",
            Section::Ctfs => "CTFs",
            Section::Sponsors => "Sponsors",
            Section::Started => "Getting Started",
            Section::Rubric => "Rubric",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Section bound to a digit key, `1` being Home.
    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub struct App {
    pub running: bool,
    pub section: Section,
    pub catalog: Catalog,
    /// Instant used for every classification in the current frame.
    pub now: NaiveDateTime,
    /// Cursor over upcoming then past events.
    pub selected_event: usize,
    /// Id of the event shown in the detail popup.
    pub detail: Option<String>,
    /// Lines scrolled inside the detail popup.
    pub detail_scroll: u16,
    pub show_help: bool,
    pub scroll: usize,
    pub status_message: Option<String>,
    counters: CounterAnimation,
    counters_started: Instant,
    clock: Box<dyn Clock>,
}

impl App {
    pub fn new(catalog: Catalog, clock: Box<dyn Clock>) -> Self {
        let now = clock.now();
        Self {
            running: true,
            section: Section::Home,
            catalog,
            now,
            selected_event: 0,
            detail: None,
            detail_scroll: 0,
            show_help: false,
            scroll: 0,
            status_message: None,
            counters: CounterAnimation::default(),
            counters_started: Instant::now(),
            clock,
        }
    }

    /// Re-read the clock. Called once per frame.
    pub fn tick(&mut self) {
        self.now = self.clock.now();
        let len = self.schedule().len();
        if self.selected_event >= len {
            self.selected_event = len.saturating_sub(1);
        }
    }

    pub fn schedule(&self) -> Schedule<'_> {
        self.catalog.schedule(self.now)
    }

    pub fn hero_stats(&self) -> HeroStats {
        self.hero_stats_at(self.counters_started.elapsed())
    }

    pub fn hero_stats_at(&self, elapsed: Duration) -> HeroStats {
        self.counters.values(elapsed)
    }

    pub fn select_section(&mut self, section: Section) {
        if section == Section::Home {
            // The counters replay every time the landing page is shown.
            self.counters_started = Instant::now();
        }
        if section != self.section {
            debug!(from = self.section.title(), to = section.title(), "switching section");
        }
        self.section = section;
        self.scroll = 0;
        self.detail = None;
    }

    pub fn next_section(&mut self) {
        self.select_section(self.section.next());
    }

    pub fn prev_section(&mut self) {
        self.select_section(self.section.prev());
    }

    pub fn move_down(&mut self) {
        match self.section {
            Section::Events => {
                let len = self.schedule().len();
                if self.selected_event + 1 < len {
                    self.selected_event += 1;
                }
            }
            Section::Started => {
                let max = ResourcesView::line_count().saturating_sub(1);
                self.scroll = (self.scroll + 1).min(max);
            }
            _ => {}
        }
    }

    pub fn move_up(&mut self) {
        match self.section {
            Section::Events => self.selected_event = self.selected_event.saturating_sub(1),
            Section::Started => self.scroll = self.scroll.saturating_sub(1),
            _ => {}
        }
    }

    pub fn selected(&self) -> Option<&ClubEvent> {
        self.schedule().get(self.selected_event)
    }

    pub fn open_detail(&mut self) {
        if self.section != Section::Events {
            return;
        }
        match self.selected().map(|e| e.id.clone()) {
            Some(id) => {
                info!(event = %id, "opening event details");
                self.detail = Some(id);
                self.detail_scroll = 0;
            }
            None => self.status_message = Some("No events to show".to_string()),
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn scroll_detail_down(&mut self) {
        let Some(ev) = self.detail_event() else {
            return;
        };
        let max = events_view::detail_lines(ev, self.is_event_past(ev))
            .len()
            .saturating_sub(1);
        let max = u16::try_from(max).unwrap_or(u16::MAX);
        self.detail_scroll = self.detail_scroll.saturating_add(1).min(max);
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    /// The event in the detail popup, if it is still in the catalog.
    pub fn detail_event(&self) -> Option<&ClubEvent> {
        self.detail.as_deref().and_then(|id| self.catalog.find(id))
    }

    pub fn is_event_past(&self, event: &ClubEvent) -> bool {
        is_past(&event.end_date, &event.time, self.now)
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
