use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::club::{ClubEvent, Schedule};
use crate::theme;

pub const NO_UPCOMING: &str = "No upcoming events at the moment. Check back soon!";
pub const NO_PAST: &str = "No past events yet.";

pub struct EventsView;

impl EventsView {
    pub fn render(frame: &mut Frame, area: Rect, schedule: &Schedule<'_>, selected: usize) {
        let t = theme::current();

        let count_str = format!(
            " {} upcoming, {} past ",
            schedule.upcoming.len(),
            schedule.past.len()
        );

        let block = Block::default()
            .title(" Events ")
            .title_style(t.accent)
            .title_bottom(Line::from(Span::styled(count_str, t.dim)))
            .borders(Borders::ALL)
            .border_style(t.border);

        let inner_w = area.width.saturating_sub(2) as usize;

        let mut items: Vec<ListItem> = Vec::new();
        let mut selected_item = None;

        items.push(ListItem::new(Line::from(Span::styled(
            "Join us for workshops, CTFs, and networking opportunities",
            t.dim,
        ))));
        items.push(ListItem::new(Line::from("")));

        // Upcoming section
        items.push(section_header("Upcoming Events"));
        if schedule.upcoming.is_empty() {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("  {}", NO_UPCOMING),
                t.dim,
            ))));
        }
        for (i, ev) in schedule.upcoming.iter().enumerate() {
            if i == selected {
                selected_item = Some(items.len());
            }
            items.push(format_event(ev, inner_w, i == selected, false));
        }

        items.push(ListItem::new(Line::from("")));

        // Past section
        items.push(section_header("Past Events"));
        if schedule.past.is_empty() {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("  {}", NO_PAST),
                t.dim,
            ))));
        }
        let offset = schedule.upcoming.len();
        for (i, ev) in schedule.past.iter().enumerate() {
            let is_selected = offset + i == selected;
            if is_selected {
                selected_item = Some(items.len());
            }
            items.push(format_event(ev, inner_w, is_selected, true));
        }

        let mut state = ListState::default().with_selected(selected_item);
        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut state);
    }
}

fn section_header(title: &str) -> ListItem<'static> {
    ListItem::new(Line::from(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )))
}

fn format_event(ev: &ClubEvent, max_width: usize, selected: bool, past: bool) -> ListItem<'static> {
    let t = theme::current();

    let title_style = if selected {
        t.selected.add_modifier(Modifier::BOLD)
    } else if past {
        t.dim.add_modifier(Modifier::BOLD)
    } else {
        t.header
    };
    let marker = if selected { "\u{25b8} " } else { "  " };

    let mut lines = vec![Line::from(vec![
        Span::styled(marker, t.accent),
        Span::styled(truncate(&ev.title, max_width.saturating_sub(2)), title_style),
    ])];

    let when = format!("  {} \u{2022} {}", ev.date_range_display(), ev.time);
    let mut meta = vec![Span::styled(when.clone(), t.dim)];
    // Only show location if there's room
    if !ev.location.is_empty() && when.chars().count() + 3 + ev.location.chars().count() <= max_width {
        meta.push(Span::styled(format!(" @ {}", ev.location), t.dim));
    }
    lines.push(Line::from(meta));

    if !ev.tags.is_empty() {
        let mut spans = vec![Span::raw("  ")];
        for tag in &ev.tags {
            spans.push(Span::styled(format!(" {} ", tag), t.tag));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    ListItem::new(lines)
}

/// Render the event detail popup overlay, scrolled down by `scroll` lines.
pub fn render_detail_popup(
    frame: &mut Frame,
    area: Rect,
    ev: &ClubEvent,
    past: bool,
    scroll: u16,
) {
    let popup_area = super::centered(area, 72, area.height.saturating_sub(2).clamp(10, 26));
    frame.render_widget(Clear, popup_area);

    let t = theme::current();
    let block = Block::default()
        .title(format!(" {} ", ev.title))
        .title_style(t.accent)
        .title_bottom(Line::from(Span::styled(" j/k:Scroll Esc:Close ", t.dim)))
        .borders(Borders::ALL)
        .border_style(t.accent);

    let para = Paragraph::new(detail_lines(ev, past))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);
    frame.render_widget(para, popup_area);
}

/// Unwrapped body of the detail popup. The last line is the register/completed footer.
pub fn detail_lines(ev: &ClubEvent, past: bool) -> Vec<Line<'static>> {
    let t = theme::current();
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Date: ", t.dim),
            Span::raw(ev.date_range_display()),
        ]),
        Line::from(vec![
            Span::styled("Time: ", t.dim),
            Span::raw(ev.time.clone()),
        ]),
    ];
    if !ev.location.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Location: ", t.dim),
            Span::raw(ev.location.clone()),
        ]));
    }
    if let Some(ref image) = ev.image {
        lines.push(Line::from(vec![
            Span::styled("Image: ", t.dim),
            Span::styled(image.clone(), t.dim),
        ]));
    }

    if !ev.tags.is_empty() {
        lines.push(Line::from(""));
        let spans: Vec<Span> = ev
            .tags
            .iter()
            .flat_map(|tag| [Span::styled(format!(" {} ", tag), t.tag), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("About This Event", t.header)));
    for line in ev.description.lines() {
        lines.push(Line::from(line.to_string()));
    }

    if let Some(ref items) = ev.what_to_expect {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("What to Expect", t.header)));
        for item in items {
            lines.push(Line::from(vec![
                Span::styled("  \u{2713} ", t.highlight),
                Span::raw(item.clone()),
            ]));
        }
    }

    if let Some(ref req) = ev.requirements {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Requirements", t.header)));
        lines.push(Line::from(req.clone()));
    }

    lines.push(Line::from(""));
    lines.push(if past {
        Line::from(Span::styled(" Event Completed ", t.dim.add_modifier(Modifier::BOLD)))
    } else {
        Line::from(Span::styled(" Register Now ", t.selected.add_modifier(Modifier::BOLD)))
    });
    lines
}

pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}
