use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Section};
use crate::components::{self, events_view};
use crate::theme;

/// Draw one frame: tabs, the current section, overlays, status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: nav + content + status bar
    let layout = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    components::NavBar::render(frame, layout[0], app.section);

    let content_area = layout[1];
    match app.section {
        Section::Home => components::HomeView::render(frame, content_area, app.hero_stats()),
        Section::Team => components::TeamView::render(frame, content_area),
        Section::Events => {
            let schedule = app.schedule();
            components::EventsView::render(frame, content_area, &schedule, app.selected_event);
        }
        Section::Ctfs => components::CtfView::render(frame, content_area),
        Section::Sponsors => {
            components::ComingSoonView::render(frame, content_area, Section::Sponsors.title())
        }
        Section::Started => components::ResourcesView::render(frame, content_area, app.scroll),
        Section::Rubric => components::MembershipView::render(frame, content_area),
    }

    // Detail popup overlay
    if let Some(ev) = app.detail_event() {
        let past = app.is_event_past(ev);
        events_view::render_detail_popup(frame, area, ev, past, app.detail_scroll);
    }

    // Help overlay
    if app.show_help {
        render_help(frame, area);
    }

    components::StatusBar::render(frame, layout[2], app.section, app.status_message.as_deref());
}

fn render_help(frame: &mut Frame, area: Rect) {
    let t = theme::current();

    let popup_area = components::centered(area, 52, 20);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Keybindings ")
        .title_style(t.accent)
        .borders(Borders::ALL)
        .border_style(t.accent);

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = t.highlight.add_modifier(Modifier::BOLD);
    let desc_style = Style::default();
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let key = |k: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", k), key_style),
            Span::styled(desc, desc_style),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("Sections", section_style)),
        key("1-7", "Jump to section"),
        key("Tab", "Next section"),
        key("S-Tab", "Previous section"),
        Line::from(""),
        Line::from(Span::styled("Events", section_style)),
        key("j/k", "Select event"),
        key("Enter", "Event details"),
        Line::from(""),
        Line::from(Span::styled("Shortcuts", section_style)),
        key("g", "Get started"),
        key("e", "Explore events"),
        key("m", "Membership"),
        key("j/k", "Scroll long pages"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  q", key_style),
            Span::styled(" / ", t.dim),
            Span::styled("Esc     ", key_style),
            Span::styled("Quit / close popup", desc_style),
        ]),
        key("Ctrl-C", "Quit from anywhere"),
    ];

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
