use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::club::content::{self, leaderboard_points, LEADERBOARD_SIZE};
use crate::theme;

pub struct CtfView;

impl CtfView {
    pub fn render(frame: &mut Frame, area: Rect) {
        let w = area.width;
        let cols = if w >= 80 {
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(area)
        } else {
            Layout::vertical([Constraint::Length(10), Constraint::Min(7)]).split(area)
        };

        render_competition(frame, cols[0]);
        render_leaderboard(frame, cols[1]);
    }
}

fn render_competition(frame: &mut Frame, area: Rect) {
    let t = theme::current();
    let block = Block::default()
        .title(" Capture The Flag ")
        .title_style(t.accent)
        .borders(Borders::ALL)
        .border_style(t.border);

    let mut figures = Vec::new();
    for (i, (value, label)) in content::CTF_FIGURES.iter().enumerate() {
        if i > 0 {
            figures.push(Span::styled("  |  ", t.dim));
        }
        figures.push(Span::styled(*value, t.figure));
        figures.push(Span::styled(format!(" {}", label), t.dim));
    }

    let lines = vec![
        Line::from(Span::styled(
            "Test your skills in our competitive cybersecurity challenges",
            t.dim,
        )),
        Line::from(""),
        Line::from(Span::styled(content::CTF_TITLE, t.header)),
        Line::from(content::CTF_BLURB),
        Line::from(""),
        Line::from(figures),
        Line::from(""),
        Line::from(Span::styled(" Join Competition ", t.selected)),
    ];

    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(para, area);
}

fn render_leaderboard(frame: &mut Frame, area: Rect) {
    let t = theme::current();
    let block = Block::default()
        .title(" Leaderboard ")
        .title_style(t.accent)
        .borders(Borders::ALL)
        .border_style(t.border);

    let mut lines = vec![
        Line::from(Span::styled(
            "Check out our top performers and rising stars",
            t.dim,
        )),
        Line::from(""),
    ];

    for rank in 1..=LEADERBOARD_SIZE {
        let medal = Style::default()
            .fg(theme::rank_color(rank))
            .add_modifier(Modifier::BOLD);
        let mut spans = vec![
            Span::styled(format!(" {:>2} ", rank), medal),
            Span::raw(format!(" Player {:<4}", rank)),
            Span::styled(format!("{:>6} points", leaderboard_points(rank)), t.dim),
        ];
        if rank <= 3 {
            spans.push(Span::styled(" \u{1f3c6}", medal));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
