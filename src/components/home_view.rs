use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::club::content::{self, StatKind};
use crate::club::HeroStats;
use crate::theme;

pub struct HomeView;

impl HomeView {
    pub fn render(frame: &mut Frame, area: Rect, stats: HeroStats) {
        let rows = Layout::vertical([
            Constraint::Length(9), // hero
            Constraint::Length(5), // counters
            Constraint::Min(6),    // offerings
            Constraint::Length(3), // call to action
        ])
        .split(area);

        render_hero(frame, rows[0]);
        render_counters(frame, rows[1], stats);
        render_offerings(frame, rows[2], stats);
        render_call_to_action(frame, rows[3]);
    }
}

fn stat_value(stats: HeroStats, kind: StatKind) -> u32 {
    match kind {
        StatKind::Students => stats.students,
        StatKind::Events => stats.events,
        StatKind::Community => stats.community,
    }
}

fn render_hero(frame: &mut Frame, area: Rect) {
    let t = theme::current();
    let [first, brand, last] = content::HERO_HEADLINE;

    let lines = vec![
        Line::from(Span::styled(
            format!("\u{2728} {}", content::HERO_TAGLINE),
            t.highlight,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} ", first), t.header),
            Span::styled(brand, t.accent.add_modifier(Modifier::UNDERLINED)),
            Span::styled(format!(" {}", last), t.header),
        ]),
        Line::from(""),
        Line::from(Span::styled(content::HERO_BLURB, t.dim)),
        Line::from(""),
        Line::from(vec![
            Span::styled(" g ", t.selected),
            Span::raw(" Get Started    "),
            Span::styled(" e ", t.selected),
            Span::raw(" Explore Events"),
        ]),
    ];

    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}

fn render_counters(frame: &mut Frame, area: Rect, stats: HeroStats) {
    let t = theme::current();
    let cols = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    for (card, col) in content::STAT_CARDS.iter().zip(cols.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border);
        let lines = vec![
            Line::from(Span::styled(stat_value(stats, card.kind).to_string(), t.figure)),
            Line::from(Span::styled(card.label, t.header)),
            Line::from(Span::styled(card.caption, t.dim)),
        ];
        let para = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(para, *col);
    }
}

fn render_offerings(frame: &mut Frame, area: Rect, stats: HeroStats) {
    let t = theme::current();
    let block = Block::default()
        .title(" What We Offer ")
        .title_style(t.accent)
        .title_bottom(Line::from(Span::styled(
            " Everything you need to excel in cybersecurity ",
            t.dim,
        )))
        .borders(Borders::ALL)
        .border_style(t.border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(inner);
    for (row_idx, row) in rows.iter().enumerate() {
        let cols = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(*row);

        for (col_idx, col) in cols.iter().enumerate() {
            let Some(offer) = content::OFFERINGS.get(row_idx * 3 + col_idx) else {
                continue;
            };
            let mut lines = vec![
                Line::from(Span::styled(offer.title, t.header)),
                Line::from(Span::styled(offer.body, t.dim)),
            ];
            if let Some((kind, label)) = offer.figure {
                lines.push(Line::from(vec![
                    Span::styled(format!("{}+ ", stat_value(stats, kind)), t.figure),
                    Span::styled(label, t.dim),
                ]));
            }
            let para = Paragraph::new(lines).wrap(Wrap { trim: true });
            frame.render_widget(para, col.inner(ratatui::layout::Margin::new(1, 0)));
        }
    }
}

fn render_call_to_action(frame: &mut Frame, area: Rect) {
    let t = theme::current();
    let line = Line::from(vec![
        Span::styled("Ready to Start Your Journey? ", t.header),
        Span::styled("Join hundreds of students mastering cybersecurity  ", t.dim),
        Span::styled(" g ", t.selected),
        Span::raw(" Get Started Now"),
    ]);
    let para = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).border_style(t.border));
    frame.render_widget(para, area);
}
