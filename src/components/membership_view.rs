use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::club::content::{MEMBERSHIP_BLURB, MEMBERSHIP_TIERS, MEMBERSHIP_URL};
use crate::theme;

pub struct MembershipView;

impl MembershipView {
    pub fn render(frame: &mut Frame, area: Rect) {
        let t = theme::current();
        let block = Block::default()
            .title(" Join Our Community ")
            .title_style(t.accent)
            .borders(Borders::ALL)
            .border_style(t.border);

        let mut lines = vec![
            Line::from(Span::styled(MEMBERSHIP_BLURB, t.dim)),
            Line::from(""),
            Line::from(Span::styled("Membership Options", t.header)),
            Line::from(Span::styled(
                "Choose the membership level that's right for you:",
                t.dim,
            )),
            Line::from(""),
        ];

        for tier in MEMBERSHIP_TIERS.iter() {
            lines.push(Line::from(Span::styled(format!("  {}", tier.name), t.accent)));
            lines.push(Line::from(format!("    {}", tier.audience)));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled(" Become a Member Today ", t.selected),
            Span::styled(format!("  {}", MEMBERSHIP_URL), t.highlight),
        ]));

        let para = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
        frame.render_widget(para, area);
    }
}

/// Sections that have not been written yet.
pub struct ComingSoonView;

impl ComingSoonView {
    pub fn render(frame: &mut Frame, area: Rect, title: &str) {
        let t = theme::current();
        let block = Block::default()
            .title(format!(" {} ", title))
            .title_style(t.accent)
            .borders(Borders::ALL)
            .border_style(t.border);
        let para = Paragraph::new(Line::from(Span::styled("Content coming soon...", t.dim)))
            .block(block);
        frame.render_widget(para, area);
    }
}
