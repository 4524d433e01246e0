use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::club::content::{Link, RESOURCE_GROUPS, SOCIAL_LINKS};
use crate::theme;

/// The "Getting Started" directory of links.
pub struct ResourcesView;

impl ResourcesView {
    /// Number of lines the view produces, for clamping scroll.
    pub fn line_count() -> usize {
        build_lines().len()
    }

    pub fn render(frame: &mut Frame, area: Rect, scroll: usize) {
        let t = theme::current();
        let block = Block::default()
            .title(" Getting Started ")
            .title_style(t.accent)
            .title_bottom(Line::from(Span::styled(" j/k:Scroll m:Membership ", t.dim)))
            .borders(Borders::ALL)
            .border_style(t.border);

        let lines = build_lines();
        let max_scroll = lines.len().saturating_sub(1);
        let scroll = scroll.min(max_scroll).min(u16::MAX as usize) as u16;

        let para = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(block);
        frame.render_widget(para, area);
    }
}

fn build_lines() -> Vec<Line<'static>> {
    let t = theme::current();
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);

    let mut lines = vec![
        Line::from(Span::styled(
            "Your complete guide to learning cybersecurity. Whether you're a beginner or looking to sharpen your skills, we've curated the best resources to help you on your journey.",
            t.dim,
        )),
        Line::from(""),
        Line::from(Span::styled("Connect", section_style)),
    ];

    for link in SOCIAL_LINKS.iter() {
        lines.push(link_line(link));
    }
    lines.push(Line::from(vec![
        Span::styled("  m ", t.selected),
        Span::raw(" Join as official member"),
    ]));

    for group in RESOURCE_GROUPS.iter() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(group.title, section_style)));
        for link in group.links {
            lines.push(link_line(link));
            lines.push(Line::from(Span::styled(format!("      {}", link.description), t.dim)));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Ready to Join the Community?", t.header)));
    lines.push(Line::from(Span::styled(
        "Connect with fellow cybersecurity enthusiasts, participate in our CTFs, and gain recognition for your achievements.",
        t.dim,
    )));
    lines.push(Line::from(vec![
        Span::styled("  m ", t.selected),
        Span::raw(" Become an Official Member"),
    ]));

    lines
}

fn link_line(link: &Link) -> Line<'static> {
    let t = theme::current();
    Line::from(vec![
        Span::styled(format!("  \u{2022} {}", link.name), t.header),
        Span::styled(format!("  {}", link.url), t.highlight),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_link_is_listed() {
        let links: usize = RESOURCE_GROUPS.iter().map(|g| g.links.len()).sum();
        // intro, blank, header, socials, member button, per group blank + header,
        // two lines per link, then the closing four lines.
        let expected = 3 + SOCIAL_LINKS.len() + 1 + RESOURCE_GROUPS.len() * 2 + links * 2 + 4;
        assert_eq!(ResourcesView::line_count(), expected);
    }
}
