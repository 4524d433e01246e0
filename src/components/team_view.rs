use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::club::content::TEAM_SIZE;
use crate::theme;

pub struct TeamView;

impl TeamView {
    pub fn render(frame: &mut Frame, area: Rect) {
        let t = theme::current();

        let block = Block::default()
            .title(" Meet Our Team ")
            .title_style(t.accent)
            .title_bottom(Line::from(Span::styled(
                " The passionate individuals driving WiCyS forward ",
                t.dim,
            )))
            .borders(Borders::ALL)
            .border_style(t.border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let per_row = if inner.width >= 90 { 3 } else { 2 };
        let rows_needed = TEAM_SIZE.div_ceil(per_row);

        let rows = Layout::vertical(vec![Constraint::Length(6); rows_needed as usize]).split(inner);
        for member in 1..=TEAM_SIZE {
            let idx = member - 1;
            let Some(row) = rows.get((idx / per_row) as usize) else {
                break;
            };
            let cols = Layout::horizontal(vec![Constraint::Ratio(1, per_row); per_row as usize])
                .split(*row);
            let col = cols[(idx % per_row) as usize];

            let card = Paragraph::new(vec![
                Line::from(Span::styled(format!("Team Member {}", member), t.header)),
                Line::from(Span::styled("Leadership Role", t.highlight)),
                Line::from(Span::styled(
                    "Passionate about cybersecurity education and community building",
                    t.dim,
                )),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).border_style(t.border));
            frame.render_widget(card, col);
        }
    }
}
