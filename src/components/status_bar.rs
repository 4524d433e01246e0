use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
    Frame,
};

use crate::app::Section;
use crate::club::content::{CHAPTER_NAME, CONTACT_EMAIL};
use crate::theme;

/// Section tabs across the top of the screen.
pub struct NavBar;

impl NavBar {
    pub fn render(frame: &mut Frame, area: Rect, current: Section) {
        let t = theme::current();
        let w = area.width as usize;

        let titles: Vec<Line> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| {
                if w >= 90 {
                    Line::from(format!("{} {}", i + 1, s.title()))
                } else {
                    Line::from(format!("{}", i + 1))
                }
            })
            .collect();

        let tabs = Tabs::new(titles)
            .select(current.index())
            .style(t.dim)
            .highlight_style(t.selected)
            .divider(Span::styled("|", t.border));

        let brand = Line::from(vec![
            Span::styled(" WiCyS ", t.accent),
            Span::styled(current.title(), t.header),
        ]);

        if w >= 90 {
            let left_w = 24.min(area.width);
            let left = Rect::new(area.x, area.y, left_w, area.height);
            let right = Rect::new(area.x + left_w, area.y, area.width - left_w, area.height);
            frame.render_widget(Paragraph::new(brand), left);
            frame.render_widget(tabs, right);
        } else {
            frame.render_widget(tabs, area);
        }
    }
}

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, section: Section, message: Option<&str>) {
        let t = theme::current();
        let w = area.width as usize;

        let mode_str = format!("[{}]{}", section.index() + 1, section.title());

        // Show status message if present, otherwise context-aware hints
        let right_text = if let Some(msg) = message {
            format!(" {} ", msg)
        } else {
            match section {
                Section::Events if w >= 80 => {
                    " jk:Select Enter:Details Tab:Next ?:Help q:Quit".to_string()
                }
                Section::Events if w >= 50 => " jk:Select Enter:Details q:Quit".to_string(),
                Section::Home if w >= 80 => {
                    " g:Get Started e:Events Tab:Next ?:Help q:Quit".to_string()
                }
                Section::Started if w >= 80 => {
                    " jk:Scroll m:Membership Tab:Next ?:Help q:Quit".to_string()
                }
                _ if w >= 50 => " 1-7:Section Tab:Next ?:Help q:Quit".to_string(),
                _ => " ?:Help q:Quit".to_string(),
            }
        };

        let footer = if w >= 120 {
            format!(" {} \u{b7} {} ", CHAPTER_NAME, CONTACT_EMAIL)
        } else {
            String::new()
        };

        let left = format!(" {} ", mode_str);
        let used = left.chars().count() + footer.chars().count() + right_text.chars().count();
        let padding = " ".repeat(w.saturating_sub(used));

        let line = Line::from(vec![
            Span::styled(left, t.status),
            Span::styled(footer, t.status),
            Span::styled(padding, t.status),
            Span::styled(right_text, t.status),
        ]);

        let bar = Paragraph::new(line).style(t.status);
        frame.render_widget(bar, area);
    }
}
