use std::str::FromStr;
use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use tracing::warn;

use crate::error::ConfigError;

static THEME: OnceLock<Theme> = OnceLock::new();

/// The active theme, or the chapter colors if [`init`] was never called.
pub fn current() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}

/// Install the theme for the rest of the process. Only the first call wins.
pub fn init(theme: Theme) {
    if THEME.set(theme).is_err() {
        warn!("theme already initialized, ignoring override");
    }
}

pub const CHAPTER_PURPLE: Color = Color::Rgb(129, 41, 144);
pub const CHAPTER_GREEN: Color = Color::Rgb(183, 209, 79);
pub const FIGURE_BLUE: Color = Color::Rgb(25, 118, 210);

pub const GOLD: Color = Color::Rgb(255, 215, 0);
pub const SILVER: Color = Color::Rgb(192, 192, 192);
pub const BRONZE: Color = Color::Rgb(205, 127, 50);

/// Medal color for leaderboard `rank` (1-based), chapter purple past the podium.
pub fn rank_color(rank: u32) -> Color {
    match rank {
        1 => GOLD,
        2 => SILVER,
        3 => BRONZE,
        _ => CHAPTER_PURPLE,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub accent: Style,
    pub highlight: Style,
    pub selected: Style,
    pub header: Style,
    pub dim: Style,
    pub border: Style,
    pub status: Style,
    pub figure: Style,
    pub tag: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "wicys".to_string(),
            accent: Style::default().fg(CHAPTER_PURPLE).add_modifier(Modifier::BOLD),
            highlight: Style::default().fg(CHAPTER_GREEN),
            selected: Style::default().fg(Color::White).bg(CHAPTER_PURPLE),
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::DarkGray),
            border: Style::default().fg(Color::Gray),
            status: Style::default().fg(Color::White).bg(CHAPTER_PURPLE),
            figure: Style::default().fg(FIGURE_BLUE).add_modifier(Modifier::BOLD),
            tag: Style::default().fg(Color::Black).bg(CHAPTER_GREEN),
        }
    }
}

impl Theme {
    pub const PRESETS: [&'static str; 3] = ["wicys", "light", "mono"];

    /// Built-in preset by name. `default` is an alias for `wicys`.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "wicys" | "default" => Some(Self::default()),
            "light" => Some(Self::light()),
            "mono" => Some(Self::mono()),
            _ => None,
        }
    }

    /// Chapter colors on a light terminal background.
    fn light() -> Self {
        let ink = Color::Rgb(33, 33, 33);
        Self {
            name: "light".to_string(),
            accent: Style::default().fg(CHAPTER_PURPLE).add_modifier(Modifier::BOLD),
            highlight: Style::default().fg(Color::Rgb(85, 139, 47)),
            selected: Style::default().fg(Color::White).bg(CHAPTER_PURPLE),
            header: Style::default().fg(ink).add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Rgb(117, 117, 117)),
            border: Style::default().fg(Color::Rgb(189, 189, 189)),
            status: Style::default().fg(ink).bg(Color::Rgb(225, 190, 231)),
            figure: Style::default().fg(FIGURE_BLUE).add_modifier(Modifier::BOLD),
            tag: Style::default().fg(ink).bg(Color::Rgb(220, 237, 200)),
        }
    }

    /// No colors at all, only text attributes.
    fn mono() -> Self {
        let plain = Style::default();
        Self {
            name: "mono".to_string(),
            accent: plain.add_modifier(Modifier::BOLD),
            highlight: plain.add_modifier(Modifier::ITALIC),
            selected: plain.add_modifier(Modifier::REVERSED),
            header: plain.add_modifier(Modifier::BOLD),
            dim: plain.add_modifier(Modifier::DIM),
            border: plain,
            status: plain.add_modifier(Modifier::REVERSED),
            figure: plain.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            tag: plain.add_modifier(Modifier::REVERSED),
        }
    }
}

/// `[theme]` table of config.toml: a preset plus per-role color overrides.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub preset: Option<String>,
    pub accent: Option<String>,
    pub highlight: Option<String>,
    pub selected_bg: Option<String>,
    pub status_bg: Option<String>,
    pub figure: Option<String>,
    pub tag_bg: Option<String>,
}

impl ThemeConfig {
    pub fn into_theme(self) -> Result<Theme, ConfigError> {
        let mut theme = match self.preset.as_deref() {
            Some(name) => {
                Theme::preset(name).ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?
            }
            None => Theme::default(),
        };

        let overrides: [(&Option<String>, &mut Style, bool); 6] = [
            (&self.accent, &mut theme.accent, false),
            (&self.highlight, &mut theme.highlight, false),
            (&self.selected_bg, &mut theme.selected, true),
            (&self.status_bg, &mut theme.status, true),
            (&self.figure, &mut theme.figure, false),
            (&self.tag_bg, &mut theme.tag, true),
        ];
        for (value, style, background) in overrides {
            let Some(c) = color(value) else { continue };
            *style = if background { style.bg(c) } else { style.fg(c) };
        }

        Ok(theme)
    }
}

fn color(value: &Option<String>) -> Option<Color> {
    let raw = value.as_deref()?;
    let parsed = parse_color(raw);
    if parsed.is_none() {
        warn!(color = raw, "ignoring unrecognized theme color");
    }
    parsed
}

/// `#rrggbb`, an ANSI index, or a color name such as `light-magenta`.
pub fn parse_color(s: &str) -> Option<Color> {
    Color::from_str(s.trim()).ok()
}
