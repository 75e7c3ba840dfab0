// Theme system for the keyboard view
//
// Each theme defines the styles for idle keys, highlighted keys, the
// separator and the log lines. Selected by name from config.

use ratatui::style::{Color, Modifier, Style};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Mono,
    Nord,
}

impl ThemeKind {
    /// Get all available themes
    pub fn all() -> &'static [ThemeKind] {
        &[
            ThemeKind::Dark,
            ThemeKind::Light,
            ThemeKind::Mono,
            ThemeKind::Nord,
        ]
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
            ThemeKind::Mono => "mono",
            ThemeKind::Nord => "nord",
        }
    }

    /// Look up a theme by name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Mono => Theme::mono(),
            ThemeKind::Nord => Theme::nord(),
        }
    }
}

/// Styles used by the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Key that has never been pressed
    pub key: Style,
    /// Key that has been pressed at least once
    pub pressed: Style,
    pub separator: Style,
    pub log: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default): terminal colours, blue highlight
    pub fn dark() -> Self {
        Self {
            key: Style::default(),
            pressed: Style::default().bg(Color::Blue),
            separator: Style::default(),
            log: Style::default(),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            key: Style::default().fg(Color::Black).bg(Color::Gray),
            pressed: Style::default().fg(Color::Black).bg(Color::LightBlue),
            separator: Style::default().fg(Color::DarkGray),
            log: Style::default().fg(Color::Black),
        }
    }

    /// Monochrome theme for terminals without colour
    pub fn mono() -> Self {
        Self {
            key: Style::default(),
            pressed: Style::default().add_modifier(Modifier::REVERSED),
            separator: Style::default(),
            log: Style::default(),
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            key: Style::default()
                .fg(Color::Rgb(216, 222, 233))
                .bg(Color::Rgb(59, 66, 82)),
            pressed: Style::default()
                .fg(Color::Rgb(46, 52, 64))
                .bg(Color::Rgb(136, 192, 208))
                .add_modifier(Modifier::BOLD),
            separator: Style::default().fg(Color::Rgb(76, 86, 106)),
            log: Style::default().fg(Color::Rgb(229, 233, 240)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name_ignores_case() {
        assert_eq!(ThemeKind::from_name("Nord"), Some(ThemeKind::Nord));
        assert_eq!(ThemeKind::from_name(" mono "), Some(ThemeKind::Mono));
        assert_eq!(ThemeKind::from_name("dracula"), None);
    }

    #[test]
    fn every_theme_distinguishes_pressed_keys() {
        for kind in ThemeKind::all() {
            let theme = kind.theme();
            assert_ne!(theme.key, theme.pressed, "{}", kind.name());
        }
    }

    #[test]
    fn default_highlight_is_blue() {
        assert_eq!(Theme::default().pressed.bg, Some(Color::Blue));
    }
}
