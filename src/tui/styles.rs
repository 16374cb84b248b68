//! Ward-display color palette and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::AlertLevel;

/// Dark bedside-monitor theme.
pub struct WardTheme;

impl WardTheme {
    /// Cyan accent - the classic monitor trace color
    pub const ACCENT: Color = Color::Rgb(34, 211, 238); // #22D3EE

    /// Light slate for borders
    pub const BORDER: Color = Color::Rgb(71, 85, 105); // #475569

    /// Primary text (white)
    pub const TEXT_PRIMARY: Color = Color::Rgb(248, 250, 252); // #F8FAFC

    /// Secondary text (gray)
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // #94A3B8

    /// Muted text
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // #64748B

    /// Style for titles
    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal text
    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    /// Style for secondary text
    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Style for muted text
    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    /// Style for panel borders
    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Style for the accent trace color
    #[must_use]
    pub fn accent() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    /// Style carrying an alert level's semantic color.
    #[must_use]
    pub fn alert(level: AlertLevel) -> Style {
        let (r, g, b) = level.color();
        Style::default().fg(Color::Rgb(r, g, b))
    }

    /// Bold variant of [`alert`](Self::alert) for banners.
    #[must_use]
    pub fn alert_emphasis(level: AlertLevel) -> Style {
        Self::alert(level).add_modifier(Modifier::BOLD)
    }
}
