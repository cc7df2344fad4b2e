//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::{ColorBand, Trend};

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic selection based on the
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for header text.
    pub header: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
    /// The cold end of the band palette.
    pub cold: Color,
    pub cool: Color,
    pub mild: Color,
    pub warm: Color,
    /// The hot/severe end of the band palette.
    pub severe: Color,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
            cold: Color::Blue,
            cool: Color::Cyan,
            mild: Color::Green,
            warm: Color::Yellow,
            severe: Color::Red,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
            cold: Color::Blue,
            cool: Color::LightBlue,
            mild: Color::Green,
            warm: Color::Yellow,
            severe: Color::Red,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get the style for a value's color band
    pub fn band_style(&self, band: ColorBand) -> Style {
        match band {
            ColorBand::Blue => Style::default().fg(self.cold),
            ColorBand::Cyan => Style::default().fg(self.cool),
            ColorBand::Green => Style::default().fg(self.mild),
            ColorBand::Yellow => Style::default().fg(self.warm),
            ColorBand::Red => Style::default().fg(self.severe).add_modifier(Modifier::BOLD),
            ColorBand::Unknown => Style::default().add_modifier(Modifier::DIM),
        }
    }

    /// Get the style for a trend arrow
    pub fn trend_style(&self, trend: Trend) -> Style {
        match trend {
            Trend::Rising => Style::default().fg(self.mild),
            Trend::Falling => Style::default().fg(self.severe),
            Trend::Stable | Trend::InsufficientData => Style::default().add_modifier(Modifier::DIM),
        }
    }
}
