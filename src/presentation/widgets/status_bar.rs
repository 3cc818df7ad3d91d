//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Warning, e.g. a quantity limit was hit.
    Warning,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Warning => Color::Yellow,
        }
    }
}

/// One-line message on the left, running total on the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBar {
    message: String,
    right: String,
    level: StatusLevel,
}

#[allow(missing_docs)]
impl StatusBar {
    /// Creates empty status bar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: String::new(),
            right: String::new(),
            level: StatusLevel::Info,
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::new()
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Warning,
            ..Self::new()
        }
    }

    /// Sets right-hand content.
    #[must_use]
    pub fn right(mut self, content: impl Into<String>) -> Self {
        self.right = content.into();
        self
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn level(&self) -> StatusLevel {
        self.level
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.level.color())
            .add_modifier(Modifier::BOLD);

        let width = area.width as usize;
        let padding = width.saturating_sub(self.message.width() + self.right.width());

        let line = Line::from(vec![
            Span::styled(self.message.as_str(), style),
            Span::raw(" ".repeat(padding)),
            Span::styled(self.right.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_places_right_text_at_edge() {
        let status = StatusBar::warning("Limit reached").right("$5500");
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);

        (&status).render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(row.starts_with("Limit reached"));
        assert!(row.ends_with("$5500"));
        assert_eq!(status.level(), StatusLevel::Warning);
    }
}
