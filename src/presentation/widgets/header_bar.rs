use crate::domain::entities::{Section, ViewMode};
use crate::presentation::theme::{Theme, shade};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const APP_TITLE: &str = "Conference Expense Planner";

#[allow(missing_docs)]
pub struct HeaderBarStyle {
    pub app_name: Style,
    pub link: Style,
    pub active_link: Style,
    pub details_button: Style,
}

#[allow(missing_docs)]
impl HeaderBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        let link_bg = shade(theme.accent, 0.08, 0.5);

        Self {
            app_name: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            link: Style::default().bg(link_bg).fg(Color::White),
            active_link: Style::default()
                .bg(link_bg)
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            details_button: Style::default()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        }
    }
}

/// Top bar with navigation links and the "Show Details" button.
pub struct HeaderBar {
    active: Option<Section>,
    mode: ViewMode,
    style: HeaderBarStyle,
}

impl HeaderBar {
    /// Header for the given screen mode.
    #[must_use]
    pub fn new(theme: &Theme, mode: ViewMode) -> Self {
        Self {
            active: None,
            mode,
            style: HeaderBarStyle::from_theme(theme),
        }
    }

    /// Highlights the link of the focused section.
    #[must_use]
    pub const fn active(mut self, section: Section) -> Self {
        self.active = Some(section);
        self
    }

    fn button_label(&self) -> &'static str {
        match self.mode {
            ViewMode::Selecting => " Show Details ",
            ViewMode::Summarizing => " Hide Details ",
        }
    }
}

impl Widget for HeaderBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled(format!(" {APP_TITLE} "), self.style.app_name),
            Span::raw(" "),
        ];

        for (n, section) in Section::ALL.into_iter().enumerate() {
            let highlighted =
                self.mode == ViewMode::Selecting && self.active == Some(section);
            let style = if highlighted {
                self.style.active_link
            } else {
                self.style.link
            };
            spans.push(Span::styled(format!(" {} {} ", n + 1, section.label()), style));
            spans.push(Span::raw(" "));
        }

        spans.push(Span::styled(self.button_label(), self.style.details_button));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::widgets::buffer_text;

    #[test]
    fn test_header_lists_sections_and_button() {
        let area = Rect::new(0, 0, 90, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new(&Theme::default(), ViewMode::Selecting)
            .active(Section::Addons)
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains(APP_TITLE));
        assert!(text.contains("1 Venue"));
        assert!(text.contains("2 Add-ons"));
        assert!(text.contains("3 Meals"));
        assert!(text.contains("Show Details"));
    }

    #[test]
    fn test_header_button_in_summary() {
        let area = Rect::new(0, 0, 90, 1);
        let mut buf = Buffer::empty(area);

        HeaderBar::new(&Theme::default(), ViewMode::Summarizing).render(area, &mut buf);

        assert!(buffer_text(&buf).contains("Hide Details"));
    }
}
