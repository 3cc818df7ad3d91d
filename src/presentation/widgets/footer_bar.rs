use crate::domain::keybinding::Keybind;
use crate::presentation::theme::{Theme, shade};
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

#[allow(missing_docs)]
pub struct FooterBarStyle {
    pub label_style: Style,
    pub key_style: Style,
}

#[allow(missing_docs)]
impl FooterBarStyle {
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            label_style: Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default()
                .bg(shade(theme.accent, 0.08, 0.5))
                .fg(Color::White),
        }
    }
}

/// Bottom bar listing the active keybindings.
pub struct FooterBar<'a> {
    keybindings: &'a [Keybind],
    style: FooterBarStyle,
}

impl<'a> FooterBar<'a> {
    /// Footer listing `keybindings`.
    #[must_use]
    pub fn new(keybindings: &'a [Keybind], theme: &Theme) -> Self {
        Self {
            keybindings,
            style: FooterBarStyle::from_theme(theme),
        }
    }

    fn format_key(key: &crossterm::event::KeyEvent) -> String {
        let mut s = String::new();
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            s.push_str("C-");
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            s.push_str("A-");
        }

        match key.code {
            KeyCode::Char(' ') => s.push_str("Space"),
            KeyCode::Char(c) => s.push(c),
            KeyCode::Enter => s.push_str("Enter"),
            KeyCode::Esc => s.push_str("Esc"),
            KeyCode::Tab => s.push_str("Tab"),
            KeyCode::BackTab => s.push_str("S-Tab"),
            KeyCode::Up => s.push('↑'),
            KeyCode::Down => s.push('↓'),
            KeyCode::Left => s.push('←'),
            KeyCode::Right => s.push('→'),
            KeyCode::F(n) => s.push_str(&format!("F{n}")),
            other => s.push_str(&format!("{other:?}")),
        }
        s
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = Vec::new();
        for (i, binding) in self
            .keybindings
            .iter()
            .filter(|k| k.visible_in_bar)
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {} ", binding.label),
                self.style.label_style,
            ));
            spans.push(Span::styled(
                format!(" {} ", Self::format_key(&binding.key)),
                self.style.key_style,
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
