use crate::domain::catalog::QuantityCatalog;
use crate::domain::entities::{QuantityItem, format_cost};
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::{align_right, fit_to_width};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const CURSOR: &str = "▸ ";
const CURSOR_WIDTH: usize = 2;
const COST_WIDTH: usize = 8;
const CONTROLS_WIDTH: usize = 14;
const REMAINING_WIDTH: usize = 9;

/// Bordered list of counted items with `[-] n [+]` controls.
pub struct QuantityPanel<'a> {
    catalog: &'a QuantityCatalog,
    theme: &'a Theme,
    cursor: Option<usize>,
    show_remaining: bool,
}

#[allow(missing_docs)]
impl<'a> QuantityPanel<'a> {
    #[must_use]
    pub const fn new(catalog: &'a QuantityCatalog, theme: &'a Theme) -> Self {
        Self {
            catalog,
            theme,
            cursor: None,
            show_remaining: true,
        }
    }

    /// Marks the focused row; `None` renders the panel unfocused.
    #[must_use]
    pub const fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    #[must_use]
    pub const fn show_remaining(mut self, show: bool) -> Self {
        self.show_remaining = show;
        self
    }

    fn item_line(&self, index: usize, item: &QuantityItem, width: usize) -> Line<'static> {
        let focused = self.cursor == Some(index);
        let reserved = CURSOR_WIDTH
            + COST_WIDTH
            + CONTROLS_WIDTH
            + if self.show_remaining { REMAINING_WIDTH } else { 0 };
        let name_width = width.saturating_sub(reserved).max(4);

        let row_style = if focused {
            self.theme.selection_style
        } else {
            self.theme.base_style
        };

        let mut spans = vec![
            Span::styled(if focused { CURSOR } else { "  " }, row_style),
            Span::styled(fit_to_width(item.name(), name_width), row_style),
            Span::styled(align_right(&format_cost(item.cost()), COST_WIDTH), row_style),
            Span::raw("  "),
            Span::styled("[-]", self.theme.control_style(item.can_decrement())),
            Span::styled(
                align_right(&item.quantity().to_string(), 4),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled("[+]", self.theme.control_style(item.can_increment())),
        ];

        if let (true, Some(left)) = (self.show_remaining, item.remaining()) {
            spans.push(Span::styled(
                align_right(&format!("{left} left"), REMAINING_WIDTH),
                self.theme.dimmed_style,
            ));
        }

        Line::from(spans)
    }
}

impl Widget for QuantityPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.cursor.is_some() {
            Style::default().fg(self.theme.accent)
        } else {
            self.theme.dimmed_style
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {} ", self.catalog.section().title()));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = usize::from(inner.width);
        // last row holds the total
        let visible = usize::from(inner.height).saturating_sub(1).max(1);
        let offset = self
            .cursor
            .map_or(0, |c| c.saturating_sub(visible.saturating_sub(1)));

        let mut lines: Vec<Line> = self
            .catalog
            .items()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, item)| self.item_line(i, item, width))
            .collect();

        lines.push(Line::from(Span::styled(
            format!("Total Cost: {}", format_cost(self.catalog.total())),
            self.theme.total_style,
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
