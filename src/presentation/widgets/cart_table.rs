use crate::domain::entities::{CartLine, format_cost};
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Widget},
};

const HEADERS: [&str; 4] = ["Name", "Unit Cost", "Quantity", "Subtotal"];

/// Itemized table of the derived cart.
pub struct CartTable<'a> {
    lines: &'a [CartLine],
    theme: &'a Theme,
}

impl<'a> CartTable<'a> {
    /// Table over the cart lines.
    #[must_use]
    pub const fn new(lines: &'a [CartLine], theme: &'a Theme) -> Self {
        Self { lines, theme }
    }

    fn row(line: &CartLine) -> Row<'static> {
        Row::new(vec![
            Cell::from(line.name.clone()),
            Cell::from(format_cost(line.unit_cost)),
            Cell::from(line.quantity.label()),
            Cell::from(format_cost(line.subtotal)),
        ])
    }
}

impl Widget for CartTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.accent))
            .title(" Items ");

        if self.lines.is_empty() {
            Paragraph::new(Line::from("No items selected"))
                .style(self.theme.dimmed_style)
                .alignment(Alignment::Center)
                .block(block)
                .render(area, buf);
            return;
        }

        let header = Row::new(HEADERS.map(Cell::from))
            .style(Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED));

        Table::new(
            self.lines.iter().map(Self::row),
            [
                Constraint::Fill(3),
                Constraint::Length(11),
                Constraint::Length(16),
                Constraint::Length(11),
            ],
        )
        .header(header)
        .column_spacing(2)
        .block(block)
        .render(area, buf);
    }
}
