//! Cost summary screen.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::application::PlanSummary;
use crate::domain::entities::{Section, format_cost};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::CartTable;

/// Grand total, per-section totals and the itemized cart.
pub struct SummaryScreen<'a> {
    summary: &'a PlanSummary,
    theme: &'a Theme,
}

impl<'a> SummaryScreen<'a> {
    /// Screen over a computed summary.
    #[must_use]
    pub const fn new(summary: &'a PlanSummary, theme: &'a Theme) -> Self {
        Self { summary, theme }
    }

    fn totals_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    "Total cost for the event: ",
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format_cost(self.summary.grand_total), self.theme.total_style),
            ]),
            Line::default(),
        ];

        lines.extend(Section::ALL.into_iter().map(|section| {
            let mut spans = vec![
                Span::styled(format!("{:<10}", section.label()), self.theme.dimmed_style),
                Span::raw(format_cost(self.summary.totals.get(section))),
            ];
            if section == Section::Meals {
                spans.push(Span::styled(
                    format!("  (for {} people)", self.summary.people),
                    self.theme.dimmed_style,
                ));
            }
            Line::from(spans)
        }));

        lines
    }
}

impl Widget for SummaryScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [totals_area, table_area] =
            Layout::vertical([Constraint::Length(7), Constraint::Fill(1)]).areas(area);

        Paragraph::new(self.totals_lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(self.theme.accent))
                    .title(" Details "),
            )
            .render(totals_area, buf);

        CartTable::new(&self.summary.lines, self.theme).render(table_area, buf);
    }
}
