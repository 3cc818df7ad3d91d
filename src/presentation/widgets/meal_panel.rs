use crate::domain::catalog::MealCatalog;
use crate::domain::entities::{MealItem, PeopleCount, Section, format_cost};
use crate::presentation::theme::Theme;
use crate::presentation::ui::utils::{align_right, fit_to_width};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const COST_WIDTH: usize = 8;

/// Bordered meal checklist with the head count field.
pub struct MealPanel<'a> {
    catalog: &'a MealCatalog,
    people: PeopleCount,
    theme: &'a Theme,
    cursor: Option<usize>,
    people_edit: Option<&'a str>,
}

#[allow(missing_docs)]
impl<'a> MealPanel<'a> {
    #[must_use]
    pub const fn new(catalog: &'a MealCatalog, people: PeopleCount, theme: &'a Theme) -> Self {
        Self {
            catalog,
            people,
            theme,
            cursor: None,
            people_edit: None,
        }
    }

    #[must_use]
    pub const fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Shows the in-progress head count text instead of the committed value.
    #[must_use]
    pub const fn people_edit(mut self, buffer: Option<&'a str>) -> Self {
        self.people_edit = buffer;
        self
    }

    fn people_line(&self) -> Line<'static> {
        let value = match self.people_edit {
            Some(buffer) => Span::styled(
                format!("{buffer}_"),
                self.theme
                    .selection_style
                    .add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(
                self.people.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        };
        Line::from(vec![Span::raw("Number of People: "), value])
    }

    fn meal_line(&self, index: usize, meal: &MealItem, width: usize) -> Line<'static> {
        let focused = self.cursor == Some(index);
        let row_style = if focused {
            self.theme.selection_style
        } else {
            self.theme.base_style
        };
        let checkbox = if meal.is_selected() { "[x] " } else { "[ ] " };
        let name_width = width.saturating_sub(2 + checkbox.len() + COST_WIDTH).max(4);

        Line::from(vec![
            Span::styled(if focused { "▸ " } else { "  " }, row_style),
            Span::styled(checkbox, self.theme.control_style(meal.is_selected())),
            Span::styled(fit_to_width(meal.name(), name_width), row_style),
            Span::styled(align_right(&format_cost(meal.cost()), COST_WIDTH), row_style),
        ])
    }
}

impl Widget for MealPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.cursor.is_some() || self.people_edit.is_some() {
            Style::default().fg(self.theme.accent)
        } else {
            self.theme.dimmed_style
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" {} ", Section::Meals.title()));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = usize::from(inner.width);
        // people field and total take a row each
        let visible = usize::from(inner.height).saturating_sub(2).max(1);
        let offset = self
            .cursor
            .map_or(0, |c| c.saturating_sub(visible.saturating_sub(1)));

        let mut lines = vec![self.people_line()];
        lines.extend(
            self.catalog
                .items()
                .iter()
                .enumerate()
                .skip(offset)
                .take(visible)
                .map(|(i, meal)| self.meal_line(i, meal, width)),
        );
        lines.push(Line::from(Span::styled(
            format!("Total Cost: {}", format_cost(self.catalog.total(self.people))),
            self.theme.total_style,
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
