//! Item selection screen.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::application::PlannerSession;
use crate::domain::entities::{CatalogItem, Section};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::{MealPanel, QuantityPanel};

/// Row under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Focus {
    /// Focused section.
    pub section: Section,
    /// Row within the section.
    pub index: usize,
}

impl Focus {
    /// Cursor for `section` at `index`, if the section has that row.
    fn index_in(self, section: Section) -> Option<usize> {
        (self.section == section).then_some(self.index)
    }
}

/// Venue, add-on and meal panels stacked top to bottom.
pub struct SelectionScreen<'a> {
    session: &'a PlannerSession,
    theme: &'a Theme,
    focus: Focus,
    people_edit: Option<&'a str>,
    show_remaining: bool,
    show_image_refs: bool,
}

#[allow(missing_docs)]
impl<'a> SelectionScreen<'a> {
    #[must_use]
    pub const fn new(session: &'a PlannerSession, theme: &'a Theme, focus: Focus) -> Self {
        Self {
            session,
            theme,
            focus,
            people_edit: None,
            show_remaining: true,
            show_image_refs: true,
        }
    }

    #[must_use]
    pub const fn people_edit(mut self, buffer: Option<&'a str>) -> Self {
        self.people_edit = buffer;
        self
    }

    #[must_use]
    pub const fn show_remaining(mut self, show: bool) -> Self {
        self.show_remaining = show;
        self
    }

    #[must_use]
    pub const fn show_image_refs(mut self, show: bool) -> Self {
        self.show_image_refs = show;
        self
    }

    fn image_line(&self) -> Option<Line<'static>> {
        let item = self.session.item(self.focus.section, self.focus.index)?;
        let image = item.details().image_ref();
        if image.is_empty() {
            return None;
        }
        let kind = match &item {
            CatalogItem::Quantity(_) => "Image",
            CatalogItem::Meal(_) => "Photo",
        };
        Some(Line::from(vec![
            Span::styled(format!("{kind}: "), self.theme.dimmed_style),
            Span::raw(image.to_string()),
        ]))
    }

    fn panel_height(&self, section: Section) -> u16 {
        // borders plus the total row, meals add the people row
        let extra = if section == Section::Meals { 4 } else { 3 };
        u16::try_from(self.session.section_len(section))
            .unwrap_or(u16::MAX)
            .saturating_add(extra)
    }
}

impl Widget for SelectionScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [venue_area, addons_area, meals_area, image_area] = Layout::vertical([
            Constraint::Max(self.panel_height(Section::Venue)),
            Constraint::Max(self.panel_height(Section::Addons)),
            Constraint::Max(self.panel_height(Section::Meals)),
            Constraint::Length(u16::from(self.show_image_refs)),
        ])
        .areas(area);

        QuantityPanel::new(self.session.venue(), self.theme)
            .cursor(self.focus.index_in(Section::Venue))
            .show_remaining(self.show_remaining)
            .render(venue_area, buf);

        QuantityPanel::new(self.session.addons(), self.theme)
            .cursor(self.focus.index_in(Section::Addons))
            .show_remaining(self.show_remaining)
            .render(addons_area, buf);

        MealPanel::new(self.session.meals(), self.session.people(), self.theme)
            .cursor(self.focus.index_in(Section::Meals))
            .people_edit(self.people_edit)
            .render(meals_area, buf);

        if !self.show_image_refs {
            return;
        }
        if let Some(line) = self.image_line() {
            Paragraph::new(line).render(image_area, buf);
        }
    }
}
