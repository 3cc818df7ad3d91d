//! Session state and intent dispatch.

use tracing::debug;

use crate::application::dto::PlanSummary;
use crate::application::services::ViewOrchestrator;
use crate::domain::catalog::{AddonCatalog, CatalogSeed, MealCatalog, VenueCatalog};
use crate::domain::entities::{CatalogItem, PeopleCount, Section, ViewMode};
use crate::domain::services::Aggregator;

/// A discrete user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Adds one unit of the venue room at the index.
    IncrementVenue(usize),
    /// Removes one unit of the venue room at the index.
    DecrementVenue(usize),
    /// Adds one unit of the add-on at the index.
    IncrementAddon(usize),
    /// Removes one unit of the add-on at the index.
    DecrementAddon(usize),
    /// Flips the meal at the index.
    ToggleMeal(usize),
    /// Sets the head count, clamped to at least one.
    SetPeople(i64),
    /// Flips between selection and summary.
    ToggleSummary,
    /// Leaves the summary to reach a section.
    Navigate(Section),
}

/// Owns the catalogs and view state for one planning session.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerSession {
    venue: VenueCatalog,
    addons: AddonCatalog,
    meals: MealCatalog,
    view: ViewOrchestrator,
}

#[allow(missing_docs)]
impl PlannerSession {
    /// Seeds a fresh session with nothing selected.
    #[must_use]
    pub fn new(seed: &CatalogSeed, people: PeopleCount) -> Self {
        Self {
            venue: seed.venue_catalog(),
            addons: seed.addon_catalog(),
            meals: seed.meal_catalog(),
            view: ViewOrchestrator::new(people),
        }
    }

    /// Applies one intent to completion.
    ///
    /// Returns whether any state changed.
    pub fn apply(&mut self, intent: Intent) -> bool {
        let changed = match intent {
            Intent::IncrementVenue(index) => self.venue.increment(index),
            Intent::DecrementVenue(index) => self.venue.decrement(index),
            Intent::IncrementAddon(index) => self.addons.increment(index),
            Intent::DecrementAddon(index) => self.addons.decrement(index),
            Intent::ToggleMeal(index) => {
                let people_at_toggle = self
                    .meals
                    .get(index)
                    .filter(|meal| meal.is_selected() && meal.is_per_person())
                    .map(|_| self.view.people().get());
                self.meals.toggle_selection(index, people_at_toggle)
            }
            Intent::SetPeople(value) => self.view.set_number_of_people(value),
            Intent::ToggleSummary => {
                self.view.toggle_summary();
                true
            }
            Intent::Navigate(section) => self.view.navigate(section),
        };
        debug!(?intent, changed, "Applied intent");
        changed
    }

    #[must_use]
    pub const fn venue(&self) -> &VenueCatalog {
        &self.venue
    }

    #[must_use]
    pub const fn addons(&self) -> &AddonCatalog {
        &self.addons
    }

    #[must_use]
    pub const fn meals(&self) -> &MealCatalog {
        &self.meals
    }

    #[must_use]
    pub const fn view(&self) -> &ViewOrchestrator {
        &self.view
    }

    /// Applies text typed into the people field.
    ///
    /// Returns whether the head count changed; text that is not an integer
    /// changes nothing.
    pub fn set_people_text(&mut self, input: &str) -> bool {
        let changed = self.view.set_people_text(input);
        debug!(input, changed, "Applied people text");
        changed
    }

    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.view.mode()
    }

    #[must_use]
    pub const fn people(&self) -> PeopleCount {
        self.view.people()
    }

    /// Number of items in a section.
    #[must_use]
    pub fn section_len(&self, section: Section) -> usize {
        match section {
            Section::Venue => self.venue.len(),
            Section::Addons => self.addons.len(),
            Section::Meals => self.meals.len(),
        }
    }

    /// Item at `index` of a section.
    #[must_use]
    pub fn item(&self, section: Section, index: usize) -> Option<CatalogItem> {
        match section {
            Section::Venue => self.venue.get(index).cloned().map(CatalogItem::from),
            Section::Addons => self.addons.get(index).cloned().map(CatalogItem::from),
            Section::Meals => self.meals.get(index).cloned().map(CatalogItem::from),
        }
    }

    /// Borrows the catalogs for derivation.
    #[must_use]
    pub const fn aggregator(&self) -> Aggregator<'_> {
        Aggregator::new(&self.venue, &self.addons, &self.meals, self.view.people())
    }

    /// Cart and totals for the summary view.
    #[must_use]
    pub fn summary(&self) -> PlanSummary {
        let aggregator = self.aggregator();
        PlanSummary::new(aggregator.build_cart(), aggregator.totals(), self.people())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::AUDITORIUM_HALL;

    fn session() -> PlannerSession {
        PlannerSession::new(&CatalogSeed::builtin(), PeopleCount::MIN)
    }

    fn auditorium_index(session: &PlannerSession) -> usize {
        session
            .venue()
            .items()
            .iter()
            .position(|i| i.name() == AUDITORIUM_HALL)
            .unwrap()
    }

    #[test]
    fn test_fresh_session_summary_is_empty() {
        let summary = session().summary();
        assert!(summary.is_empty());
        assert!(summary.grand_total.abs() < f64::EPSILON);
    }

    #[test]
    fn test_apply_reports_changes() {
        let mut session = session();
        let index = auditorium_index(&session);
        assert!(session.apply(Intent::IncrementVenue(index)));
        assert!(session.apply(Intent::IncrementVenue(index)));
        assert!(session.apply(Intent::IncrementVenue(index)));
        assert!(!session.apply(Intent::IncrementVenue(index)));
        assert!(!session.apply(Intent::DecrementAddon(0)));
    }

    #[test]
    fn test_deselecting_per_person_meal_snapshots_zero() {
        let mut session = session();
        session.apply(Intent::SetPeople(6));
        session.apply(Intent::ToggleMeal(2));
        assert_eq!(session.meals().items()[2].people_snapshot(), None);

        session.apply(Intent::ToggleMeal(2));
        assert_eq!(session.meals().items()[2].people_snapshot(), Some(0));
        assert_eq!(session.people().get(), 6);
    }

    #[test]
    fn test_people_change_rescales_meals() {
        let mut session = session();
        session.apply(Intent::ToggleMeal(0));
        session.apply(Intent::SetPeople(3));
        assert!((session.aggregator().section_total(Section::Meals) - 150.0).abs() < f64::EPSILON);

        session.apply(Intent::SetPeople(-2));
        assert_eq!(session.people(), PeopleCount::MIN);
        assert!((session.aggregator().section_total(Section::Meals) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_toggle_and_navigate() {
        let mut session = session();
        session.apply(Intent::ToggleSummary);
        assert_eq!(session.mode(), ViewMode::Summarizing);
        assert!(session.apply(Intent::Navigate(Section::Venue)));
        assert_eq!(session.mode(), ViewMode::Selecting);
        assert!(!session.apply(Intent::Navigate(Section::Meals)));
    }

    #[test]
    fn test_item_lookup() {
        let session = session();
        let item = session.item(Section::Addons, 0).unwrap();
        assert_eq!(item.name(), "Projectors");
        assert!(!item.is_chosen());
        assert!(session.item(Section::Meals, 42).is_none());
        assert_eq!(session.section_len(Section::Venue), 5);
    }

    #[test]
    fn test_people_text_goes_through_session() {
        let mut session = session();
        session.apply(Intent::ToggleMeal(0));

        assert!(session.set_people_text(" 8 "));
        assert_eq!(session.people().get(), 8);
        assert!(!session.set_people_text("eight"));
        assert_eq!(session.people().get(), 8);

        assert!(session.set_people_text("0"));
        assert_eq!(session.people(), PeopleCount::MIN);
        assert!((session.aggregator().section_total(Section::Meals) - 50.0).abs() < 1e-9);
    }
}
