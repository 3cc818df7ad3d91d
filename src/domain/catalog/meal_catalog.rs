//! Meal store.

use tracing::{debug, warn};

use crate::domain::entities::{MealItem, PeopleCount};

/// Ordered store of checkbox meals.
#[derive(Debug, Clone, PartialEq)]
pub struct MealCatalog {
    items: Vec<MealItem>,
}

#[allow(missing_docs)]
impl MealCatalog {
    #[must_use]
    pub const fn new(items: Vec<MealItem>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[MealItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MealItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Flips the selection of the meal at `index`.
    ///
    /// Deselecting a per-person meal records a snapshot of zero people;
    /// selecting one records `people_at_toggle`, or clears the snapshot so
    /// the meal follows the session head count. Returns whether a meal was
    /// toggled.
    pub fn toggle_selection(&mut self, index: usize, people_at_toggle: Option<u32>) -> bool {
        let len = self.items.len();
        let Some(item) = self.items.get_mut(index) else {
            warn!(index, len, "Ignoring out-of-range meal index");
            return false;
        };

        item.toggle(people_at_toggle);
        debug!(
            index,
            name = item.name(),
            selected = item.is_selected(),
            snapshot = ?item.people_snapshot(),
            "Toggled meal"
        );
        true
    }

    /// Meals currently selected.
    pub fn selected(&self) -> impl Iterator<Item = &MealItem> {
        self.items.iter().filter(|item| item.is_selected())
    }

    /// Σ cost × people over selected meals.
    #[must_use]
    pub fn total(&self, people: PeopleCount) -> f64 {
        self.selected().map(|item| item.cost() * people.factor()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ItemDetails;

    fn meals() -> MealCatalog {
        MealCatalog::new(vec![
            MealItem::new(ItemDetails::new("Breakfast", 50.0, ""), true),
            MealItem::new(ItemDetails::new("High Tea", 25.0, ""), true),
            MealItem::new(ItemDetails::new("Welcome Cake", 40.0, ""), false),
        ])
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let mut catalog = meals();
        for index in 0..catalog.len() {
            let before = catalog.items()[index].is_selected();
            catalog.toggle_selection(index, None);
            catalog.toggle_selection(index, None);
            assert_eq!(catalog.items()[index].is_selected(), before);
        }
    }

    #[test]
    fn test_deselect_per_person_snapshots_zero() {
        let mut catalog = meals();
        catalog.toggle_selection(0, None);
        catalog.toggle_selection(0, Some(8));
        assert_eq!(catalog.items()[0].people_snapshot(), Some(0));
    }

    #[test]
    fn test_out_of_range_toggle_is_ignored() {
        let mut catalog = meals();
        assert!(!catalog.toggle_selection(10, None));
        assert_eq!(catalog.selected().count(), 0);
    }

    #[test]
    fn test_total_scales_by_people() {
        let mut catalog = meals();
        catalog.toggle_selection(0, None);
        catalog.toggle_selection(1, None);
        let total = catalog.total(PeopleCount::clamped(4));
        assert!((total - 4.0 * 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_empty_selection_is_zero() {
        let catalog = meals();
        assert!(catalog.total(PeopleCount::MIN).abs() < f64::EPSILON);
    }
}
