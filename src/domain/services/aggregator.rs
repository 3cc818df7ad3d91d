//! Cart and total derivation.
//!
//! Everything here is recomputed from the catalogs on every call. Catalogs
//! are small and fixed, so nothing is cached.

use crate::domain::catalog::{AddonCatalog, MealCatalog, VenueCatalog};
use crate::domain::entities::{CartLine, LineQuantity, PeopleCount, Section, SectionTotals};

/// Read-only view over the three catalogs and the head count.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    venue: &'a VenueCatalog,
    addons: &'a AddonCatalog,
    meals: &'a MealCatalog,
    people: PeopleCount,
}

#[allow(missing_docs)]
impl<'a> Aggregator<'a> {
    #[must_use]
    pub const fn new(
        venue: &'a VenueCatalog,
        addons: &'a AddonCatalog,
        meals: &'a MealCatalog,
        people: PeopleCount,
    ) -> Self {
        Self {
            venue,
            addons,
            meals,
            people,
        }
    }

    /// Builds the cart: chosen venue rooms, then add-ons, then selected meals.
    ///
    /// Add-ons whose name is already in the cart as an add-on are skipped.
    #[must_use]
    pub fn build_cart(&self) -> Vec<CartLine> {
        let mut lines = Vec::new();

        for item in self.venue.items().iter().filter(|i| i.quantity() > 0) {
            lines.push(CartLine::new(
                item.name(),
                item.cost(),
                LineQuantity::Units(item.quantity()),
                Section::Venue,
            ));
        }

        for item in self.addons.items().iter().filter(|i| i.quantity() > 0) {
            let duplicate = lines
                .iter()
                .any(|line| line.section == Section::Addons && line.name == item.name());
            if duplicate {
                continue;
            }
            lines.push(CartLine::new(
                item.name(),
                item.cost(),
                LineQuantity::Units(item.quantity()),
                Section::Addons,
            ));
        }

        for item in self.meals.selected() {
            lines.push(
                CartLine::new(
                    item.name(),
                    item.cost(),
                    LineQuantity::People(self.people.get()),
                    Section::Meals,
                )
                .per_person(item.is_per_person()),
            );
        }

        lines
    }

    /// Total of one section.
    #[must_use]
    pub fn section_total(&self, section: Section) -> f64 {
        match section {
            Section::Venue => self.venue.total(),
            Section::Addons => self.addons.total(),
            Section::Meals => self.meals.total(self.people),
        }
    }

    #[must_use]
    pub fn totals(&self) -> SectionTotals {
        SectionTotals {
            venue: self.section_total(Section::Venue),
            addons: self.section_total(Section::Addons),
            meals: self.section_total(Section::Meals),
        }
    }

    #[must_use]
    pub fn grand_total(&self) -> f64 {
        self.totals().grand_total()
    }
}
