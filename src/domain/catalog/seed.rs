//! Seed data used to build the catalogs at start-up.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{AddonCatalog, MealCatalog, QuantityCatalog, VenueCatalog};
use crate::domain::entities::{ItemDetails, MealItem, QuantityItem, Section};
use crate::domain::errors::CatalogError;

/// One seeded catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedItem {
    /// Display name, unique among venue rooms.
    pub name: String,
    /// Unit cost, per person for meals.
    pub cost: f64,
    /// Opaque image reference shown under the panels.
    #[serde(default)]
    pub image: String,
    /// Lowers a venue room's cap. Never raises it; ignored for add-ons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_quantity: Option<u32>,
    /// Charges the meal per attendee (meals only, defaults to true).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_person: Option<bool>,
}

impl SeedItem {
    /// Entry with the default cap and per-person pricing.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: f64, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cost,
            image: image.into(),
            max_quantity: None,
            per_person: None,
        }
    }

    fn details(&self) -> ItemDetails {
        ItemDetails::new(self.name.clone(), self.cost, self.image.clone())
    }

    fn venue_item(&self) -> QuantityItem {
        let item = QuantityItem::new(self.details());
        match self.max_quantity {
            Some(cap) => item.with_cap(cap),
            None => item,
        }
    }

    fn addon_item(&self) -> QuantityItem {
        if self.max_quantity.is_some() {
            warn!(name = %self.name, "Ignoring max_quantity on add-on");
        }
        QuantityItem::new(self.details())
    }

    fn meal_item(&self) -> MealItem {
        MealItem::new(self.details(), self.per_person.unwrap_or(true))
    }
}

/// Seed lists for the three catalogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct CatalogSeed {
    #[serde(default)]
    pub venue: Vec<SeedItem>,
    #[serde(default)]
    pub addons: Vec<SeedItem>,
    #[serde(default)]
    pub meals: Vec<SeedItem>,
}

impl CatalogSeed {
    /// Built-in conference catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            venue: vec![
                SeedItem::new(
                    "Conference Room (Capacity:15)",
                    3500.0,
                    "venue/conference-room.jpg",
                ),
                SeedItem::new(super::AUDITORIUM_HALL, 5500.0, "venue/auditorium-hall.jpg"),
                SeedItem::new(
                    "Presentation Room (Capacity:50)",
                    700.0,
                    "venue/presentation-room.jpg",
                ),
                SeedItem::new(
                    "Large Meeting Room (Capacity:10)",
                    900.0,
                    "venue/large-meeting-room.jpg",
                ),
                SeedItem::new(
                    "Small Meeting Room (Capacity:5)",
                    1100.0,
                    "venue/small-meeting-room.jpg",
                ),
            ],
            addons: vec![
                SeedItem::new("Projectors", 200.0, "addons/projector.jpg"),
                SeedItem::new("Speakers", 35.0, "addons/speaker.jpg"),
                SeedItem::new("Microphones", 45.0, "addons/microphone.jpg"),
                SeedItem::new("Whiteboards", 80.0, "addons/whiteboard.jpg"),
                SeedItem::new("Signage", 80.0, "addons/signage.jpg"),
            ],
            meals: vec![
                SeedItem::new("Breakfast", 50.0, ""),
                SeedItem::new("High Tea", 25.0, ""),
                SeedItem::new("Lunch", 65.0, ""),
                SeedItem::new("Dinner", 70.0, ""),
            ],
        }
    }

    /// Returns the entries of one section.
    #[must_use]
    pub fn section(&self, section: Section) -> &[SeedItem] {
        match section {
            Section::Venue => &self.venue,
            Section::Addons => &self.addons,
            Section::Meals => &self.meals,
        }
    }

    /// Checks names, costs and venue name uniqueness.
    ///
    /// # Errors
    /// Returns the first problem found, in section order.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for section in Section::ALL {
            let items = self.section(section);
            if items.is_empty() {
                return Err(CatalogError::EmptySection { section });
            }

            for (index, item) in items.iter().enumerate() {
                if item.name.trim().is_empty() {
                    return Err(CatalogError::EmptyName { section, index });
                }
                if !item.cost.is_finite() || item.cost.is_sign_negative() {
                    return Err(CatalogError::InvalidCost {
                        section,
                        name: item.name.clone(),
                        cost: item.cost,
                    });
                }
            }
        }

        let mut seen = HashSet::new();
        for item in &self.venue {
            if !seen.insert(item.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    section: Section::Venue,
                    name: item.name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Fresh venue store with nothing booked.
    #[must_use]
    pub fn venue_catalog(&self) -> VenueCatalog {
        QuantityCatalog::venue(self.venue.iter().map(SeedItem::venue_item).collect())
    }

    /// Fresh add-on store with nothing booked.
    #[must_use]
    pub fn addon_catalog(&self) -> AddonCatalog {
        QuantityCatalog::addons(self.addons.iter().map(SeedItem::addon_item).collect())
    }

    /// Fresh meal store with nothing selected.
    #[must_use]
    pub fn meal_catalog(&self) -> MealCatalog {
        MealCatalog::new(self.meals.iter().map(SeedItem::meal_item).collect())
    }
}

impl Default for CatalogSeed {
    fn default() -> Self {
        Self::builtin()
    }
}
