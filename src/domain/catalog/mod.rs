//! Catalog stores and their seed data.

mod meal_catalog;
mod quantity_catalog;
mod seed;

pub use meal_catalog::MealCatalog;
pub use quantity_catalog::{
    AUDITORIUM_CAP, AUDITORIUM_HALL, AddonCatalog, QuantityCatalog, VENUE_ROOM_CAP, VenueCatalog,
    venue_cap,
};
pub use seed::{CatalogSeed, SeedItem};
