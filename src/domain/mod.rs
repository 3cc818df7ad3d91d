//! Domain layer with catalog entities, stores and derivation services.

/// Catalog stores and seed data.
pub mod catalog;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;
/// Derivation services.
pub mod services;

pub use catalog::{AddonCatalog, CatalogSeed, MealCatalog, VenueCatalog};
pub use entities::{CartLine, PeopleCount, Section, ViewMode};
pub use errors::CatalogError;
pub use ports::CatalogSeedPort;
pub use services::Aggregator;
