//! Conference Planner - a terminal expense planner for conference events.
//!
//! This crate lets an organizer pick venue rooms, add-on equipment and meals
//! from fixed catalogs and derives per-section totals, an itemized cart and
//! the grand total for the event.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the planning session, use cases and DTOs.
pub mod application;
/// Domain layer containing catalogs, entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and seed adapters.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "conference-planner";
