//! Catalog seed validation errors.

use thiserror::Error;

use crate::domain::entities::Section;

/// Reasons a catalog seed is rejected.
#[derive(Debug, Clone, Error, PartialEq)]
#[allow(missing_docs)]
pub enum CatalogError {
    #[error("{section} catalog has no items")]
    EmptySection { section: Section },

    #[error("{section} item #{index} has an empty name")]
    EmptyName { section: Section, index: usize },

    #[error("{section} item '{name}' has invalid cost {cost}")]
    InvalidCost {
        section: Section,
        name: String,
        cost: f64,
    },

    #[error("{section} item '{name}' appears more than once")]
    DuplicateName { section: Section, name: String },
}

impl CatalogError {
    /// Returns the section the error belongs to.
    #[must_use]
    pub const fn section(&self) -> Section {
        match self {
            Self::EmptySection { section }
            | Self::EmptyName { section, .. }
            | Self::InvalidCost { section, .. }
            | Self::DuplicateName { section, .. } => *section,
        }
    }
}
