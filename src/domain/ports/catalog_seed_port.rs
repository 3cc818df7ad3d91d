//! Catalog seed source port.

use crate::domain::catalog::CatalogSeed;
use crate::domain::errors::CatalogError;

/// Source of the catalog lists loaded at start-up.
pub trait CatalogSeedPort {
    /// Loads and validates the seed.
    ///
    /// # Errors
    /// Returns `CatalogError` when the seed fails validation.
    fn load_seed(&self) -> Result<CatalogSeed, CatalogError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Seed port returning a fixed result.
    pub struct MockSeedPort {
        result: Result<CatalogSeed, CatalogError>,
    }

    impl MockSeedPort {
        pub fn new(seed: CatalogSeed) -> Self {
            Self { result: Ok(seed) }
        }

        pub fn failing(error: CatalogError) -> Self {
            Self { result: Err(error) }
        }
    }

    impl CatalogSeedPort for MockSeedPort {
        fn load_seed(&self) -> Result<CatalogSeed, CatalogError> {
            self.result.clone()
        }
    }
}
