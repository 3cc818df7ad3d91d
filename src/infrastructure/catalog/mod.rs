//! Catalog seed sources.

use tracing::debug;

use crate::domain::catalog::CatalogSeed;
use crate::domain::errors::CatalogError;
use crate::domain::ports::CatalogSeedPort;

/// Seed from the `[catalog]` table of the config file, or the built-in one.
#[derive(Debug, Clone, Default)]
pub struct ConfigCatalogSource {
    configured: Option<CatalogSeed>,
}

impl ConfigCatalogSource {
    /// Wraps the `[catalog]` table, if the config has one.
    #[must_use]
    pub const fn new(configured: Option<CatalogSeed>) -> Self {
        Self { configured }
    }
}

impl CatalogSeedPort for ConfigCatalogSource {
    fn load_seed(&self) -> Result<CatalogSeed, CatalogError> {
        let Some(seed) = &self.configured else {
            debug!("Using built-in catalog");
            return Ok(CatalogSeed::builtin());
        };

        debug!("Using catalog from config file");
        seed.validate()?;
        Ok(seed.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::SeedItem;
    use crate::domain::entities::Section;

    #[test]
    fn test_missing_table_uses_builtin() {
        let seed = ConfigCatalogSource::default().load_seed().unwrap();
        assert_eq!(seed, CatalogSeed::builtin());
    }

    #[test]
    fn test_configured_seed_is_validated() {
        let mut configured = CatalogSeed::builtin();
        configured.addons = vec![SeedItem::new("Projectors", -200.0, "")];

        let result = ConfigCatalogSource::new(Some(configured)).load_seed();
        assert!(matches!(
            result,
            Err(CatalogError::InvalidCost {
                section: Section::Addons,
                ..
            })
        ));
    }

    #[test]
    fn test_configured_seed_is_returned() {
        let mut configured = CatalogSeed::builtin();
        configured.meals = vec![SeedItem::new("Coffee", 6.0, "")];

        let seed = ConfigCatalogSource::new(Some(configured.clone()))
            .load_seed()
            .unwrap();
        assert_eq!(seed, configured);
    }
}
