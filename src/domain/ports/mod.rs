mod catalog_seed_port;

pub use catalog_seed_port::CatalogSeedPort;

#[cfg(test)]
pub mod mocks {
    pub use super::catalog_seed_port::mock::MockSeedPort;
}
