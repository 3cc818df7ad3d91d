//! Domain services.

mod aggregator;

pub use aggregator::Aggregator;
