//! Color theme.

mod service;

pub use service::{Theme, shade};
