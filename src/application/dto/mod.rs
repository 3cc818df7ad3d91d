//! Data transfer objects.

mod plan_summary;

pub use plan_summary::PlanSummary;
