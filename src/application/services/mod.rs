//! Application services.

mod planner_session;
mod view_orchestrator;

pub use planner_session::{Intent, PlannerSession};
pub use view_orchestrator::ViewOrchestrator;
