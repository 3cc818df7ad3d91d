//! Application layer with session services, use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Session state and view orchestration.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::PlanSummary;
pub use services::{Intent, PlannerSession, ViewOrchestrator};
pub use use_cases::StartSessionUseCase;
