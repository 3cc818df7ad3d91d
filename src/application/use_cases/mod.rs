//! Use case implementations.

mod start_session_use_case;

pub use start_session_use_case::StartSessionUseCase;
