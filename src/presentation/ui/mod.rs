//! UI screens.

mod app;
mod selection_screen;
mod summary_screen;
/// Text layout helpers.
pub mod utils;

pub use app::App;
pub use selection_screen::{Focus, SelectionScreen};
pub use summary_screen::SummaryScreen;
