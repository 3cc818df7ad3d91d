use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Command a key can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Action {
    Quit,
    ToggleSummary,

    // Navigation
    JumpToVenue,
    JumpToAddons,
    JumpToMeals,
    NextSection,
    PreviousSection,
    NavigateUp,
    NavigateDown,

    // Selection
    Increment,
    Decrement,
    ToggleMeal,

    // Head count
    IncreasePeople,
    DecreasePeople,
    EditPeople,
    Cancel,
}

/// Key bound to an action, with its footer label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub visible_in_bar: bool,
}

#[allow(missing_docs)]
impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            visible_in_bar: true,
        }
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }
}
