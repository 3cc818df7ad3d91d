//! Display mode and head count.

use tracing::debug;

use crate::domain::entities::{PeopleCount, Section, ViewMode};

/// Holds which screen is shown and the session head count.
///
/// Two states: `Selecting` (initial) and `Summarizing`. `toggle_summary`
/// flips between them; `navigate` only ever leads back to `Selecting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewOrchestrator {
    mode: ViewMode,
    people: PeopleCount,
}

#[allow(missing_docs)]
impl ViewOrchestrator {
    /// Starts in the selection view with the given head count.
    #[must_use]
    pub const fn new(people: PeopleCount) -> Self {
        Self {
            mode: ViewMode::Selecting,
            people,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    #[must_use]
    pub const fn show_summary(&self) -> bool {
        self.mode.is_summary()
    }

    #[must_use]
    pub const fn people(&self) -> PeopleCount {
        self.people
    }

    /// Flips between selection and summary.
    pub fn toggle_summary(&mut self) {
        self.mode = self.mode.flipped();
        debug!(mode = ?self.mode, "Toggled summary");
    }

    /// Returns to the selection view so `section` is reachable.
    ///
    /// Returns whether the mode changed.
    pub fn navigate(&mut self, section: Section) -> bool {
        if !self.mode.is_summary() {
            return false;
        }
        self.mode = ViewMode::Selecting;
        debug!(anchor = section.anchor(), "Left summary to reach section");
        true
    }

    /// Navigates to a section anchor such as `#venue`.
    ///
    /// Unknown anchors are ignored.
    pub fn navigate_anchor(&mut self, anchor: &str) -> bool {
        Section::from_anchor(anchor).is_some_and(|section| self.navigate(section))
    }

    /// Sets the head count, clamping to at least one.
    ///
    /// Returns whether the count changed.
    pub fn set_number_of_people(&mut self, value: i64) -> bool {
        let people = PeopleCount::clamped(value);
        let changed = people != self.people;
        self.people = people;
        changed
    }

    /// Applies text typed into the people field.
    ///
    /// Text that is not an integer leaves the count unchanged.
    pub fn set_people_text(&mut self, input: &str) -> bool {
        match PeopleCount::parse(input) {
            Some(people) => self.set_number_of_people(i64::from(people.get())),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_initial_state() {
        let view = ViewOrchestrator::default();
        assert_eq!(view.mode(), ViewMode::Selecting);
        assert_eq!(view.people(), PeopleCount::MIN);
    }

    #[test]
    fn test_toggle_then_navigate_back() {
        let mut view = ViewOrchestrator::default();
        view.toggle_summary();
        assert_eq!(view.mode(), ViewMode::Summarizing);

        assert!(view.navigate_anchor("#venue"));
        assert_eq!(view.mode(), ViewMode::Selecting);
    }

    #[test]
    fn test_toggle_twice_returns_to_selecting() {
        let mut view = ViewOrchestrator::default();
        view.toggle_summary();
        view.toggle_summary();
        assert_eq!(view.mode(), ViewMode::Selecting);
    }

    #[test_case(Section::Venue ; "venue")]
    #[test_case(Section::Addons ; "addons")]
    #[test_case(Section::Meals ; "meals")]
    fn test_navigate_while_selecting_is_noop(section: Section) {
        let mut view = ViewOrchestrator::default();
        assert!(!view.navigate(section));
        assert_eq!(view.mode(), ViewMode::Selecting);
    }

    #[test]
    fn test_unknown_anchor_keeps_summary() {
        let mut view = ViewOrchestrator::default();
        view.toggle_summary();
        assert!(!view.navigate_anchor("#checkout"));
        assert!(view.show_summary());
    }

    #[test_case(4, 4 ; "regular")]
    #[test_case(0, 1 ; "zero")]
    #[test_case(-3, 1 ; "negative")]
    fn test_set_number_of_people(input: i64, expected: u32) {
        let mut view = ViewOrchestrator::default();
        view.set_number_of_people(input);
        assert_eq!(view.people().get(), expected);
    }

    #[test]
    fn test_set_people_text_ignores_garbage() {
        let mut view = ViewOrchestrator::default();
        assert!(view.set_people_text("12"));
        assert!(!view.set_people_text("twelve"));
        assert_eq!(view.people().get(), 12);
    }
}
