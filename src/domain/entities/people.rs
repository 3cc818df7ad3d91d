//! Attendee head count.

use std::fmt;

/// Number of attendees, never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeopleCount(u32);

impl PeopleCount {
    /// Smallest allowed head count.
    pub const MIN: Self = Self(1);

    /// Creates a count, clamping anything below one.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let value = value.clamp(1, i64::from(u32::MAX));
        Self(u32::try_from(value).unwrap_or(u32::MAX))
    }

    /// Parses text typed into the people field.
    ///
    /// Returns `None` for text that is not an integer.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<i64>().ok().map(Self::clamped)
    }

    /// Raw head count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Count as a cost multiplier.
    #[must_use]
    pub fn factor(self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for PeopleCount {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for PeopleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
