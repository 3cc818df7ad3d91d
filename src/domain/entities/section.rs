//! Planner sections.

use std::fmt;

/// One of the three selectable catalog sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// Venue rooms.
    #[default]
    Venue,
    /// Add-on equipment.
    Addons,
    /// Meals.
    Meals,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Self; 3] = [Self::Venue, Self::Addons, Self::Meals];

    /// Cart tag for lines from this section.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Venue => "venue",
            Self::Addons => "av",
            Self::Meals => "meals",
        }
    }

    /// Navigation anchor of the section.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Venue => "#venue",
            Self::Addons => "#addons",
            Self::Meals => "#meals",
        }
    }

    /// Parses a navigation anchor.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    /// Heading shown above the section.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Venue => "Venue Room Selection",
            Self::Addons => "Add-ons Selection",
            Self::Meals => "Meals Selection",
        }
    }

    /// Short label used in navigation links.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Venue => "Venue",
            Self::Addons => "Add-ons",
            Self::Meals => "Meals",
        }
    }

    /// Next section, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Venue => Self::Addons,
            Self::Addons => Self::Meals,
            Self::Meals => Self::Venue,
        }
    }

    /// Previous section, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Venue => Self::Meals,
            Self::Addons => Self::Venue,
            Self::Meals => Self::Addons,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("#venue", Some(Section::Venue) ; "venue")]
    #[test_case("#addons", Some(Section::Addons) ; "addons")]
    #[test_case("#meals", Some(Section::Meals) ; "meals")]
    #[test_case("#av", None ; "cart_tag_is_not_an_anchor")]
    #[test_case("venue", None ; "missing_hash")]
    fn test_from_anchor(anchor: &str, expected: Option<Section>) {
        assert_eq!(Section::from_anchor(anchor), expected);
    }

    #[test]
    fn test_next_and_previous_cycle() {
        for section in Section::ALL {
            assert_eq!(section.next().previous(), section);
        }
        assert_eq!(Section::Meals.next(), Section::Venue);
    }
}
