/// Which screen the planner shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Catalog selection panels.
    #[default]
    Selecting,
    /// Cost breakdown.
    Summarizing,
}

impl ViewMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Selecting => Self::Summarizing,
            Self::Summarizing => Self::Selecting,
        }
    }

    /// Returns whether the summary is showing.
    #[must_use]
    pub const fn is_summary(self) -> bool {
        matches!(self, Self::Summarizing)
    }
}
