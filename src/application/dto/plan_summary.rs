//! Summary view data.

use crate::domain::entities::{CartLine, PeopleCount, Section, SectionTotals};

/// Snapshot of the cart and totals shown in the summary view.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct PlanSummary {
    pub lines: Vec<CartLine>,
    pub totals: SectionTotals,
    pub grand_total: f64,
    pub people: PeopleCount,
}

impl PlanSummary {
    /// Bundles the cart with its totals; the grand total is derived.
    #[must_use]
    pub fn new(lines: Vec<CartLine>, totals: SectionTotals, people: PeopleCount) -> Self {
        Self {
            lines,
            grand_total: totals.grand_total(),
            totals,
            people,
        }
    }

    /// Returns whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines belonging to one section.
    pub fn lines_in(&self, section: Section) -> impl Iterator<Item = &CartLine> {
        self.lines.iter().filter(move |line| line.section == section)
    }
}
