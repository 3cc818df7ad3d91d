//! Derived cart lines and totals.

use super::Section;

/// How a cart line's quantity is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineQuantity {
    /// Number of units.
    Units(u32),
    /// Number of attendees.
    People(u32),
}

impl LineQuantity {
    /// Multiplier applied to the unit cost.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Units(n) | Self::People(n) => f64::from(n),
        }
    }

    /// Text for the quantity column.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Units(n) => n.to_string(),
            Self::People(n) => format!("For {n} people"),
        }
    }
}

/// One line of the derived cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Item name.
    pub name: String,
    /// Cost of one unit or one person.
    pub unit_cost: f64,
    /// Units booked, or people fed.
    pub quantity: LineQuantity,
    /// `unit_cost` times the quantity.
    pub subtotal: f64,
    /// Section the item came from.
    pub section: Section,
    /// Set for meals charged per attendee.
    pub per_person: bool,
}

impl CartLine {
    /// Creates a line and computes its subtotal.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        unit_cost: f64,
        quantity: LineQuantity,
        section: Section,
    ) -> Self {
        Self {
            name: name.into(),
            unit_cost,
            quantity,
            subtotal: unit_cost * quantity.factor(),
            section,
            per_person: false,
        }
    }

    /// Marks the line as charged per attendee.
    #[must_use]
    pub const fn per_person(mut self, per_person: bool) -> Self {
        self.per_person = per_person;
        self
    }
}

/// Per-section totals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[allow(missing_docs)]
pub struct SectionTotals {
    pub venue: f64,
    pub addons: f64,
    pub meals: f64,
}

impl SectionTotals {
    /// Returns the total of one section.
    #[must_use]
    pub const fn get(&self, section: Section) -> f64 {
        match section {
            Section::Venue => self.venue,
            Section::Addons => self.addons,
            Section::Meals => self.meals,
        }
    }

    /// Sum of all sections.
    #[must_use]
    pub fn grand_total(&self) -> f64 {
        self.venue + self.addons + self.meals
    }
}

/// Formats a cost the way it is shown next to items, e.g. `$3500`.
#[must_use]
pub fn format_cost(cost: f64) -> String {
    format!("${cost}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_people_line_label_and_subtotal() {
        let line = CartLine::new("Lunch", 20.0, LineQuantity::People(4), Section::Meals);
        assert_eq!(line.quantity.label(), "For 4 people");
        assert!((line.subtotal - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_format_cost_is_literal() {
        assert_eq!(format_cost(3500.0), "$3500");
        assert_eq!(format_cost(12.5), "$12.5");
        assert_eq!(format_cost(0.0), "$0");
    }

    #[test]
    fn test_grand_total() {
        let totals = SectionTotals {
            venue: 5500.0,
            addons: 200.0,
            meals: 80.0,
        };
        assert!((totals.grand_total() - 5780.0).abs() < f64::EPSILON);
        assert!((totals.get(Section::Addons) - 200.0).abs() < f64::EPSILON);
    }
}
