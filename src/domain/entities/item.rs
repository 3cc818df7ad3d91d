//! Catalog line items.

/// Fields shared by every catalog item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetails {
    name: String,
    cost: f64,
    image_ref: String,
}

impl ItemDetails {
    /// Creates item details.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: f64, image_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cost,
            image_ref: image_ref.into(),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit cost.
    #[must_use]
    pub const fn cost(&self) -> f64 {
        self.cost
    }

    /// Returns the opaque image reference.
    #[must_use]
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }
}

/// Item selected by count (venue rooms, add-on equipment).
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityItem {
    details: ItemDetails,
    quantity: u32,
    max_quantity: Option<u32>,
}

#[allow(missing_docs)]
impl QuantityItem {
    /// Creates an unselected item without a cap.
    #[must_use]
    pub const fn new(details: ItemDetails) -> Self {
        Self {
            details,
            quantity: 0,
            max_quantity: None,
        }
    }

    /// Sets the upper bound on quantity.
    #[must_use]
    pub const fn with_cap(mut self, cap: u32) -> Self {
        self.max_quantity = Some(cap);
        self
    }

    /// Removes the upper bound on quantity.
    #[must_use]
    pub const fn uncapped(mut self) -> Self {
        self.max_quantity = None;
        self
    }

    #[must_use]
    pub const fn details(&self) -> &ItemDetails {
        &self.details
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.details.name()
    }

    #[must_use]
    pub const fn cost(&self) -> f64 {
        self.details.cost()
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the cap, `None` when unbounded.
    #[must_use]
    pub const fn max_quantity(&self) -> Option<u32> {
        self.max_quantity
    }

    /// Returns whether one more unit fits under the cap.
    #[must_use]
    pub const fn can_increment(&self) -> bool {
        match self.max_quantity {
            Some(cap) => self.quantity < cap,
            None => self.quantity < u32::MAX,
        }
    }

    #[must_use]
    pub const fn can_decrement(&self) -> bool {
        self.quantity > 0
    }

    /// Units left before the cap is reached, `None` when unbounded.
    #[must_use]
    pub const fn remaining(&self) -> Option<u32> {
        match self.max_quantity {
            Some(cap) => Some(cap.saturating_sub(self.quantity)),
            None => None,
        }
    }

    /// Cost of the selected units.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.cost() * f64::from(self.quantity)
    }

    pub(crate) fn increment(&mut self) -> bool {
        if !self.can_increment() {
            return false;
        }
        self.quantity += 1;
        true
    }

    pub(crate) fn decrement(&mut self) -> bool {
        if !self.can_decrement() {
            return false;
        }
        self.quantity -= 1;
        true
    }
}

/// Item selected by checkbox (meals).
#[derive(Debug, Clone, PartialEq)]
pub struct MealItem {
    details: ItemDetails,
    selected: bool,
    per_person: bool,
    people_snapshot: Option<u32>,
}

#[allow(missing_docs)]
impl MealItem {
    /// Creates an unselected meal.
    #[must_use]
    pub const fn new(details: ItemDetails, per_person: bool) -> Self {
        Self {
            details,
            selected: false,
            per_person,
            people_snapshot: None,
        }
    }

    #[must_use]
    pub const fn details(&self) -> &ItemDetails {
        &self.details
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.details.name()
    }

    #[must_use]
    pub const fn cost(&self) -> f64 {
        self.details.cost()
    }

    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Returns whether cost is charged per attendee.
    #[must_use]
    pub const fn is_per_person(&self) -> bool {
        self.per_person
    }

    /// People count recorded at the last toggle of a per-person meal.
    ///
    /// `None` means the meal follows the session head count.
    #[must_use]
    pub const fn people_snapshot(&self) -> Option<u32> {
        self.people_snapshot
    }

    pub(crate) fn toggle(&mut self, people_at_toggle: Option<u32>) {
        let was_selected = self.selected;
        self.selected = !was_selected;

        if !self.per_person {
            return;
        }

        self.people_snapshot = if was_selected {
            Some(0)
        } else {
            people_at_toggle
        };
    }
}

/// Catalog item of either kind.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogItem {
    /// Counted item.
    Quantity(QuantityItem),
    /// Checkbox meal.
    Meal(MealItem),
}

#[allow(missing_docs)]
impl CatalogItem {
    /// Returns the shared details.
    #[must_use]
    pub const fn details(&self) -> &ItemDetails {
        match self {
            Self::Quantity(item) => item.details(),
            Self::Meal(item) => item.details(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.details().name()
    }

    #[must_use]
    pub const fn cost(&self) -> f64 {
        self.details().cost()
    }

    /// Returns whether the item contributes to the cart.
    #[must_use]
    pub const fn is_chosen(&self) -> bool {
        match self {
            Self::Quantity(item) => item.quantity() > 0,
            Self::Meal(item) => item.is_selected(),
        }
    }
}

impl From<QuantityItem> for CatalogItem {
    fn from(item: QuantityItem) -> Self {
        Self::Quantity(item)
    }
}

impl From<MealItem> for CatalogItem {
    fn from(item: MealItem) -> Self {
        Self::Meal(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(cap: u32) -> QuantityItem {
        QuantityItem::new(ItemDetails::new("Room", 100.0, "room.jpg")).with_cap(cap)
    }

    #[test]
    fn test_increment_stops_at_cap() {
        let mut item = room(2);
        assert!(item.increment());
        assert!(item.increment());
        assert!(!item.increment());
        assert_eq!(item.quantity(), 2);
        assert_eq!(item.remaining(), Some(0));
    }

    #[test]
    fn test_decrement_floor() {
        let mut item = room(2);
        assert!(!item.decrement());
        assert_eq!(item.quantity(), 0);
    }

    #[test]
    fn test_uncapped_item_has_no_remaining() {
        let item = QuantityItem::new(ItemDetails::new("Speakers", 35.0, ""));
        assert_eq!(item.remaining(), None);
        assert!(item.can_increment());
    }

    #[test]
    fn test_subtotal() {
        let mut item = room(5);
        item.increment();
        item.increment();
        assert!((item.subtotal() - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_meal_toggle_off_records_zero_snapshot() {
        let mut meal = MealItem::new(ItemDetails::new("Lunch", 65.0, ""), true);
        meal.toggle(None);
        assert!(meal.is_selected());
        assert_eq!(meal.people_snapshot(), None);

        meal.toggle(Some(12));
        assert!(!meal.is_selected());
        assert_eq!(meal.people_snapshot(), Some(0));
    }

    #[test]
    fn test_meal_toggle_on_with_supplied_snapshot() {
        let mut meal = MealItem::new(ItemDetails::new("Lunch", 65.0, ""), true);
        meal.toggle(Some(7));
        assert_eq!(meal.people_snapshot(), Some(7));
    }

    #[test]
    fn test_flat_meal_never_snapshots() {
        let mut meal = MealItem::new(ItemDetails::new("Cake", 40.0, ""), false);
        meal.toggle(Some(3));
        meal.toggle(Some(3));
        assert_eq!(meal.people_snapshot(), None);
        assert!(!meal.is_selected());
    }

    #[test]
    fn test_catalog_item_is_chosen() {
        let mut item = room(3);
        assert!(!CatalogItem::from(item.clone()).is_chosen());
        item.increment();
        assert!(CatalogItem::from(item).is_chosen());
    }
}
