//! Venue and add-on stores.

use tracing::{debug, warn};

use crate::domain::entities::{QuantityItem, Section};

/// Name of the venue room limited to [`AUDITORIUM_CAP`] units.
pub const AUDITORIUM_HALL: &str = "Auditorium Hall (Capacity:200)";
/// Units of the auditorium available for booking.
pub const AUDITORIUM_CAP: u32 = 3;
/// Cap applied to every other venue room.
pub const VENUE_ROOM_CAP: u32 = 10;

/// Ordered store of counted items for one section.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityCatalog {
    section: Section,
    items: Vec<QuantityItem>,
}

/// Venue rooms, capped per item.
pub type VenueCatalog = QuantityCatalog;
/// Add-on equipment, uncapped.
pub type AddonCatalog = QuantityCatalog;

#[allow(missing_docs)]
impl QuantityCatalog {
    /// Creates the venue store, applying the room caps.
    ///
    /// An item's own cap may only lower the room cap.
    #[must_use]
    pub fn venue(items: Vec<QuantityItem>) -> VenueCatalog {
        let items = items
            .into_iter()
            .map(|item| {
                let room_cap = venue_cap(item.name());
                let cap = item.max_quantity().map_or(room_cap, |own| own.min(room_cap));
                item.with_cap(cap)
            })
            .collect();

        Self {
            section: Section::Venue,
            items,
        }
    }

    /// Creates the add-on store. Add-ons are never capped.
    #[must_use]
    pub fn addons(items: Vec<QuantityItem>) -> AddonCatalog {
        Self {
            section: Section::Addons,
            items: items.into_iter().map(QuantityItem::uncapped).collect(),
        }
    }

    #[must_use]
    pub const fn section(&self) -> Section {
        self.section
    }

    #[must_use]
    pub fn items(&self) -> &[QuantityItem] {
        &self.items
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&QuantityItem> {
        self.items.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one unit unless the item is at its cap.
    ///
    /// Returns whether the quantity changed.
    pub fn increment(&mut self, index: usize) -> bool {
        let section = self.section;
        let Some(item) = self.item_mut(index) else {
            return false;
        };
        let changed = item.increment();
        debug!(%section, index, quantity = item.quantity(), changed, "Increment");
        changed
    }

    /// Removes one unit unless the quantity is zero.
    ///
    /// Returns whether the quantity changed.
    pub fn decrement(&mut self, index: usize) -> bool {
        let section = self.section;
        let Some(item) = self.item_mut(index) else {
            return false;
        };
        let changed = item.decrement();
        debug!(%section, index, quantity = item.quantity(), changed, "Decrement");
        changed
    }

    #[must_use]
    pub fn can_increment(&self, index: usize) -> bool {
        self.get(index).is_some_and(QuantityItem::can_increment)
    }

    #[must_use]
    pub fn can_decrement(&self, index: usize) -> bool {
        self.get(index).is_some_and(QuantityItem::can_decrement)
    }

    /// Units left under the item's cap.
    #[must_use]
    pub fn remaining(&self, index: usize) -> Option<u32> {
        self.get(index).and_then(QuantityItem::remaining)
    }

    /// Σ cost × quantity.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(QuantityItem::subtotal).sum()
    }

    fn item_mut(&mut self, index: usize) -> Option<&mut QuantityItem> {
        let len = self.items.len();
        let item = self.items.get_mut(index);
        if item.is_none() {
            warn!(section = %self.section, index, len, "Ignoring out-of-range item index");
        }
        item
    }
}

/// Cap for a venue room by name.
#[must_use]
pub fn venue_cap(name: &str) -> u32 {
    if name == AUDITORIUM_HALL {
        AUDITORIUM_CAP
    } else {
        VENUE_ROOM_CAP
    }
}
