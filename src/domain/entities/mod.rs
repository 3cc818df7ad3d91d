//! Domain entity definitions.

mod cart;
mod item;
mod people;
mod section;
mod view_mode;

pub use cart::{CartLine, LineQuantity, SectionTotals, format_cost};
pub use item::{CatalogItem, ItemDetails, MealItem, QuantityItem};
pub use people::PeopleCount;
pub use section::Section;
pub use view_mode::ViewMode;
