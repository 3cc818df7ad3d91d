//! Reusable widgets.

mod cart_table;
mod footer_bar;
mod header_bar;
mod meal_panel;
mod quantity_panel;
mod status_bar;

pub use cart_table::CartTable;
pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use meal_panel::MealPanel;
pub use quantity_panel::QuantityPanel;
pub use status_bar::{StatusBar, StatusLevel};

/// Flattens a rendered buffer into newline separated rows.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
