//! Column settings for the transfers table.
//!
//! The settings never mutate the column store themselves. Every interaction
//! produces a complete replacement set that the table then applies.

use egui::{Frame, Ui};
use payops_business::{ColumnDescriptor, MoveDirection, TransferColumns};

pub const SETTINGS_TOGGLE_LABEL: &str = "⚙ Columns";
pub const RESET_LABEL: &str = "Reset";

/// Renders one line per column with a visibility checkbox and move buttons.
///
/// Returns the replacement set if the user changed anything.
pub fn column_settings(ui: &mut Ui, columns: &TransferColumns) -> Option<Vec<ColumnDescriptor>> {
    let mut replacement = None;

    Frame::group(ui.style()).show(ui, |ui| {
        ui.strong("Visible columns");
        ui.add_space(4.0);

        for column in columns.ordered() {
            ui.horizontal(|ui| {
                let mut visible = column.visible;
                if ui.checkbox(&mut visible, &column.label).changed() {
                    replacement = Some(columns.with_visibility(column.key, visible));
                }
                if ui.small_button("⬆").on_hover_text("Move left").clicked() {
                    replacement = Some(columns.moved(column.key, MoveDirection::Up));
                }
                if ui.small_button("⬇").on_hover_text("Move right").clicked() {
                    replacement = Some(columns.moved(column.key, MoveDirection::Down));
                }
            });
        }

        ui.add_space(4.0);
        if ui.button(RESET_LABEL).clicked() {
            replacement = Some(TransferColumns::default_columns());
        }
    });

    replacement
}
