//! Table header rendering for the transfers table.

use egui::Ui;
use egui_extras::TableRow;
use payops_business::ColumnDescriptor;

/// Label of the fixed trailing column.
pub const ACTIONS_LABEL: &str = "Actions";

/// Header labels in render order: the visible columns followed by "Actions".
pub fn header_labels<'a>(columns: &[&'a ColumnDescriptor]) -> Vec<&'a str> {
    columns
        .iter()
        .map(|column| column.label.as_str())
        .chain(std::iter::once(ACTIONS_LABEL))
        .collect()
}

/// Renders the table header with bold labels.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, columns: &[&ColumnDescriptor]) {
    for label in header_labels(columns) {
        header.col(|ui| {
            render_header_cell(ui, label);
        });
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.strong(label);
}
