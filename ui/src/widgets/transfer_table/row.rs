//! Row rendering for the transfers table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use payops_business::{ColumnDescriptor, Transfer};

use super::cells::{render_actions_cell, render_cell};

/// Result of rendering a transfer row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransferRowResult {
    pub view_details: bool,
}

/// Renders one transfer: a cell per visible column, then the actions cell.
#[inline]
pub fn render_transfer_row(
    row: &mut TableRow<'_, '_>,
    columns: &[&ColumnDescriptor],
    transfer: &Transfer,
) -> TransferRowResult {
    let mut result = TransferRowResult::default();

    for column in columns {
        row.col(|ui| {
            if render_cell(ui, column.key, transfer) {
                result.view_details = true;
            }
            draw_cell_bottom_border(ui);
        });
    }

    row.col(|ui| {
        if render_actions_cell(ui) {
            result.view_details = true;
        }
        draw_cell_bottom_border(ui);
    });

    result
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
