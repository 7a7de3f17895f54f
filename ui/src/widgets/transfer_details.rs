//! Details window for a single transfer.

use egui::{Grid, RichText, Window};
use payops_business::{Transfer, format_amount, format_fee};

use super::transfer_table::cells::{render_outline_tag, render_tag};

pub const CLOSE_LABEL: &str = "Close details";

/// Shows the details window while `selected` holds a transfer.
///
/// Closing the window (title bar or button) clears `selected`.
pub fn transfer_details(ctx: &egui::Context, selected: &mut Option<Transfer>) {
    let Some(transfer) = selected.as_ref() else {
        return;
    };

    let mut open = true;
    let mut close_clicked = false;

    Window::new(format!("Transfer {}", transfer.id))
        .id(egui::Id::new("transfer_details"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            Grid::new("transfer_details_grid")
                .num_columns(2)
                .spacing([24.0, 6.0])
                .striped(true)
                .show(ui, |ui| {
                    detail_row(ui, "Transaction ID", &transfer.id);
                    detail_row(ui, "Beneficiary", &transfer.beneficiary_name);
                    detail_row(ui, "Beneficiary ID", &transfer.beneficiary_id);
                    detail_row(
                        ui,
                        "Amount",
                        &format_amount(transfer.amount, &transfer.currency),
                    );
                    detail_row(ui, "Currency", &transfer.currency);

                    ui.label(RichText::new("Type").weak());
                    render_tag(ui, transfer.kind.as_str(), transfer.kind.tone());
                    ui.end_row();

                    ui.label(RichText::new("Status").weak());
                    render_tag(ui, transfer.status.as_str(), transfer.status.tone());
                    ui.end_row();

                    ui.label(RichText::new("Method").weak());
                    render_outline_tag(ui, transfer.method.as_str());
                    ui.end_row();

                    detail_row(ui, "Fee", &format_fee(transfer.fee));
                    detail_row(ui, "Created", &transfer.created_at_display());
                });

            ui.add_space(8.0);
            if ui.button(CLOSE_LABEL).clicked() {
                close_clicked = true;
            }
        });

    if !open || close_clicked {
        log::debug!("Closing transfer details for {}", transfer.id);
        *selected = None;
    }
}

fn detail_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.label(RichText::new(label).weak());
    ui.label(value);
    ui.end_row();
}
