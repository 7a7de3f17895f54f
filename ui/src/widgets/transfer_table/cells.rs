//! Cell rendering functions for the transfers table.
//!
//! Each function renders one column kind. Functions for interactive cells
//! return `true` when the user asked for the transfer's details.

use egui::{Frame, Margin, RichText, Stroke, Ui};
use payops_business::{ColumnKey, Tone, Transfer, format_amount, format_fee};

use crate::utils::colors::tone_colors;

/// Label of the per-row details button in the actions column.
pub const VIEW_DETAILS_LABEL: &str = "👁 View";

/// Renders the cell for `key`. Returns `true` if details were requested.
#[inline]
pub fn render_cell(ui: &mut Ui, key: ColumnKey, transfer: &Transfer) -> bool {
    match key {
        ColumnKey::Id => return render_id_cell(ui, &transfer.id),
        ColumnKey::BeneficiaryName => {
            render_beneficiary_cell(ui, &transfer.beneficiary_name, &transfer.beneficiary_id);
        }
        ColumnKey::Amount => render_amount_cell(ui, transfer.amount, &transfer.currency),
        ColumnKey::Currency => {
            ui.label(&transfer.currency);
        }
        ColumnKey::Type => render_tag(ui, transfer.kind.as_str(), transfer.kind.tone()),
        ColumnKey::Status => render_tag(ui, transfer.status.as_str(), transfer.status.tone()),
        ColumnKey::Method => render_outline_tag(ui, transfer.method.as_str()),
        ColumnKey::Fee => render_fee_cell(ui, transfer.fee),
        ColumnKey::Unknown => {}
    }
    false
}

/// Renders the transaction id as a link.
#[inline]
pub fn render_id_cell(ui: &mut Ui, id: &str) -> bool {
    ui.link(RichText::new(id).monospace())
        .on_hover_text("View details")
        .clicked()
}

/// Renders the beneficiary name with the beneficiary id beneath it.
#[inline]
pub fn render_beneficiary_cell(ui: &mut Ui, name: &str, beneficiary_id: &str) {
    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = 2.0;
        ui.label(RichText::new(name).strong());
        ui.label(RichText::new(beneficiary_id).small().weak());
    });
}

#[inline]
pub fn render_amount_cell(ui: &mut Ui, amount: f64, currency: &str) {
    ui.label(RichText::new(format_amount(amount, currency)).strong());
}

#[inline]
pub fn render_fee_cell(ui: &mut Ui, fee: f64) {
    ui.label(RichText::new(format_fee(fee)).small().weak());
}

/// Renders a filled, rounded tag colored by `tone`.
pub fn render_tag(ui: &mut Ui, text: &str, tone: Tone) {
    let (fill, text_color) = tone_colors(tone, ui.visuals().dark_mode);
    Frame::NONE
        .fill(fill)
        .corner_radius(6.0)
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().strong().color(text_color));
        });
}

/// Renders a tag with only an outline.
pub fn render_outline_tag(ui: &mut Ui, text: &str) {
    let stroke_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    Frame::NONE
        .stroke(Stroke::new(1.0, stroke_color))
        .corner_radius(6.0)
        .inner_margin(Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small());
        });
}

/// Renders the actions cell. Returns `true` if the view button was clicked.
#[inline]
pub fn render_actions_cell(ui: &mut Ui) -> bool {
    ui.button(VIEW_DETAILS_LABEL)
        .on_hover_text("View details")
        .clicked()
}
