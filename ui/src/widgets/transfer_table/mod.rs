//! Transfers table widget.
//!
//! The table renders one page of transfers handed in by its host and owns
//! only its column configuration. Everything else the user does is reported
//! back as [`TransferTableEvent`]s:
//! - `columns`: Column widths
//! - `header`: Table header rendering
//! - `row`: Individual row rendering with cells
//! - `cells`: Cell rendering functions for each column type
//! - `pagination`: Pagination strip and page size selector
//! - `settings`: Column visibility and order settings

pub(crate) mod cells;
pub mod columns;
pub mod header;
pub mod pagination;
pub mod row;
pub mod settings;

use egui::{Align, Frame, Layout, RichText, Ui};
use egui_extras::TableBuilder;
use payops_business::{ColumnDescriptor, PaginationState, Transfer, TransferColumns};

pub use cells::VIEW_DETAILS_LABEL;
use columns::{HEADER_HEIGHT, ROW_HEIGHT, actions_column, column_for};
use header::render_table_header;
use pagination::{page_size_selector, pagination_strip};
use row::render_transfer_row;
use settings::{SETTINGS_TOGGLE_LABEL, column_settings};

/// What the user asked the host to do.
#[derive(Debug, Clone, PartialEq)]
pub enum TransferTableEvent {
    /// A page link or previous/next was used. 1-based, not clamped.
    PageChanged(u32),
    PageSizeChanged(u32),
    ViewDetails(Transfer),
    /// The column settings replaced the column set.
    ColumnsChanged(Vec<ColumnDescriptor>),
}

/// Per-session state of the table.
#[derive(Debug, Clone, Default)]
pub struct TransferTableState {
    pub(crate) columns: TransferColumns,
    pub(crate) settings_open: bool,
}

impl TransferTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            columns: TransferColumns::new(columns),
            settings_open: false,
        }
    }

    pub fn columns(&self) -> &TransferColumns {
        &self.columns
    }

    /// Replaces the column set, as the settings do.
    pub fn replace_columns(&mut self, columns: Vec<ColumnDescriptor>) {
        self.columns.replace(columns);
    }

    pub fn is_settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn toggle_settings(&mut self) {
        self.settings_open = !self.settings_open;
    }
}

/// Renders the card with title, page size selector, column settings, the
/// table and the pagination strip.
pub fn transfer_table(
    ui: &mut Ui,
    state: &mut TransferTableState,
    transfers: &[Transfer],
    pagination: &PaginationState,
) -> Vec<TransferTableEvent> {
    let mut events = Vec::new();

    Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.heading(format!(
                "Transfer History ({} total, showing {})",
                pagination.total_records,
                transfers.len()
            ));

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button(SETTINGS_TOGGLE_LABEL).clicked() {
                    state.toggle_settings();
                }
                if let Some(size) = page_size_selector(ui, pagination.page_size) {
                    events.push(TransferTableEvent::PageSizeChanged(size));
                }
                ui.label("Show:");
            });
        });

        if state.settings_open
            && let Some(replacement) = column_settings(ui, &state.columns)
        {
            state.replace_columns(replacement.clone());
            events.push(TransferTableEvent::ColumnsChanged(replacement));
        }

        ui.add_space(8.0);

        let visible = state.columns.visible();
        if let Some(transfer) = render_table(ui, &visible, transfers) {
            events.push(TransferTableEvent::ViewDetails(transfer));
        }

        if transfers.is_empty() {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("No transfers found").weak());
            });
        }

        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            if let Some(page) = pagination_strip(ui, pagination) {
                events.push(TransferTableEvent::PageChanged(page));
            }
        });
    });

    events
}

/// Renders header and body. Returns the transfer whose details were requested.
fn render_table(
    ui: &mut Ui,
    columns: &[&ColumnDescriptor],
    transfers: &[Transfer],
) -> Option<Transfer> {
    let mut view_details = None;

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in columns {
        builder = builder.column(column_for(column.key));
    }
    builder = builder.column(actions_column());

    builder
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header, columns);
        })
        .body(|mut body| {
            for transfer in transfers {
                body.row(ROW_HEIGHT, |mut row| {
                    if render_transfer_row(&mut row, columns, transfer).view_details {
                        view_details = Some(transfer.clone());
                    }
                });
            }
        });

    view_details
}
