//! Dashboard page: the transfers table and the support tickets tab.

use egui::{Response, RichText, Ui};
use payops_business::DashboardTab;

use crate::{state::State, widgets};

/// Renders the content of the active dashboard tab.
pub fn dashboard_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical(|ui| match state.active_tab {
        DashboardTab::Transfers => transfers_tab(state, ui),
        DashboardTab::SupportTickets => support_tickets_tab(state, ui),
    })
    .response
}

fn transfers_tab(state: &mut State, ui: &mut Ui) {
    ui.heading("Transfers");
    ui.add_space(8.0);

    let page = state.ledger.page(state.current_page, state.page_size);
    let events = widgets::transfer_table(ui, &mut state.table, page.transfers, &page.pagination);

    for event in events {
        state.apply_table_event(event);
    }
}

fn support_tickets_tab(state: &mut State, ui: &mut Ui) {
    ui.heading(DashboardTab::SupportTickets.label());
    ui.add_space(8.0);
    ui.label(RichText::new("You have no open support tickets.").weak());
    ui.add_space(8.0);
    if ui.button("Back to transfers").clicked() {
        state.active_tab = DashboardTab::Transfers;
    }
}
