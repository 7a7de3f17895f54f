use payops_business::{
    DashboardConfig, DashboardTab, Route, SupportAction, Transfer, TransferLedger, TransferPage,
};

use crate::widgets::{TransferTableEvent, TransferTableState};

/// The main application state.
///
/// The dashboard owns pagination; the table only reports what the user
/// picked and the state clamps it against the ledger.
pub struct State {
    pub config: DashboardConfig,
    pub route: Route,
    pub active_tab: DashboardTab,
    pub ledger: TransferLedger,
    /// 1-based page of the transfers table.
    pub current_page: u32,
    pub page_size: u32,
    pub table: TransferTableState,
    /// Transfer shown in the details window.
    pub selected_transfer: Option<Transfer>,
    pub show_support_phone: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(DashboardConfig::default(), TransferLedger::demo())
    }
}

impl State {
    pub fn new(config: DashboardConfig, ledger: TransferLedger) -> Self {
        let page_size = config.page_size().get();
        Self {
            config,
            route: Route::default(),
            active_tab: DashboardTab::default(),
            ledger,
            current_page: 1,
            page_size,
            table: TransferTableState::new(),
            selected_transfer: None,
            show_support_phone: false,
        }
    }

    /// Builds the state from configuration, loading the configured transfers
    /// file and falling back to the demo records if it cannot be read.
    pub fn from_config(config: DashboardConfig) -> Self {
        let ledger = match config.transfers_file() {
            Some(path) => TransferLedger::load(path).unwrap_or_else(|err| {
                log::warn!("{err}; using built-in demo transfers");
                TransferLedger::demo()
            }),
            None => TransferLedger::demo(),
        };
        Self::new(config, ledger)
    }

    /// The page the transfers table currently shows.
    pub fn transfer_page(&self) -> TransferPage<'_> {
        self.ledger.page(self.current_page, self.page_size)
    }

    pub fn navigate(&mut self, route: Route) {
        if self.route != route {
            log::info!("Navigating to {}", route.path());
            self.route = route;
        }
    }

    /// Navigates to the route a location path resolves to.
    pub fn navigate_to_path(&mut self, path: &str) {
        self.navigate(Route::resolve(path));
    }

    pub fn apply_table_event(&mut self, event: TransferTableEvent) {
        match event {
            TransferTableEvent::PageChanged(page) => {
                self.current_page = self.ledger.clamp_page(page, self.page_size);
                log::debug!("Transfers page changed to {}", self.current_page);
            }
            TransferTableEvent::PageSizeChanged(size) => {
                self.page_size = size;
                self.current_page = 1;
                log::debug!("Transfers page size changed to {size}");
            }
            TransferTableEvent::ViewDetails(transfer) => {
                log::debug!("Viewing details of transfer {}", transfer.id);
                self.selected_transfer = Some(transfer);
            }
            TransferTableEvent::ColumnsChanged(columns) => {
                log::debug!(
                    "Transfer table columns changed, {} visible",
                    columns.iter().filter(|c| c.visible).count()
                );
            }
        }
    }

    pub fn apply_support_action(&mut self, action: SupportAction) {
        if let Some(tab) = action.target_tab() {
            log::debug!("Switching to the {} tab", tab.id());
            self.active_tab = tab;
        }
        if action == SupportAction::CallUs {
            self.show_support_phone = true;
        }
    }
}
