use egui_kittest::Harness;
use payops_business::{
    DashboardConfig, Route, Transfer, TransferLedger, TransferMethod, TransferStatus, TransferType,
};
use payops_ui::PayopsApp;
use payops_ui::state::State;

pub struct TestCtx<'a, T = State> {
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }
}

impl<'a> TestCtx<'a, PayopsApp> {
    pub fn new_app() -> Self {
        Self::with_state(State::default())
    }

    #[allow(unused)]
    pub fn new_app_at(route: Route) -> Self {
        let mut state = State::default();
        state.route = route;
        Self::with_state(state)
    }

    #[allow(unused)]
    pub fn with_state(state: State) -> Self {
        let app = PayopsApp::new(state);
        let harness = Harness::builder()
            .with_size(egui::vec2(1600.0, 1000.0))
            .build_eframe(|_| app);

        Self { harness }
    }
}

/// A state whose ledger holds exactly `transfers`.
#[allow(unused)]
pub fn state_with(transfers: Vec<Transfer>) -> State {
    State::new(DashboardConfig::default(), TransferLedger::new(transfers))
}

#[allow(unused)]
pub fn sample_transfer(id: &str, currency: &str) -> Transfer {
    Transfer {
        id: id.to_owned(),
        beneficiary_name: "Acme".to_owned(),
        beneficiary_id: "B1".to_owned(),
        amount: 1234.5,
        currency: currency.to_owned(),
        kind: TransferType::PayOut,
        status: TransferStatus::Completed,
        method: TransferMethod::Api,
        fee: 2.5,
        created_at: "2024-03-01T10:15:00Z".to_owned(),
    }
}
