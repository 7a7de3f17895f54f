use egui::{Response, RichText, Ui};
use payops_business::Route;

use crate::state::State;

pub const RETURN_HOME_LABEL: &str = "Return to Home";

pub fn not_found_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(RichText::new("404").size(40.0).strong());
        ui.label("Oops! Page not found");
        ui.add_space(12.0);
        if ui.button(RETURN_HOME_LABEL).clicked() {
            state.navigate(Route::Dashboard);
        }
    })
    .response
}
