//! Placeholder screens of the authentication flow.
//!
//! The dashboard has no authentication logic; these pages only exist so the
//! routes resolve to something and can link to each other.

use egui::{Response, RichText, Ui};
use payops_business::Route;

use crate::state::State;

pub const DASHBOARD_LINK_LABEL: &str = "Go to dashboard";

/// Renders the placeholder for `route`, with links to the other auth routes.
pub fn auth_page(state: &mut State, ui: &mut Ui, route: Route) -> Response {
    let mut target = None;

    let response = ui
        .vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.heading(route.title());
            ui.label(RichText::new(route.path()).monospace().weak());
            ui.add_space(12.0);
            ui.label("This screen is not available in the desktop dashboard yet.");
            ui.add_space(12.0);

            ui.horizontal_wrapped(|ui| {
                for other in Route::AUTH.into_iter().filter(|other| *other != route) {
                    if ui.link(other.title()).clicked() {
                        target = Some(other);
                    }
                }
            });

            ui.add_space(12.0);
            if ui.button(DASHBOARD_LINK_LABEL).clicked() {
                target = Some(Route::Dashboard);
            }
        })
        .response;

    if let Some(route) = target {
        state.navigate(route);
    }
    response
}

#[cfg(test)]
mod auth_page_test {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use payops_business::Route;

    use crate::state::State;

    fn auth_harness(route: Route) -> Harness<'static, State> {
        let mut state = State::default();
        state.route = route;
        Harness::new_ui_state(
            |ui, state: &mut State| {
                let route = state.route;
                super::auth_page(state, ui, route);
            },
            state,
        )
    }

    #[test]
    fn test_shows_title_and_path() {
        let harness = auth_harness(Route::TwoFactorAuth);

        assert!(harness.query_by_label("Two-factor authentication").is_some());
        assert!(harness.query_by_label("/2fa").is_some());
    }

    #[test]
    fn test_links_navigate_between_auth_routes() {
        let mut harness = auth_harness(Route::Login);

        harness.get_by_label("Forgot password").click();
        harness.run();

        assert_eq!(harness.state().route, Route::ForgotPassword);
    }

    #[test]
    fn test_dashboard_button_leaves_auth_flow() {
        let mut harness = auth_harness(Route::Signup);

        harness.get_by_label(super::DASHBOARD_LINK_LABEL).click();
        harness.run();

        assert_eq!(harness.state().route, Route::Dashboard);
    }
}
