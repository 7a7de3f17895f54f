//! Integration tests for route handling in the app shell.

use crate::common::TestCtx;
use kittest::Queryable;
use payops_business::Route;
use payops_ui::pages::RETURN_HOME_LABEL;

mod common;

#[test]
fn test_app_starts_on_dashboard() {
    let mut ctx = TestCtx::new_app();
    let harness = ctx.harness_mut();
    harness.run();

    assert_eq!(harness.state().state.route, Route::Dashboard);
    assert!(
        harness
            .query_by_label("Transfer History (57 total, showing 10)")
            .is_some()
    );
}

#[test]
fn test_not_found_returns_home() {
    let mut ctx = TestCtx::new_app_at(Route::NotFound);
    let harness = ctx.harness_mut();
    harness.run();

    assert!(harness.query_by_label("404").is_some());

    harness.get_by_label(RETURN_HOME_LABEL).click();
    harness.run();

    assert_eq!(harness.state().state.route, Route::Dashboard);
}

#[test]
fn test_auth_route_renders_placeholder_without_sidebar() {
    let mut ctx = TestCtx::new_app_at(Route::SetupPassword);
    let harness = ctx.harness_mut();
    harness.run();

    assert!(harness.query_by_label("/setup-password").is_some());
    assert!(harness.query_by_label(payops_ui::widgets::SUPPORT_LABEL).is_none());
}

#[test]
fn test_logo_navigates_to_dashboard() {
    let mut ctx = TestCtx::new_app_at(Route::Login);
    let harness = ctx.harness_mut();
    harness.run();

    harness.get_by_label("PayOps").click();
    harness.run();

    assert_eq!(harness.state().state.route, Route::Dashboard);
}
