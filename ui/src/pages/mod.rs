//! Pages module for the application.
//!
//! This module contains the different pages that can be displayed based on the route:
//! - `dashboard_page`: Transfers table or support tickets, per active tab
//! - `auth_page`: Placeholder screens of the authentication flow
//! - `not_found_page`: Fallback for unknown paths

mod auth_page;
mod dashboard_page;
mod not_found_page;

pub use auth_page::auth_page;
pub use dashboard_page::dashboard_page;
pub use not_found_page::{RETURN_HOME_LABEL, not_found_page};
