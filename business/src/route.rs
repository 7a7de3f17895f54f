//! Route state for page navigation.
//!
//! Authentication screens are navigation targets only; the dashboard does
//! not implement any authentication logic behind them.

use serde::{Deserialize, Serialize};

/// Represents the current page/route of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Login,
    Signup,
    VerifySignupOtp,
    SetupPassword,
    Onboarding,
    TwoFactorAuth,
    VerifyOtp,
    Logout,
    ForgotPassword,
    /// The dashboard with the transfers table.
    #[default]
    Dashboard,
    NotFound,
}

impl Route {
    /// Authentication flow screens, in the order they are linked.
    pub const AUTH: [Self; 9] = [
        Self::Login,
        Self::Signup,
        Self::VerifySignupOtp,
        Self::SetupPassword,
        Self::Onboarding,
        Self::TwoFactorAuth,
        Self::VerifyOtp,
        Self::Logout,
        Self::ForgotPassword,
    ];

    /// Resolves a location path. `/analytics` redirects to the dashboard and
    /// anything unknown is [`Route::NotFound`].
    pub fn resolve(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/verify-signup-otp" => Self::VerifySignupOtp,
            "/setup-password" => Self::SetupPassword,
            "/onboarding" => Self::Onboarding,
            "/2fa" => Self::TwoFactorAuth,
            "/verify-otp" => Self::VerifyOtp,
            "/logout" => Self::Logout,
            "/forgot-password" => Self::ForgotPassword,
            "/" | "/analytics" => Self::Dashboard,
            _ => Self::NotFound,
        }
    }

    /// Canonical path. `NotFound` has none of its own and maps to `*`.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::VerifySignupOtp => "/verify-signup-otp",
            Self::SetupPassword => "/setup-password",
            Self::Onboarding => "/onboarding",
            Self::TwoFactorAuth => "/2fa",
            Self::VerifyOtp => "/verify-otp",
            Self::Logout => "/logout",
            Self::ForgotPassword => "/forgot-password",
            Self::Dashboard => "/",
            Self::NotFound => "*",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Sign up",
            Self::VerifySignupOtp => "Verify sign-up code",
            Self::SetupPassword => "Set up password",
            Self::Onboarding => "Onboarding",
            Self::TwoFactorAuth => "Two-factor authentication",
            Self::VerifyOtp => "Verify code",
            Self::Logout => "Log out",
            Self::ForgotPassword => "Forgot password",
            Self::Dashboard => "Dashboard",
            Self::NotFound => "Page not found",
        }
    }

    pub fn is_auth(self) -> bool {
        Self::AUTH.contains(&self)
    }
}
