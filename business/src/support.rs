//! Dashboard tabs and the support-contact widget's actions.

use serde::{Deserialize, Serialize};

/// Tabs of the dashboard's main area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardTab {
    #[default]
    Transfers,
    SupportTickets,
}

impl DashboardTab {
    pub const ALL: [Self; 2] = [Self::Transfers, Self::SupportTickets];

    pub fn id(self) -> &'static str {
        match self {
            Self::Transfers => "transfers",
            Self::SupportTickets => "support-tickets",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Transfers => "Transfers",
            Self::SupportTickets => "Support Tickets",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }
}

/// What the user asked for in the support-contact widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportAction {
    /// Open the support tickets tab.
    OpenTickets,
    /// Reveal the phone line.
    CallUs,
}

impl SupportAction {
    /// Tab the dashboard switches to, if the action navigates.
    pub fn target_tab(self) -> Option<DashboardTab> {
        match self {
            Self::OpenTickets => Some(DashboardTab::SupportTickets),
            Self::CallUs => None,
        }
    }
}
