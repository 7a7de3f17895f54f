//! Domain logic for the payops dashboard.
//!
//! Everything here is UI-free so the egui crate only has to draw:
//! - `transfer`: transfer records and their tag colors
//! - `columns`: the column configuration store for the transfer table
//! - `currency`: amount and fee formatting
//! - `pagination`: page sizes and the pagination strip model
//! - `ledger`: in-memory upstream paginator used by the transfers page
//! - `route`: navigation targets of the dashboard
//! - `support`: dashboard tabs and support-contact actions
//! - `config`: environment driven configuration

pub mod columns;
pub mod config;
pub mod currency;
mod error;
pub mod ledger;
pub mod pagination;
pub mod route;
pub mod support;
pub mod transfer;

pub use columns::{ColumnDescriptor, ColumnKey, MoveDirection, TransferColumns};
pub use config::{DashboardConfig, ThemePreference};
pub use currency::{CRYPTO_CURRENCIES, format_amount, format_currency, format_fee};
pub use error::{CurrencyError, LedgerError, PageSizeError};
pub use ledger::{TransferLedger, TransferPage};
pub use pagination::{MAX_PAGE_LINKS, PageSize, PaginationState, Pager};
pub use route::Route;
pub use support::{DashboardTab, SupportAction};
pub use transfer::{Tone, Transfer, TransferMethod, TransferStatus, TransferType};
