//! In-memory source of transfers for the transfers page.
//!
//! The table itself never paginates; the page asks the ledger for one slice
//! and hands the table the slice together with its [`PaginationState`].

use std::path::Path;

use chrono::{Duration, TimeZone, Utc};

use crate::error::LedgerError;
use crate::pagination::PaginationState;
use crate::transfer::{Transfer, TransferMethod, TransferStatus, TransferType};

/// One page cut out of the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferPage<'a> {
    pub transfers: &'a [Transfer],
    pub pagination: PaginationState,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransferLedger {
    transfers: Vec<Transfer>,
}

impl TransferLedger {
    pub fn new(transfers: Vec<Transfer>) -> Self {
        Self { transfers }
    }

    /// Parses a JSON array of transfers.
    pub fn from_json(json: &str) -> Result<Self, LedgerError> {
        let transfers: Vec<Transfer> = serde_json::from_str(json)?;
        Ok(Self::new(transfers))
    }

    /// Reads a JSON array of transfers from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LedgerError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let ledger = Self::from_json(&json)?;
        log::info!(
            "Loaded {} transfers from {}",
            ledger.len(),
            path.display()
        );
        Ok(ledger)
    }

    /// Built-in records used when no transfers file is configured.
    pub fn demo() -> Self {
        const BENEFICIARIES: [(&str, &str); 6] = [
            ("Acme Corp", "BEN-1001"),
            ("Globex Ltd", "BEN-1002"),
            ("Initech", "BEN-1003"),
            ("Umbrella Health", "BEN-1004"),
            ("Stark Supplies", "BEN-1005"),
            ("Wayne Logistics", "BEN-1006"),
        ];
        const CURRENCIES: [&str; 7] = ["USD", "EUR", "BTC", "USDT", "GBP", "JPY", "ETH"];
        const TYPES: [TransferType; 3] =
            [TransferType::PayOut, TransferType::PayIn, TransferType::Invoice];
        const STATUSES: [TransferStatus; 4] = [
            TransferStatus::Completed,
            TransferStatus::Processing,
            TransferStatus::Pending,
            TransferStatus::Failed,
        ];
        const METHODS: [TransferMethod; 3] =
            [TransferMethod::Api, TransferMethod::Web, TransferMethod::Upload];

        let start = Utc
            .with_ymd_and_hms(2024, 5, 1, 9, 0, 0)
            .single()
            .unwrap_or_default();

        let transfers = (0..57_u32)
            .map(|i| {
                let n = i as usize;
                let (beneficiary_name, beneficiary_id) = BENEFICIARIES[n % BENEFICIARIES.len()];
                Transfer {
                    id: format!("TRX-{:05}", 20_400 + i),
                    beneficiary_name: beneficiary_name.to_owned(),
                    beneficiary_id: beneficiary_id.to_owned(),
                    amount: f64::from(150 + (i * 7_919) % 48_000) + f64::from(i % 4) * 0.25,
                    currency: CURRENCIES[n % CURRENCIES.len()].to_owned(),
                    kind: TYPES[n % TYPES.len()].clone(),
                    status: STATUSES[(n / 2) % STATUSES.len()].clone(),
                    method: METHODS[(n / 3) % METHODS.len()].clone(),
                    fee: f64::from(i % 5) + 0.5,
                    created_at: (start + Duration::hours(i64::from(i) * 5)).to_rfc3339(),
                }
            })
            .collect();

        Self::new(transfers)
    }

    pub fn len(&self) -> usize {
        self.transfers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transfers.is_empty()
    }

    /// Number of pages for `page_size`; an empty ledger still has one page.
    pub fn total_pages(&self, page_size: u32) -> u32 {
        let page_size = page_size.max(1) as usize;
        let pages = self.transfers.len().div_ceil(page_size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Clamps `page` into `[1, total_pages]`.
    pub fn clamp_page(&self, page: u32, page_size: u32) -> u32 {
        page.clamp(1, self.total_pages(page_size))
    }

    /// The slice for `page` (clamped) together with its pagination metadata.
    pub fn page(&self, page: u32, page_size: u32) -> TransferPage<'_> {
        let total_pages = self.total_pages(page_size);
        let current_page = self.clamp_page(page, page_size);

        let size = page_size.max(1) as usize;
        let start = ((current_page - 1) as usize * size).min(self.transfers.len());
        let end = (start + size).min(self.transfers.len());

        TransferPage {
            transfers: &self.transfers[start..end],
            pagination: PaginationState {
                current_page,
                page_size,
                total_records: self.transfers.len(),
                total_pages,
            },
        }
    }

    pub fn find(&self, id: &str) -> Option<&Transfer> {
        self.transfers.iter().find(|transfer| transfer.id == id)
    }
}
