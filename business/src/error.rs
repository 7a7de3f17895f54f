use thiserror::Error;

/// Raised by [`crate::format_currency`] when a code cannot be used as a currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    #[error("currency code is empty")]
    Empty,
    #[error("invalid currency code `{0}`: expected three ASCII letters")]
    Malformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageSizeError {
    #[error("page size `{0}` is not a number")]
    NotANumber(String),
    #[error("unsupported page size {0}, expected one of 10, 20 or 50")]
    Unsupported(u32),
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("failed to read transfers from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse transfers: {0}")]
    Parse(#[from] serde_json::Error),
}
