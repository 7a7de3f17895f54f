//! Page sizes and the pagination strip model.
//!
//! The pagination state is owned by the hosting page. [`Pager`] only
//! derives what the strip shows from it and never corrects out-of-range
//! values.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::PageSizeError;

/// Number of direct page links the strip shows at most.
pub const MAX_PAGE_LINKS: u32 = 5;

/// Rows per page the user can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "u32")]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Fifty,
}

impl PageSize {
    pub const ALL: [Self; 3] = [Self::Ten, Self::Twenty, Self::Fifty];

    pub fn get(self) -> u32 {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
        }
    }
}

impl TryFrom<u32> for PageSize {
    type Error = PageSizeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(Self::Ten),
            20 => Ok(Self::Twenty),
            50 => Ok(Self::Fifty),
            other => Err(PageSizeError::Unsupported(other)),
        }
    }
}

impl FromStr for PageSize {
    type Err = PageSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| PageSizeError::NotANumber(s.to_owned()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Pagination metadata handed to the transfers table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    /// 1-based.
    pub current_page: u32,
    pub page_size: u32,
    pub total_records: usize,
    pub total_pages: u32,
}

/// What the pagination strip renders for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    current_page: u32,
    total_pages: u32,
}

impl Pager {
    pub fn new(state: &PaginationState) -> Self {
        Self {
            current_page: state.current_page,
            total_pages: state.total_pages,
        }
    }

    /// The strip is hidden when everything fits on one page.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    /// Direct page links, always `1..=min(5, total_pages)`.
    ///
    /// The window does not follow the current page; pages past the fifth are
    /// reached by stepping with next/previous.
    pub fn page_links(&self) -> RangeInclusive<u32> {
        1..=self.total_pages.min(MAX_PAGE_LINKS)
    }

    pub fn is_current(&self, page: u32) -> bool {
        self.current_page == page
    }

    pub fn previous_enabled(&self) -> bool {
        self.current_page != 1
    }

    pub fn next_enabled(&self) -> bool {
        self.current_page != self.total_pages
    }

    /// Target of the "previous" control, if stepping back is possible.
    pub fn previous_page(&self) -> Option<u32> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    /// Target of the "next" control, if stepping forward is possible.
    pub fn next_page(&self) -> Option<u32> {
        (self.current_page < self.total_pages).then(|| self.current_page + 1)
    }
}
