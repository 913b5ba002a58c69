//! Pagination request and metadata types.
//!
//! Pages are 1-based.  `PageInfo` carries the metadata the original wire
//! format exposes (`page`, `pageSize`, `totalItems`, `totalPages`,
//! `hasNext`, `hasPrevious`); with the `serde` feature the field names
//! serialize in camelCase accordingly.

/// A requested slice of an ordered result set.  Both fields are ≥ 1;
/// callers validate before constructing queries.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PageRequest {
    /// 1-based page number.
    pub page: u32,
    /// Rows per page.
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Row offset of the first item on this page.  Page 0, though outside
    /// the documented domain, is treated as page 1 rather than wrapping.
    #[inline]
    pub fn offset(self) -> u64 {
        u64::from(self.page).saturating_sub(1) * u64::from(self.page_size)
    }
}

/// Position of a returned page within the whole result set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PageInfo {
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PageInfo {
    /// Metadata for page `request` of a result set with `total_items` rows.
    ///
    /// `total_pages = ceil(total_items / page_size)`;
    /// `has_next = page < total_pages`; `has_previous = page > 1`.
    pub fn for_total(request: PageRequest, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(u64::from(request.page_size)) as u32;
        Self {
            page: request.page,
            page_size: request.page_size,
            total_items,
            total_pages,
            has_next: request.page < total_pages,
            has_previous: request.page > 1,
        }
    }

    /// The all-zero metadata shape used when a query matches nothing:
    /// `total_items = 0`, `total_pages = 0`, both navigation flags false.
    /// The requested page/pageSize are still echoed back.
    pub fn empty(request: PageRequest) -> Self {
        Self {
            page: request.page,
            page_size: request.page_size,
            total_items: 0,
            total_pages: 0,
            has_next: false,
            has_previous: false,
        }
    }
}
