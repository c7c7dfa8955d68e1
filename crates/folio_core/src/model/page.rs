//! Pagination envelope scaffold.
//!
//! The catalog is small enough that no core operation paginates today; the
//! envelope exists so the presentation layer can keep its list contracts
//! stable if the catalog ever moves behind a real backend.

use serde::{Deserialize, Serialize};

/// Paged slice of a larger result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items for this page, in result order.
    pub items: Vec<T>,
    /// Total items across all pages.
    pub total: usize,
    /// 1-based page number.
    pub page: usize,
    /// Page size the slice was produced with.
    pub limit: usize,
    /// Whether another page follows this one.
    pub has_more: bool,
}

impl<T> Page<T> {
    /// Wraps a page of items, deriving `has_more` from position and total.
    pub fn new(items: Vec<T>, total: usize, page: usize, limit: usize) -> Self {
        let seen = page.saturating_mul(limit);
        Self {
            items,
            total,
            page,
            limit,
            has_more: seen < total,
        }
    }
}
