//! Shared core types
//!
//! Small value types used by both the state machine and the controller.

use serde::{Deserialize, Serialize};

/// Page size used when the host does not configure one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page-size options offered to the widget when the host does not
/// configure its own set
pub const DEFAULT_PAGE_SIZE_OPTIONS: [u32; 3] = [10, 30, 50];

/// The query window: the slice of items requested from the data source
///
/// `limit` is the page size, `offset` the zero-based index of the first
/// item of the current page. A `Window` fully determines the query; the
/// controller's notification contract is expressed in terms of distinct
/// `Window` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// Number of items requested per page
    pub limit: u32,
    /// Zero-based index of the first item of the current page
    pub offset: u64,
}

impl Window {
    /// Create a new window
    pub fn new(limit: u32, offset: u64) -> Self {
        Self { limit, offset }
    }
}
