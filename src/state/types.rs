//! State machine types
//!
//! Defines the pagination state value and the action vocabulary.

use crate::types::{Window, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// The authoritative pagination state
///
/// A value type: transitions produce a new `PageState`, never mutate one in
/// place. Invariant after every transition:
/// `offset == (current_page - 1) * limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    /// The 1-indexed page currently selected
    pub current_page: u32,
    /// Number of items per page
    pub limit: u32,
    /// Zero-based index of the first item of the current page
    pub offset: u64,
    /// Externally reported count of items available to paginate
    pub total_items: u64,
}

impl PageState {
    /// Create the initial state: first page, zero offset
    pub fn new(limit: u32, total_items: u64) -> Self {
        Self {
            current_page: 1,
            limit,
            offset: 0,
            total_items,
        }
    }

    /// The derived query window
    pub fn window(&self) -> Window {
        Window::new(self.limit, self.offset)
    }

    /// Apply an action, producing the next state
    pub fn apply(self, action: Action) -> Self {
        super::transition(self, action)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, 0)
    }
}

/// Actions accepted by the state machine
///
/// Actions are transient messages, not persisted state. The enum is closed,
/// so [`super::transition`] is total by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// The user selected an absolute page
    SetCurrentPage {
        /// The 1-indexed target page
        page: u32,
    },

    /// The user selected a new page size; the widget simultaneously reports
    /// what page it would land on for that size
    SetPageSize {
        /// The 1-indexed page the widget lands on under the new size
        page: u32,
        /// The new page size
        page_size: u32,
    },

    /// External notification that the total item count changed
    SetTotalItems {
        /// The new total item count
        total_items: u64,
    },
}

impl Action {
    /// Create a page selection action
    pub fn set_current_page(page: u32) -> Self {
        Self::SetCurrentPage { page }
    }

    /// Create a page-size selection action
    pub fn set_page_size(page: u32, page_size: u32) -> Self {
        Self::SetPageSize { page, page_size }
    }

    /// Create a total-count synchronization action
    pub fn set_total_items(total_items: u64) -> Self {
        Self::SetTotalItems { total_items }
    }
}
