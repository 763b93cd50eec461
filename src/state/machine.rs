//! Transition function
//!
//! The single place where pagination state changes happen.

use super::types::{Action, PageState};

/// Compute the next pagination state for an action
///
/// Pure and deterministic: no side effects, same inputs always produce the
/// same output. The input state is consumed by value (`PageState` is
/// `Copy`) and a new value is returned.
///
/// `SetCurrentPage` performs no upper-bound check against
/// `total_items`: the widget is trusted to only emit pages within its own
/// displayed range, so an out-of-range page yields an offset beyond the
/// known item count until the next page-size action.
pub fn transition(state: PageState, action: Action) -> PageState {
    match action {
        Action::SetCurrentPage { page } => {
            // Pages are 1-indexed; a malformed 0 behaves as the first page.
            let page = page.max(1);
            PageState {
                current_page: page,
                offset: first_item_index(page, state.limit),
                ..state
            }
        }

        Action::SetPageSize { page, page_size } => {
            let page = page.max(1);
            let page_size = page_size.max(1);
            let candidate_offset = first_item_index(page, page_size);
            if candidate_offset < state.total_items {
                // The requested page still starts within the known items
                // under the new size.
                PageState {
                    current_page: page,
                    limit: page_size,
                    offset: candidate_offset,
                    ..state
                }
            } else {
                // The requested page would start beyond all known items:
                // reset to the first page rather than clamping to the last.
                PageState {
                    current_page: 1,
                    limit: page_size,
                    offset: 0,
                    ..state
                }
            }
        }

        Action::SetTotalItems { total_items } => PageState {
            total_items,
            ..state
        },
    }
}

/// Zero-based index of the first item of a 1-indexed page
fn first_item_index(page: u32, limit: u32) -> u64 {
    u64::from(page - 1) * u64::from(limit)
}
