//! Controller boundary types
//!
//! Types exchanged with the external widget and the hosting application.

use crate::types::Window;
use serde::{Deserialize, Serialize};

/// Listener invoked with each distinct query window
///
/// An explicit observer contract: one listener per controller, called
/// synchronously from the dispatching thread.
pub type ChangeListener = Box<dyn FnMut(Window)>;

/// Display configuration handed to the paginated-list widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerView {
    /// The 1-indexed page to highlight
    pub current_page: u32,
    /// The page size to display as selected
    pub page_size: u32,
    /// Total item count across all pages
    pub total_items: u64,
    /// Page-size choices to offer
    pub page_size_options: Vec<u32>,
}

/// A page-size value as reported by the widget
///
/// Widgets report the selected size either as a number or as the raw text
/// of the chosen option; [`PageSizeInput::resolve`] coerces both to a
/// usable page size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageSizeInput {
    /// A numeric page size
    Count(u32),
    /// A string-encoded page size needing coercion
    Text(String),
}

impl PageSizeInput {
    /// Coerce to a positive page size, falling back to `fallback` for
    /// unparseable text or zero
    pub fn resolve(&self, fallback: u32) -> u32 {
        match self {
            Self::Count(n) if *n > 0 => *n,
            Self::Count(_) => fallback,
            Self::Text(text) => match text.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => fallback,
            },
        }
    }
}

impl From<u32> for PageSizeInput {
    fn from(n: u32) -> Self {
        Self::Count(n)
    }
}

impl From<&str> for PageSizeInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for PageSizeInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
