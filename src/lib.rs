//! # pagewise
//!
//! A pagination state controller: derive `(limit, offset)` query windows
//! from page and page-size interactions against a mutable total item count.
//!
//! ## Features
//!
//! - **Pure state machine**: `transition(state, action) -> state`, no side
//!   effects, no hidden state
//! - **Controller binding**: owns one state value, normalizes raw widget
//!   events, notifies a listener on every distinct query window
//! - **Serde throughout**: state, actions, and configuration round-trip as
//!   YAML or JSON
//! - **Scripted replay**: the `pagewise` CLI replays recorded interaction
//!   sequences for debugging pagination flows
//!
//! ## Quick Start
//!
//! ```rust
//! use pagewise::{ControllerConfig, PageController};
//!
//! let config = ControllerConfig::new(10).with_total_items(25);
//! let mut controller = PageController::new(config, Box::new(|window| {
//!     println!("fetch limit={} offset={}", window.limit, window.offset);
//! })).unwrap();
//!
//! // Widget reports the user moved to page 2.
//! controller.page_changed(Some(2));
//! assert_eq!(controller.window().offset, 10);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      PageController                         │
//! │  page_changed / page_size_changed / total_items_changed     │
//! │  view() → PagerView          listener(Window) on change     │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │ Action
//! ┌──────────────────────────────┴──────────────────────────────┐
//! │                  transition(PageState, Action)              │
//! │  SetCurrentPage │ SetPageSize │ SetTotalItems               │
//! └─────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for pagewise
pub mod error;

/// Shared core types
pub mod types;

/// The pure pagination state machine
pub mod state;

/// The stateful controller binding widget events to the state machine
pub mod controller;

/// Controller configuration and loaders
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ControllerConfig;
pub use controller::{ChangeListener, PageController, PageSizeInput, PagerView};
pub use error::{Error, Result};
pub use state::{transition, Action, PageState};
pub use types::{Window, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
