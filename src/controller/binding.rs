//! Controller implementation
//!
//! Wires widget callbacks to the state machine and diffs the derived
//! window against the last notified one.

use super::types::{ChangeListener, PageSizeInput, PagerView};
use crate::config::ControllerConfig;
use crate::error::Result;
use crate::state::{transition, Action, PageState};
use crate::types::Window;
use tracing::debug;

/// Stateful pagination controller
///
/// Owns one [`PageState`] for its entire lifetime; no other component may
/// read or mutate it directly. All interaction happens through the widget
/// event methods and the registered change listener. Purely reactive:
/// every event is processed to completion, in delivery order, on the
/// calling thread.
pub struct PageController {
    state: PageState,
    default_page_size: u32,
    page_size_options: Vec<u32>,
    /// Last window handed to the listener
    notified: Option<Window>,
    listener: ChangeListener,
}

impl PageController {
    /// Create a controller and notify the listener with the initial window
    ///
    /// Fails if `config` is invalid, e.g. the default page size is not one
    /// of the configured options.
    pub fn new(config: ControllerConfig, listener: ChangeListener) -> Result<Self> {
        config.validate()?;

        let mut controller = Self {
            state: PageState::new(config.default_page_size, config.total_items),
            default_page_size: config.default_page_size,
            page_size_options: config.page_size_options,
            notified: None,
            listener,
        };

        // The consumer learns the initial window the same way it learns
        // every later one.
        controller.notify_if_changed();
        Ok(controller)
    }

    /// Create a controller from a plain closure
    pub fn with_listener<F>(config: ControllerConfig, listener: F) -> Result<Self>
    where
        F: FnMut(Window) + 'static,
    {
        Self::new(config, Box::new(listener))
    }

    /// Display configuration for the widget
    pub fn view(&self) -> PagerView {
        PagerView {
            current_page: self.state.current_page,
            page_size: self.state.limit,
            total_items: self.state.total_items,
            page_size_options: self.page_size_options.clone(),
        }
    }

    /// The current pagination state
    pub fn state(&self) -> PageState {
        self.state
    }

    /// The current query window
    pub fn window(&self) -> Window {
        self.state.window()
    }

    /// Widget event: the user selected a page
    ///
    /// A missing page is treated as page 1.
    pub fn page_changed(&mut self, page: Option<u32>) {
        let page = page.unwrap_or(1);
        self.dispatch(Action::set_current_page(page));
    }

    /// Widget event: the user selected a page size
    ///
    /// A missing page is treated as page 1; a missing, unparseable, or zero
    /// size is treated as the configured default page size.
    pub fn page_size_changed(&mut self, page: Option<u32>, size: Option<PageSizeInput>) {
        let page = page.unwrap_or(1);
        let page_size = size.map_or(self.default_page_size, |s| {
            s.resolve(self.default_page_size)
        });
        self.dispatch(Action::set_page_size(page, page_size));
    }

    /// Host event: the externally supplied total item count changed
    ///
    /// Synchronizes internal state without resetting page or limit; the
    /// listener only fires if the derived window moved, which a count
    /// update alone never causes.
    pub fn total_items_changed(&mut self, total_items: u64) {
        self.dispatch(Action::set_total_items(total_items));
    }

    fn dispatch(&mut self, action: Action) {
        debug!(?action, "dispatching pagination action");
        self.state = transition(self.state, action);
        self.notify_if_changed();
    }

    fn notify_if_changed(&mut self) {
        let window = self.state.window();
        if self.notified != Some(window) {
            debug!(
                limit = window.limit,
                offset = window.offset,
                "query window changed"
            );
            self.notified = Some(window);
            (self.listener)(window);
        }
    }
}

impl std::fmt::Debug for PageController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageController")
            .field("state", &self.state)
            .field("default_page_size", &self.default_page_size)
            .field("page_size_options", &self.page_size_options)
            .field("notified", &self.notified)
            .finish_non_exhaustive()
    }
}
