//! CLI runner - executes commands
//!
//! Scripts are recorded widget/host interaction sequences; replaying one
//! reproduces the exact window notifications a live controller would have
//! emitted.

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ControllerConfig;
use crate::controller::{PageController, PageSizeInput};
use crate::error::{Error, Result, ResultExt};
use crate::state::PageState;
use crate::types::Window;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

// ============================================================================
// Script types
// ============================================================================

/// A recorded interaction sequence: a starting configuration plus events
/// in delivery order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationScript {
    /// Controller configuration to start from
    #[serde(default)]
    pub config: ControllerConfig,

    /// Events in delivery order
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// One scripted widget or host event
///
/// Optional fields mirror the widget contract: a missing page or size goes
/// through the controller's normalization, exactly as a live widget event
/// would.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Widget page-change event
    PageChanged {
        /// The selected page, if the widget reported one
        #[serde(default)]
        page: Option<u32>,
    },

    /// Widget page-size-change event
    PageSizeChanged {
        /// The page the widget lands on, if reported
        #[serde(default)]
        page: Option<u32>,
        /// The selected size, numeric or string-encoded
        #[serde(default)]
        size: Option<PageSizeInput>,
    },

    /// Host total-count update
    TotalItemsChanged {
        /// The new total item count
        total_items: u64,
    },
}

impl SimulationScript {
    /// Parse a script from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let script: Self = serde_yaml::from_str(yaml)?;
        script.config.validate()?;
        Ok(script)
    }

    /// Parse a script from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let script: Self = serde_json::from_str(json)?;
        script.config.validate()?;
        Ok(script)
    }

    /// Load a script from a file, choosing the format by extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::file_not_found(path.to_string_lossy()));
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script file {}", path.display()))?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&contents),
            _ => Self::from_yaml(&contents),
        }
    }
}

// ============================================================================
// Replay
// ============================================================================

/// A window notification observed during replay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmittedWindow {
    /// Index of the event that produced this window; `None` for the
    /// construction-time notification
    pub after_event: Option<usize>,
    /// The notified window
    pub window: Window,
}

/// Result of replaying a script
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    /// Every window notification, in emission order
    pub windows: Vec<EmittedWindow>,
    /// Controller state after the last event
    pub final_state: PageState,
}

/// Replay a script through a fresh controller and collect its notifications
pub fn replay(script: &SimulationScript) -> Result<SimulationReport> {
    fn drain(
        after_event: Option<usize>,
        notifications: &Rc<RefCell<Vec<Window>>>,
        out: &mut Vec<EmittedWindow>,
    ) {
        for window in notifications.borrow_mut().drain(..) {
            out.push(EmittedWindow { after_event, window });
        }
    }

    let notifications = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notifications);
    let mut controller = PageController::with_listener(script.config.clone(), move |window| {
        sink.borrow_mut().push(window);
    })?;

    let mut windows = Vec::new();
    drain(None, &notifications, &mut windows);

    for (index, event) in script.events.iter().enumerate() {
        match event {
            ScriptEvent::PageChanged { page } => controller.page_changed(*page),
            ScriptEvent::PageSizeChanged { page, size } => {
                controller.page_size_changed(*page, size.clone());
            }
            ScriptEvent::TotalItemsChanged { total_items } => {
                controller.total_items_changed(*total_items);
            }
        }
        drain(Some(index), &notifications, &mut windows);
    }

    Ok(SimulationReport {
        windows,
        final_state: controller.state(),
    })
}

// ============================================================================
// Runner
// ============================================================================

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Simulate { script } => self.simulate(script),
            Commands::Validate { script } => self.validate(script),
        }
    }

    /// Replay a script and emit its notifications
    fn simulate(&self, path: &Path) -> Result<()> {
        let script = SimulationScript::from_file(path)?;
        let report = replay(&script)?;

        for emitted in &report.windows {
            self.output_message(&json!({
                "type": "WINDOW",
                "after_event": emitted.after_event,
                "window": emitted.window,
            }));
        }

        self.output_message(&json!({
            "type": "FINAL_STATE",
            "state": report.final_state,
        }));

        Ok(())
    }

    /// Validate a script file
    fn validate(&self, path: &Path) -> Result<()> {
        let script = SimulationScript::from_file(path)?;

        self.output_message(&json!({
            "type": "LOG",
            "log": {
                "level": "INFO",
                "message": format!(
                    "Script is valid: {} events, default page size {}",
                    script.events.len(),
                    script.config.default_page_size
                )
            }
        }));

        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &serde_json::Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCRIPT_YAML: &str = "\
config:
  default_page_size: 10
  total_items: 25
events:
  - type: page_changed
    page: 2
  - type: total_items_changed
    total_items: 80
  - type: page_size_changed
    page: 2
    size: \"30\"
";

    #[test]
    fn test_script_from_yaml() {
        let script = SimulationScript::from_yaml(SCRIPT_YAML).unwrap();
        assert_eq!(script.config.total_items, 25);
        assert_eq!(script.events.len(), 3);
        assert_eq!(
            script.events[2],
            ScriptEvent::PageSizeChanged {
                page: Some(2),
                size: Some(PageSizeInput::Text("30".to_string())),
            }
        );
    }

    #[test]
    fn test_script_event_optional_fields_may_be_omitted() {
        let script =
            SimulationScript::from_yaml("events:\n  - type: page_changed\n").unwrap();
        assert_eq!(script.events[0], ScriptEvent::PageChanged { page: None });
    }

    #[test]
    fn test_script_rejects_invalid_config() {
        let err = SimulationScript::from_yaml("config:\n  default_page_size: 7\n").unwrap_err();
        assert!(matches!(err, Error::PageSizeNotAllowed { size: 7, .. }));
    }

    #[test]
    fn test_replay_collects_windows_in_order() {
        let script = SimulationScript::from_yaml(SCRIPT_YAML).unwrap();
        let report = replay(&script).unwrap();

        let collected: Vec<(Option<usize>, u32, u64)> = report
            .windows
            .iter()
            .map(|e| (e.after_event, e.window.limit, e.window.offset))
            .collect();

        // Initial window, page 2, (no emission for the count update),
        // then size 30 at page 2.
        assert_eq!(
            collected,
            vec![(None, 10, 0), (Some(0), 10, 10), (Some(2), 30, 30)]
        );
        assert_eq!(report.final_state.total_items, 80);
    }

    #[test]
    fn test_script_from_file_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.json");
        std::fs::write(
            &path,
            r#"{"config": {"total_items": 5}, "events": [{"type": "page_changed", "page": 1}]}"#,
        )
        .unwrap();

        let script = SimulationScript::from_file(&path).unwrap();
        assert_eq!(script.config.total_items, 5);
        assert_eq!(script.events.len(), 1);
    }

    #[test]
    fn test_script_from_file_missing() {
        let err = SimulationScript::from_file("no-such-script.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
