//! CLI module
//!
//! Command-line interface for replaying pagination interaction scripts.
//!
//! # Commands
//!
//! - `simulate` - Replay a scripted interaction sequence through a controller
//! - `validate` - Parse and validate a script file

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{replay, EmittedWindow, Runner, ScriptEvent, SimulationReport, SimulationScript};
