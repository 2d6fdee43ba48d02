//! Output module for probe results.
//!
//! This module handles:
//! - Human-readable text rendering
//! - JSON output formatting

pub mod console;

pub use console::{render_text, ConsoleOutput};
