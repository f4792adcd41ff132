//! Terminal user interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for tests
//!
//! Commands talk to the trait so they can be exercised without a
//! terminal attached.

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::{create_ui, TerminalUI};
pub use theme::Theme;

use crate::error::Result;

/// How much output to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Warnings and errors only.
    Quiet,
    /// Regular output.
    #[default]
    Normal,
    /// Everything, including per-unit detail.
    Verbose,
}

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask a yes/no question. Non-interactive UIs return the default.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Offer a multi-select over `options`, returning the chosen subset.
    ///
    /// Fails when no interactive terminal is attached.
    fn multi_select(&mut self, question: &str, options: &[String]) -> Result<Vec<String>>;
}
