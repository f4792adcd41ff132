//! Terminal UI implementation on console and dialoguer.

use dialoguer::{Confirm, MultiSelect};

use crate::error::{PackratError, Result};
use crate::ui::theme::Theme;
use crate::ui::{OutputMode, UserInterface};

/// UI for a real terminal session.
pub struct TerminalUI {
    mode: OutputMode,
    interactive: bool,
    theme: Theme,
}

impl TerminalUI {
    /// Create a terminal UI. Colors follow the terminal's capabilities
    /// and `NO_COLOR`.
    pub fn new(interactive: bool, mode: OutputMode) -> Self {
        let theme = if console::colors_enabled() {
            Theme::new()
        } else {
            Theme::plain()
        };
        Self {
            mode,
            interactive,
            theme,
        }
    }
}

/// Create the UI appropriate for the current session.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(interactive, mode))
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn message(&mut self, msg: &str) {
        if self.mode != OutputMode::Quiet {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode != OutputMode::Quiet {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        if !self.interactive {
            return Ok(default);
        }
        let answer = Confirm::new()
            .with_prompt(question)
            .default(default)
            .interact()
            .map_err(anyhow::Error::from)?;
        Ok(answer)
    }

    fn multi_select(&mut self, question: &str, options: &[String]) -> Result<Vec<String>> {
        if !self.interactive {
            return Err(PackratError::NothingSelected {
                message: "an interactive terminal is required to select units".to_string(),
            });
        }
        let chosen = MultiSelect::new()
            .with_prompt(question)
            .items(options)
            .interact()
            .map_err(anyhow::Error::from)?;
        Ok(chosen.into_iter().map(|i| options[i].clone()).collect())
    }
}
