//! List command implementation.
//!
//! The `packrat list` command scans a source tree and lists every unit
//! found, with its dependency count.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::{Theme, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::scan_with_warnings;

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = scan_with_warnings(&self.args.root, self.args.strict, ui)?;

        if self.args.json {
            let mut units: Vec<_> = outcome.catalog.units().collect();
            units.sort_by_key(|u| u.id().to_string());
            ui.message(&serde_json::to_string_pretty(&units).map_err(anyhow::Error::from)?);
            return Ok(CommandResult::success());
        }

        if outcome.catalog.is_empty() {
            ui.message(&format!(
                "No units found under {}",
                self.args.root.display()
            ));
            return Ok(CommandResult::success());
        }

        let theme = Theme::new();
        ui.message(&format!(
            "  {}",
            theme.key.apply_to(format!(
                "Units under {} ({}):",
                self.args.root.display(),
                outcome.catalog.len()
            ))
        ));
        let mut units: Vec<_> = outcome.catalog.units().collect();
        units.sort_by_key(|u| u.id().to_string());
        for unit in units {
            let detail = match unit.dependencies().len() {
                0 => String::new(),
                1 => format!(" {}", theme.dim.apply_to("(1 dependency)")),
                n => format!(" {}", theme.dim.apply_to(format!("({} dependencies)", n))),
            };
            ui.message(&format!(
                "    {}{}",
                theme.highlight.apply_to(unit.id()),
                detail
            ));
        }

        Ok(CommandResult::success())
    }
}
