//! Import command implementation.
//!
//! The `packrat import` command scans a source tree, resolves the
//! dependency closure of the selected units, and materializes every
//! member into the workspace directory. When no units are named on the
//! command line, an interactive multi-select is offered.

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::args::ImportArgs;
use crate::error::Result;
use crate::import::{ImportObserver, WorkspaceImporter};
use crate::resolver::Resolver;
use crate::ui::{Theme, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::scan_with_warnings;

/// The import command implementation.
pub struct ImportCommand {
    args: ImportArgs,
}

impl ImportCommand {
    /// Create a new import command.
    pub fn new(args: ImportArgs) -> Self {
        Self { args }
    }

    /// Determine the selected unit ids, prompting when none were given.
    fn select_units(
        &self,
        catalog_ids: Vec<String>,
        ui: &mut dyn UserInterface,
    ) -> Result<Vec<String>> {
        if !self.args.units.is_empty() {
            return Ok(self.args.units.clone());
        }
        ui.multi_select("Select units to import", &catalog_ids)
    }
}

impl Command for ImportCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = scan_with_warnings(&self.args.root, self.args.strict, ui)?;
        if outcome.catalog.is_empty() {
            ui.error(&format!(
                "No units found under {}",
                self.args.root.display()
            ));
            return Ok(CommandResult::failure(2));
        }

        let catalog_ids: Vec<String> = outcome
            .catalog
            .ids_sorted()
            .into_iter()
            .map(str::to_string)
            .collect();
        let selected = self.select_units(catalog_ids, ui)?;
        if selected.is_empty() {
            ui.error("Nothing selected, nothing to import.");
            return Ok(CommandResult::failure(2));
        }

        for id in &selected {
            if !outcome.catalog.contains(id) {
                ui.warning(&format!("requested unit '{}' is not in the catalog", id));
            }
        }

        // The flag wins; otherwise ask, the way the wizard's checkbox did.
        let with_tests = self.args.with_tests
            || (ui.is_interactive() && ui.confirm("Include test units?", false)?);

        let resolver = Resolver::new(&outcome.catalog).include_tests(with_tests);
        let total = resolver.closure_size(&selected);

        if self.args.dry_run {
            let theme = Theme::new();
            let mut members: Vec<String> = resolver.closure(&selected).into_iter().collect();
            members.sort_unstable();
            for id in &members {
                ui.message(&format!("  {}", theme.highlight.apply_to(id)));
            }
            ui.message(&format!("Would import {} unit(s) (dry-run mode)", total));
            return Ok(CommandResult::success());
        }

        let mut importer = WorkspaceImporter::new(&self.args.workspace);
        let mut progress = BarObserver::new(total, ui.is_interactive());
        let report = resolver.resolve_and_install(&selected, &mut importer, Some(&mut progress));
        progress.finish();

        for failure in &report.failed {
            ui.error(&format!("{}: {}", failure.unit, failure.message));
        }

        if report.is_complete() {
            ui.success(&format!(
                "Imported {} unit(s) into {}",
                report.installed.len(),
                self.args.workspace.display()
            ));
            Ok(CommandResult::success())
        } else {
            ui.warning(&format!(
                "Imported {} of {} unit(s); {} failed",
                report.installed.len(),
                report.attempted(),
                report.failed.len()
            ));
            Ok(CommandResult::failure(1))
        }
    }
}

/// Progress-bar observer: one tick per imported unit.
struct BarObserver {
    bar: ProgressBar,
}

impl BarObserver {
    fn new(total: usize, interactive: bool) -> Self {
        let bar = if interactive {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(
                ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar
        } else {
            ProgressBar::hidden()
        };
        Self { bar }
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ImportObserver for BarObserver {
    fn unit_installed(&mut self, id: &str) {
        self.bar.set_message(id.to_string());
        self.bar.inc(1);
    }
}
