//! Resolve command implementation.
//!
//! The `packrat resolve` command computes the transitive dependency
//! closure of the requested units and prints its members and size,
//! without touching any workspace.

use serde::Serialize;

use crate::cli::args::ResolveArgs;
use crate::error::Result;
use crate::resolver::Resolver;
use crate::ui::{Theme, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::scan_with_warnings;

/// The resolve command implementation.
pub struct ResolveCommand {
    args: ResolveArgs,
}

#[derive(Serialize)]
struct ResolveOutput<'a> {
    units: &'a [String],
    count: usize,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(args: ResolveArgs) -> Self {
        Self { args }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let outcome = scan_with_warnings(&self.args.root, self.args.strict, ui)?;

        for id in &self.args.units {
            if !outcome.catalog.contains(id) {
                ui.warning(&format!("requested unit '{}' is not in the catalog", id));
            }
        }

        let resolver = Resolver::new(&outcome.catalog).include_tests(self.args.with_tests);
        let mut members: Vec<String> = resolver.closure(&self.args.units).into_iter().collect();
        members.sort_unstable();

        if self.args.json {
            let output = ResolveOutput {
                units: &members,
                count: members.len(),
            };
            ui.message(&serde_json::to_string_pretty(&output).map_err(anyhow::Error::from)?);
            return Ok(CommandResult::success());
        }

        let theme = Theme::new();
        for id in &members {
            ui.message(&format!("  {}", theme.highlight.apply_to(id)));
        }
        ui.message(&format!(
            "{} unit(s) to import",
            theme.key.apply_to(members.len())
        ));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_unit(root: &Path, dir: &str, id: &str, require_bundle: Option<&str>) {
        let unit_dir = root.join(dir);
        fs::create_dir_all(&unit_dir).unwrap();
        fs::write(
            unit_dir.join(".project"),
            format!("<projectDescription><name>{id}</name></projectDescription>"),
        )
        .unwrap();
        if let Some(bundles) = require_bundle {
            let meta = unit_dir.join("META-INF");
            fs::create_dir_all(&meta).unwrap();
            fs::write(
                meta.join("MANIFEST.MF"),
                format!("Manifest-Version: 1.0\nRequire-Bundle: {bundles}\n"),
            )
            .unwrap();
        }
    }

    fn args(root: &Path, units: &[&str]) -> ResolveArgs {
        ResolveArgs {
            root: root.to_path_buf(),
            units: units.iter().map(|s| s.to_string()).collect(),
            with_tests: false,
            json: false,
            strict: false,
        }
    }

    #[test]
    fn resolve_reports_closure_and_count() {
        let temp = TempDir::new().unwrap();
        write_unit(temp.path(), "app", "org.example.app", Some("org.example.core"));
        write_unit(temp.path(), "core", "org.example.core", None);

        let cmd = ResolveCommand::new(args(temp.path(), &["org.example.app"]));
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("org.example.app"));
        assert!(ui.has_message("org.example.core"));
        assert!(ui.has_message("2 unit(s) to import"));
    }

    #[test]
    fn resolve_warns_about_unknown_requested_units() {
        let temp = TempDir::new().unwrap();
        write_unit(temp.path(), "core", "org.example.core", None);

        let cmd = ResolveCommand::new(args(temp.path(), &["org.example.ghost"]));
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_warning("org.example.ghost"));
        assert!(ui.has_message("0 unit(s) to import"));
    }

    #[test]
    fn resolve_with_tests_pulls_in_test_units() {
        let temp = TempDir::new().unwrap();
        write_unit(temp.path(), "core", "org.example.core", None);
        write_unit(temp.path(), "core-test", "org.example.core.test", None);

        let cmd = ResolveCommand::new(ResolveArgs {
            with_tests: true,
            ..args(temp.path(), &["org.example.core"])
        });
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("org.example.core.test"));
        assert!(ui.has_message("2 unit(s) to import"));
    }

    #[test]
    fn resolve_json_reports_count() {
        let temp = TempDir::new().unwrap();
        write_unit(temp.path(), "core", "org.example.core", None);

        let cmd = ResolveCommand::new(ResolveArgs {
            json: true,
            ..args(temp.path(), &["org.example.core"])
        });
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        let payload: serde_json::Value =
            serde_json::from_str(ui.messages().last().unwrap()).unwrap();
        assert_eq!(payload["count"], 1);
        assert_eq!(payload["units"][0], "org.example.core");
    }
}
