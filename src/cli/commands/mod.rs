//! CLI command implementations.

pub mod completions;
pub mod dispatcher;
pub mod import;
pub mod list;
pub mod resolve;

use std::path::Path;

use crate::catalog::{ScanOptions, ScanOutcome, Scanner};
use crate::error::Result;
use crate::ui::UserInterface;

/// Scan a tree and surface the scan warnings through the UI.
///
/// Shared by every command that needs a catalog.
fn scan_with_warnings(root: &Path, strict: bool, ui: &mut dyn UserInterface) -> Result<ScanOutcome> {
    let outcome = Scanner::new(ScanOptions { strict }).scan(root)?;
    for warning in &outcome.warnings {
        ui.warning(&warning.to_string());
    }
    Ok(outcome)
}
