//! Workspace importer: materializes a unit by copying its project
//! directory into the workspace.

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::Unit;
use crate::error::{PackratError, Result};
use crate::import::UnitInstaller;

/// Copies unit project directories into a workspace directory.
///
/// Each unit lands at `<workspace>/<unit id>`. An already-existing
/// target is a per-unit failure, never an overwrite; the rest of the
/// batch proceeds.
#[derive(Debug, Clone)]
pub struct WorkspaceImporter {
    workspace: PathBuf,
}

impl WorkspaceImporter {
    /// Create an importer targeting the given workspace directory. The
    /// directory is created on first install if missing.
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self {
            workspace: workspace.into(),
        }
    }

    /// The workspace directory.
    pub fn workspace(&self) -> &Path {
        &self.workspace
    }

    fn import_unit(&self, unit: &Unit) -> Result<()> {
        let source = unit.project_dir().ok_or_else(|| PackratError::ImportFailed {
            unit: unit.id().to_string(),
            message: format!("descriptor has no parent directory: {}", unit.path().display()),
        })?;

        let target = self.workspace.join(unit.id());
        if target.exists() {
            return Err(PackratError::ImportFailed {
                unit: unit.id().to_string(),
                message: format!("already present in workspace: {}", target.display()),
            });
        }

        fs::create_dir_all(&self.workspace)?;
        copy_dir(source, &target)?;
        Ok(())
    }
}

impl UnitInstaller for WorkspaceImporter {
    fn install(&mut self, unit: &Unit) -> Result<()> {
        tracing::debug!(id = unit.id(), workspace = %self.workspace.display(), "importing unit");
        self.import_unit(unit)
    }
}

/// Recursively copy a directory tree. Symlinks are skipped.
fn copy_dir(source: &Path, target: &Path) -> Result<()> {
    fs::create_dir_all(target)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let dest = target.join(entry.file_name());
        if file_type.is_dir() {
            copy_dir(&entry.path(), &dest)?;
        } else if file_type.is_file() {
            fs::copy(entry.path(), &dest)?;
        }
    }
    Ok(())
}
