//! Unit installation: the installer seam and the workspace importer.
//!
//! The resolver drives installation through [`UnitInstaller`] and reports
//! per-unit progress through [`ImportObserver`]. The concrete
//! [`WorkspaceImporter`] materializes units by copying their project
//! directories into a workspace directory.

pub mod workspace;

pub use workspace::WorkspaceImporter;

use serde::Serialize;

use crate::catalog::Unit;
use crate::error::Result;

/// Materializes one unit into the target workspace.
///
/// Implementations may fail per unit; the resolver records the failure
/// and carries on with the rest of the batch.
pub trait UnitInstaller {
    /// Install a single unit.
    fn install(&mut self, unit: &Unit) -> Result<()>;
}

/// Notified once per successfully installed unit, in installation order.
pub trait ImportObserver {
    /// A unit was installed.
    fn unit_installed(&mut self, id: &str);
}

/// Outcome of one installation batch.
///
/// Partial completion is an accepted outcome: failed members are listed
/// here, nothing is rolled back.
#[derive(Debug, Default, Serialize)]
pub struct ImportReport {
    /// Units installed successfully, in installation order.
    pub installed: Vec<String>,
    /// Units whose installation failed.
    pub failed: Vec<ImportFailure>,
}

/// One failed member of an installation batch.
#[derive(Debug, Serialize)]
pub struct ImportFailure {
    /// The unit id.
    pub unit: String,
    /// Why the installation failed.
    pub message: String,
}

impl ImportReport {
    /// True when every member installed successfully.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Total number of attempted installs.
    pub fn attempted(&self) -> usize {
        self.installed.len() + self.failed.len()
    }
}
