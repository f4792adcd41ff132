//! Recursive catalog scan over a source tree.
//!
//! The scanner walks every regular file under a root directory. Each
//! `.project` file marks a unit: its declared name becomes the unit id,
//! and a sibling `feature.xml` and/or `META-INF/MANIFEST.MF` contribute
//! dependency names.
//!
//! Descriptor parse failures are non-fatal by default: the offending
//! descriptor contributes nothing, a [`ScanWarning`] is recorded, and
//! the walk continues. `ScanOptions::strict` turns those failures into
//! hard errors. Only a broken walk (unreadable root, I/O error mid-walk)
//! aborts a lenient scan.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::catalog::{descriptor, feature, manifest, Catalog, Unit};
use crate::error::{PackratError, Result};

const PRIMARY_DESCRIPTOR: &str = ".project";
const FEATURE_DESCRIPTOR: &str = "feature.xml";
const BUNDLE_MANIFEST: &str = "META-INF/MANIFEST.MF";

/// Scan behavior knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Fail the scan on the first malformed descriptor instead of
    /// degrading to a warning.
    pub strict: bool,
}

/// A non-fatal problem found during a lenient scan.
#[derive(Debug, Clone)]
pub struct ScanWarning {
    /// The file the warning is about.
    pub path: PathBuf,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Result of one scan: the catalog plus everything that went wrong
/// without stopping the walk.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub catalog: Catalog,
    pub warnings: Vec<ScanWarning>,
}

/// Builds a [`Catalog`] from a source tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner {
    options: ScanOptions,
}

impl Scanner {
    /// Create a scanner with the given options.
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Walk `root` recursively and build the catalog.
    ///
    /// Fails when `root` is empty or not a directory, or when the
    /// traversal itself breaks. In strict mode, also fails on the first
    /// malformed descriptor.
    pub fn scan(&self, root: &Path) -> Result<ScanOutcome> {
        if root.as_os_str().is_empty() || !root.is_dir() {
            return Err(PackratError::InvalidScanRoot {
                path: root.to_path_buf(),
            });
        }

        let mut outcome = ScanOutcome::default();

        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| PackratError::ScanFailed {
                message: e.to_string(),
            })?;
            if !entry.file_type().is_file() || entry.file_name() != PRIMARY_DESCRIPTOR {
                continue;
            }

            if let Some(unit) = self.read_unit(entry.path(), &mut outcome.warnings)? {
                tracing::debug!(id = unit.id(), path = %unit.path().display(), "found unit");
                if let Some(previous) = outcome.catalog.insert(unit) {
                    warn(
                        &mut outcome.warnings,
                        entry.path(),
                        format!(
                            "duplicate unit id '{}' (replaces {})",
                            previous.id(),
                            previous.path().display()
                        ),
                    );
                }
            }
        }

        Ok(outcome)
    }

    /// Read one unit rooted at its primary descriptor.
    ///
    /// Returns `Ok(None)` when the primary descriptor is unreadable in
    /// lenient mode; sibling descriptor failures only cost their own
    /// dependency contributions.
    fn read_unit(&self, path: &Path, warnings: &mut Vec<ScanWarning>) -> Result<Option<Unit>> {
        let id = match read_and_parse(path, descriptor::unit_id) {
            Ok(id) => id,
            Err(e) => return self.degrade(path, e, warnings).map(|()| None),
        };

        let mut dependencies = Vec::new();
        let dir = path.parent().unwrap_or(Path::new(""));

        let feature_path = dir.join(FEATURE_DESCRIPTOR);
        if feature_path.is_file() {
            match read_and_parse(&feature_path, feature::dependencies) {
                Ok(deps) => dependencies.extend(deps),
                Err(e) => self.degrade(&feature_path, e, warnings)?,
            }
        }

        let manifest_path = dir.join(BUNDLE_MANIFEST);
        if manifest_path.is_file() {
            match fs::read_to_string(&manifest_path) {
                Ok(content) => dependencies.extend(manifest::require_bundle(&content)),
                Err(e) => self.degrade(&manifest_path, e.into(), warnings)?,
            }
        }

        Ok(Some(Unit::new(id, path, dependencies)))
    }

    /// Convert a descriptor failure into a warning, or into a hard error
    /// in strict mode.
    fn degrade(
        &self,
        path: &Path,
        error: anyhow::Error,
        warnings: &mut Vec<ScanWarning>,
    ) -> Result<()> {
        if self.options.strict {
            return Err(PackratError::DescriptorParse {
                path: path.to_path_buf(),
                message: error.to_string(),
            });
        }
        warn(warnings, path, error.to_string());
        Ok(())
    }
}

fn read_and_parse<T>(path: &Path, parse: fn(&str) -> anyhow::Result<T>) -> anyhow::Result<T> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

fn warn(warnings: &mut Vec<ScanWarning>, path: &Path, message: String) {
    tracing::warn!(path = %path.display(), %message, "scan warning");
    warnings.push(ScanWarning {
        path: path.to_path_buf(),
        message,
    });
}
