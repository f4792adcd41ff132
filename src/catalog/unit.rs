//! The unit record: one discoverable plug-in or feature project.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// One installable unit found during a catalog scan.
///
/// A unit is a plug-in or feature project identified by the name declared
/// in its `.project` descriptor. The record is immutable once built; the
/// scanner constructs it and the resolver only reads it.
#[derive(Debug, Clone, Serialize)]
pub struct Unit {
    id: String,
    path: PathBuf,
    dependencies: Vec<String>,
}

impl Unit {
    /// Create a unit record.
    ///
    /// `path` is the location of the unit's primary descriptor. The
    /// dependency list may be empty and may contain duplicates; order is
    /// preserved but irrelevant to closure computation.
    pub fn new(id: impl Into<String>, path: impl Into<PathBuf>, dependencies: Vec<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            dependencies,
        }
    }

    /// The unit identifier, unique within a catalog.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Location of the unit's primary descriptor on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Declared dependency identifiers, in descriptor order.
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    /// The directory the unit lives in (parent of the descriptor).
    pub fn project_dir(&self) -> Option<&Path> {
        self.path.parent()
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.path == other.path
    }
}

impl Eq for Unit {}

impl std::hash::Hash for Unit {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.path.hash(state);
    }
}
