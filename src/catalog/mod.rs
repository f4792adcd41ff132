//! Unit catalog: discovery and descriptor parsing.
//!
//! A [`Catalog`] maps unit identifiers to [`Unit`] records. It is built
//! fresh per scan by the [`Scanner`], which walks a source tree looking
//! for `.project` descriptors and reads each unit's dependencies from a
//! sibling `feature.xml` and/or `META-INF/MANIFEST.MF`.

mod descriptor;
mod feature;
mod manifest;
pub mod scanner;
pub mod unit;

pub use scanner::{ScanOptions, ScanOutcome, ScanWarning, Scanner};
pub use unit::Unit;

use std::collections::HashMap;

/// All units discovered by one scan, keyed by unit id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    units: HashMap<String, Unit>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a unit by id.
    pub fn get(&self, id: &str) -> Option<&Unit> {
        self.units.get(id)
    }

    /// Check whether a unit id is present.
    pub fn contains(&self, id: &str) -> bool {
        self.units.contains_key(id)
    }

    /// Insert a unit keyed by its id.
    ///
    /// Returns the previously stored record when the id was already
    /// present (last write wins; the scanner reports this as a warning).
    pub fn insert(&mut self, unit: Unit) -> Option<Unit> {
        self.units.insert(unit.id().to_string(), unit)
    }

    /// Number of units in the catalog.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Iterate over all units in unspecified order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    /// All unit ids, sorted for stable display.
    pub fn ids_sorted(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.units.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(id: &str) -> Unit {
        Unit::new(id, format!("/tree/{id}/.project"), vec![])
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.get("anything").is_none());
    }

    #[test]
    fn insert_and_lookup() {
        let mut catalog = Catalog::new();
        catalog.insert(unit("org.example.a"));
        assert!(catalog.contains("org.example.a"));
        assert_eq!(catalog.get("org.example.a").unwrap().id(), "org.example.a");
    }

    #[test]
    fn duplicate_insert_returns_previous() {
        let mut catalog = Catalog::new();
        assert!(catalog.insert(unit("dup")).is_none());
        let previous = catalog.insert(Unit::new("dup", "/other/.project", vec![]));
        assert!(previous.is_some());
        assert_eq!(catalog.len(), 1);
        // Last write wins.
        assert_eq!(
            catalog.get("dup").unwrap().path(),
            std::path::Path::new("/other/.project")
        );
    }

    #[test]
    fn ids_sorted_is_stable() {
        let mut catalog = Catalog::new();
        catalog.insert(unit("b"));
        catalog.insert(unit("a"));
        catalog.insert(unit("c"));
        assert_eq!(catalog.ids_sorted(), ["a", "b", "c"]);
    }
}
