//! Dependency closure computation and installation driving.
//!
//! Given a catalog, a requested set of unit ids, and a test-inclusion
//! flag, [`Resolver`] computes the transitive closure of units to
//! install: the requested units plus everything they pull in, optionally
//! with each visited unit's test counterpart.
//!
//! The closure walk uses an explicit worklist with a visited set rather
//! than recursion, so pathological dependency graphs cannot exhaust the
//! call stack. The visited set is what makes cycles terminate and
//! diamond graphs count each unit once.

pub mod naming;

pub use naming::{SuffixNaming, TestNaming};

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::import::{ImportFailure, ImportObserver, ImportReport, UnitInstaller};

/// Computes closures over a catalog and drives unit installation.
pub struct Resolver<'a> {
    catalog: &'a Catalog,
    include_tests: bool,
    naming: Box<dyn TestNaming>,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over a catalog. Test units are excluded by
    /// default and named by [`SuffixNaming`].
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            include_tests: false,
            naming: Box::<SuffixNaming>::default(),
        }
    }

    /// Also pull in the test counterpart of every unit in the closure.
    pub fn include_tests(mut self, include: bool) -> Self {
        self.include_tests = include;
        self
    }

    /// Swap the test-unit naming policy.
    pub fn test_naming(mut self, naming: Box<dyn TestNaming>) -> Self {
        self.naming = naming;
        self
    }

    /// The transitive closure over the requested ids.
    ///
    /// Ids absent from the catalog contribute nothing, including
    /// requested ids themselves. When tests are included, the expansion
    /// applies to every visited unit, not only the requested roots, and
    /// a test unit's own dependencies are expanded in turn.
    pub fn closure(&self, requested: &[String]) -> HashSet<String> {
        let mut visited = HashSet::new();
        let mut worklist: Vec<String> = requested.to_vec();

        while let Some(id) = worklist.pop() {
            let Some(unit) = self.catalog.get(&id) else {
                // Dependency not found in the catalog; dropped.
                continue;
            };
            if visited.contains(&id) {
                continue;
            }
            worklist.extend(unit.dependencies().iter().cloned());
            if self.include_tests {
                worklist.push(self.naming.test_id(&id));
            }
            visited.insert(id);
        }

        visited
    }

    /// Cardinality of the closure; what a progress bar should count to.
    pub fn closure_size(&self, requested: &[String]) -> usize {
        self.closure(requested).len()
    }

    /// Compute the closure and install every member.
    ///
    /// Members are installed in sorted id order; the closure carries no
    /// dependency ordering, so installers must not rely on dependencies
    /// arriving first. One member failing does not stop the batch: the
    /// failure lands in the report and the next member is attempted. The
    /// observer is notified once per successful install.
    pub fn resolve_and_install(
        &self,
        requested: &[String],
        installer: &mut dyn UnitInstaller,
        mut observer: Option<&mut dyn ImportObserver>,
    ) -> ImportReport {
        let mut members: Vec<String> = self.closure(requested).into_iter().collect();
        members.sort_unstable();

        let mut report = ImportReport::default();
        for id in members {
            // Closure members always come from the catalog.
            let Some(unit) = self.catalog.get(&id) else {
                continue;
            };
            match installer.install(unit) {
                Ok(()) => {
                    tracing::info!(id = %id, "unit installed");
                    if let Some(observer) = observer.as_deref_mut() {
                        observer.unit_installed(&id);
                    }
                    report.installed.push(id);
                }
                Err(e) => {
                    tracing::warn!(id = %id, error = %e, "unit install failed");
                    report.failed.push(ImportFailure {
                        unit: id,
                        message: e.to_string(),
                    });
                }
            }
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Unit;
    use crate::error::PackratError;
    use crate::error::Result;

    fn catalog(entries: &[(&str, &[&str])]) -> Catalog {
        let mut catalog = Catalog::new();
        for (id, deps) in entries {
            catalog.insert(Unit::new(
                *id,
                format!("/tree/{id}/.project"),
                deps.iter().map(|d| d.to_string()).collect(),
            ));
        }
        catalog
    }

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    /// Installer that records every attempt and fails on listed ids.
    #[derive(Default)]
    struct RecordingInstaller {
        attempted: Vec<String>,
        fail_on: Vec<String>,
    }

    impl UnitInstaller for RecordingInstaller {
        fn install(&mut self, unit: &Unit) -> Result<()> {
            self.attempted.push(unit.id().to_string());
            if self.fail_on.iter().any(|f| f == unit.id()) {
                return Err(PackratError::ImportFailed {
                    unit: unit.id().to_string(),
                    message: "simulated failure".to_string(),
                });
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        notified: Vec<String>,
    }

    impl ImportObserver for RecordingObserver {
        fn unit_installed(&mut self, id: &str) {
            self.notified.push(id.to_string());
        }
    }

    #[test]
    fn requested_units_appear_in_their_own_closure() {
        let catalog = catalog(&[("a", &[]), ("b", &[])]);
        let resolver = Resolver::new(&catalog);
        assert_eq!(resolver.closure(&ids(&["a", "b"])), set(&["a", "b"]));
    }

    #[test]
    fn closure_follows_transitive_dependencies() {
        let catalog = catalog(&[("a", &["b"]), ("b", &["c"]), ("c", &[])]);
        let resolver = Resolver::new(&catalog);
        assert_eq!(resolver.closure(&ids(&["a"])), set(&["a", "b", "c"]));
    }

    #[test]
    fn cyclic_graphs_terminate() {
        let catalog = catalog(&[("a", &["b"]), ("b", &["a"])]);
        let resolver = Resolver::new(&catalog);
        assert_eq!(resolver.closure(&ids(&["a"])), set(&["a", "b"]));
    }

    #[test]
    fn self_dependency_terminates() {
        let catalog = catalog(&[("a", &["a"])]);
        let resolver = Resolver::new(&catalog);
        assert_eq!(resolver.closure(&ids(&["a"])), set(&["a"]));
    }

    #[test]
    fn diamond_graphs_are_deduplicated() {
        let catalog = catalog(&[("a", &["b", "c"]), ("b", &["d"]), ("c", &["d"]), ("d", &[])]);
        let resolver = Resolver::new(&catalog);
        let closure = resolver.closure(&ids(&["a"]));
        assert_eq!(closure, set(&["a", "b", "c", "d"]));
        assert_eq!(resolver.closure_size(&ids(&["a"])), 4);
    }

    #[test]
    fn unknown_requested_id_is_a_no_op() {
        let catalog = catalog(&[]);
        let resolver = Resolver::new(&catalog);
        assert!(resolver.closure(&ids(&["X"])).is_empty());
    }

    #[test]
    fn unknown_dependencies_are_silently_dropped() {
        let catalog = catalog(&[("a", &["ghost", "b"]), ("b", &[])]);
        let resolver = Resolver::new(&catalog);
        assert_eq!(resolver.closure(&ids(&["a"])), set(&["a", "b"]));
    }

    #[test]
    fn closure_is_a_dependency_fixed_point() {
        let catalog = catalog(&[
            ("a", &["b", "missing"]),
            ("b", &["c", "a"]),
            ("c", &[]),
            ("unrelated", &[]),
        ]);
        let resolver = Resolver::new(&catalog);
        let closure = resolver.closure(&ids(&["a"]));
        for id in &closure {
            for dep in catalog.get(id).unwrap().dependencies() {
                if catalog.contains(dep) {
                    assert!(closure.contains(dep), "{dep} escaped the closure");
                }
            }
        }
    }

    #[test]
    fn test_units_are_excluded_by_default() {
        let catalog = catalog(&[("a", &[]), ("a.test", &[])]);
        let resolver = Resolver::new(&catalog);
        assert_eq!(resolver.closure(&ids(&["a"])), set(&["a"]));
    }

    #[test]
    fn test_units_are_included_on_request() {
        let catalog = catalog(&[("a", &[]), ("a.test", &[])]);
        let resolver = Resolver::new(&catalog).include_tests(true);
        assert_eq!(resolver.closure(&ids(&["a"])), set(&["a", "a.test"]));
    }

    #[test]
    fn dependency_test_units_are_pulled_in_too() {
        // Expansion applies to every visited unit, not only the roots.
        let catalog = catalog(&[("a", &["b"]), ("b", &[]), ("b.test", &[])]);
        let resolver = Resolver::new(&catalog).include_tests(true);
        assert_eq!(resolver.closure(&ids(&["a"])), set(&["a", "b", "b.test"]));
    }

    #[test]
    fn test_unit_dependencies_are_expanded() {
        let catalog = catalog(&[("a", &[]), ("a.test", &["mockkit"]), ("mockkit", &[])]);
        let resolver = Resolver::new(&catalog).include_tests(true);
        assert_eq!(
            resolver.closure(&ids(&["a"])),
            set(&["a", "a.test", "mockkit"])
        );
    }

    #[test]
    fn custom_naming_policy_is_honored() {
        let catalog = catalog(&[("a", &[]), ("a-tests", &[])]);
        let resolver = Resolver::new(&catalog)
            .include_tests(true)
            .test_naming(Box::new(SuffixNaming::new("-tests")));
        assert_eq!(resolver.closure(&ids(&["a"])), set(&["a", "a-tests"]));
    }

    #[test]
    fn install_covers_every_closure_member() {
        let catalog = catalog(&[("a", &["b"]), ("b", &["c"]), ("c", &[])]);
        let resolver = Resolver::new(&catalog);
        let mut installer = RecordingInstaller::default();

        let report = resolver.resolve_and_install(&ids(&["a"]), &mut installer, None);
        assert!(report.is_complete());
        assert_eq!(report.installed.len(), 3);
        assert_eq!(installer.attempted.len(), 3);
    }

    #[test]
    fn one_failure_does_not_stop_the_batch() {
        let catalog = catalog(&[("a", &["b", "c"]), ("b", &[]), ("c", &[])]);
        let resolver = Resolver::new(&catalog);
        let mut installer = RecordingInstaller {
            fail_on: vec!["b".to_string()],
            ..Default::default()
        };
        let mut observer = RecordingObserver::default();

        let report =
            resolver.resolve_and_install(&ids(&["a"]), &mut installer, Some(&mut observer));

        // All three members were attempted despite the failure.
        assert_eq!(installer.attempted.len(), 3);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].unit, "b");
        assert_eq!(report.installed, vec!["a".to_string(), "c".to_string()]);
        // Observer only hears about successes.
        assert_eq!(observer.notified, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn observer_is_notified_once_per_member() {
        let catalog = catalog(&[("a", &["b"]), ("b", &[])]);
        let resolver = Resolver::new(&catalog);
        let mut installer = RecordingInstaller::default();
        let mut observer = RecordingObserver::default();

        resolver.resolve_and_install(&ids(&["a"]), &mut installer, Some(&mut observer));
        assert_eq!(observer.notified.len(), 2);
    }
}
