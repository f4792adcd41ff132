//! Packrat - dependency-aware import of unit source trees.
//!
//! Packrat scans a directory tree for importable units, resolves the
//! transitive dependency closure of a selection, and copies every
//! closure member into a target workspace.
//!
//! # Modules
//!
//! - [`catalog`] - Tree scanning and unit descriptor parsing
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`import`] - Workspace import and install reporting
//! - [`resolver`] - Dependency closure resolution
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```no_run
//! use packrat::catalog::{ScanOptions, Scanner};
//! use packrat::resolver::Resolver;
//!
//! let outcome = Scanner::new(ScanOptions::default()).scan("/src/tree".as_ref()).unwrap();
//! let resolver = Resolver::new(&outcome.catalog);
//! let members = resolver.closure(&["org.example.app".to_string()]);
//! assert!(members.len() <= outcome.catalog.len());
//! ```

pub mod catalog;
pub mod cli;
pub mod error;
pub mod import;
pub mod resolver;
pub mod ui;

pub use error::{PackratError, Result};
