//! Error types for Packrat operations.
//!
//! This module defines [`PackratError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Scan-level failures (bad root, broken walk) are fatal and propagate
//! - Per-descriptor parse failures degrade to warnings unless `--strict`
//! - Per-unit import failures are reported and the batch continues

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Packrat operations.
#[derive(Debug, Error)]
pub enum PackratError {
    /// Scan root is missing, empty, or not a directory.
    #[error("Scan root is not a directory: {path}")]
    InvalidScanRoot { path: PathBuf },

    /// The filesystem walk itself failed; aborts the whole scan.
    #[error("Catalog scan failed: {message}")]
    ScanFailed { message: String },

    /// A single unit descriptor is malformed.
    #[error("Failed to parse descriptor at {path}: {message}")]
    DescriptorParse { path: PathBuf, message: String },

    /// An individual unit could not be materialized into the workspace.
    #[error("Import of '{unit}' failed: {message}")]
    ImportFailed { unit: String, message: String },

    /// No units were selected for an operation that needs a selection.
    #[error("No units selected: {message}")]
    NothingSelected { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Packrat operations.
pub type Result<T> = std::result::Result<T, PackratError>;
