//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Packrat - Workspace import for plug-in and feature source trees.
#[derive(Debug, Parser)]
#[command(name = "packrat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan a source tree and list the units found
    List(ListArgs),

    /// Compute the dependency closure of selected units
    Resolve(ResolveArgs),

    /// Import selected units and their dependencies into a workspace
    Import(ImportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ListArgs {
    /// Root of the source tree to scan
    pub root: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Fail on the first malformed descriptor instead of warning
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ResolveArgs {
    /// Root of the source tree to scan
    pub root: PathBuf,

    /// Units to resolve (ids as declared in their descriptors)
    pub units: Vec<String>,

    /// Also include each unit's test counterpart
    #[arg(long)]
    pub with_tests: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Fail on the first malformed descriptor instead of warning
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `import` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ImportArgs {
    /// Root of the source tree to scan
    pub root: PathBuf,

    /// Units to import (prompts for a selection when omitted)
    pub units: Vec<String>,

    /// Workspace directory to import into
    #[arg(short, long, env = "PACKRAT_WORKSPACE")]
    pub workspace: PathBuf,

    /// Also import each unit's test counterpart
    #[arg(long)]
    pub with_tests: bool,

    /// Print what would be imported without touching the workspace
    #[arg(long)]
    pub dry_run: bool,

    /// Fail on the first malformed descriptor instead of warning
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
