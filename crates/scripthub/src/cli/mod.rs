//! Command-line interface for scripthub.
//!
//! This module provides the CLI structure for the `shub` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, EditCommand, ListCommand, PathCommand, PathSpecifier, RemoveCommand, RunCommand,
};

/// shub - keep track of all your scripts
///
/// Registers named scripts in a personal library and runs, edits, or
/// resolves them by name.
#[derive(Debug, Parser)]
#[command(name = "shub")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all available scripts
    #[command(visible_alias = "ls")]
    List(ListCommand),

    /// Edit the given script
    #[command(visible_alias = "e")]
    Edit(EditCommand),

    /// Add a script to your library
    #[command(visible_alias = "a")]
    Add(AddCommand),

    /// Remove a script from your library
    #[command(visible_alias = "rm")]
    Remove(RemoveCommand),

    /// Run a script from your library
    #[command(visible_alias = "r")]
    Run(RunCommand),

    /// Get paths of a script
    #[command(visible_alias = "p")]
    Path(PathCommand),

    /// Set up the script registry
    Setup,
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
