//! CLI command definitions.
//!
//! This module defines the argument structure of all CLI subcommands.
//! Each verb gets its own immutable struct, passed by value into its
//! handler.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Edit command arguments.
#[derive(Debug, Args)]
pub struct EditCommand {
    /// Name of the script to edit
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Name of script to add
    #[arg(short, long)]
    pub name: String,

    /// Path to executable
    #[arg(short = 'x', long)]
    pub executable: PathBuf,

    /// Path to editable (defaults to the executable path)
    #[arg(short, long)]
    pub editable: Option<PathBuf>,
}

/// Remove command arguments.
#[derive(Debug, Args)]
pub struct RemoveCommand {
    /// Name of the script to remove
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Run command arguments.
#[derive(Debug, Args)]
pub struct RunCommand {
    /// Name of the script to run
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Path command arguments.
#[derive(Debug, Args)]
pub struct PathCommand {
    /// Name of the script to look up
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Which path to print; prints a full summary when omitted
    #[arg(short, long, value_enum)]
    pub specifier: Option<PathSpecifier>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Which of a script's paths to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PathSpecifier {
    /// The executable path
    #[value(name = "x", alias = "executable")]
    Executable,
    /// The editable path
    #[value(name = "e", alias = "editable")]
    Editable,
}
