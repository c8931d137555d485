//! Error types for scripthub.
//!
//! This module defines all error types used throughout the scripthub crate.
//! Every operation propagates its result up to the binary boundary, which
//! decides once whether to print and exit.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for scripthub operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Registry Errors ===
    /// The registry file does not exist yet.
    #[error("registry file not found at {path}; run `shub setup` first")]
    RegistryMissing {
        /// Expected location of the registry file.
        path: PathBuf,
    },

    /// Reading the registry file failed.
    #[error("failed to read registry at {path}: {source}")]
    RegistryRead {
        /// Path to the registry file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Writing the registry file failed.
    #[error("failed to write registry at {path}: {source}")]
    RegistryWrite {
        /// Path to the registry file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Record Errors ===
    /// A registry line did not parse into a record.
    #[error("malformed registry line: {line:?}")]
    RecordMalformed {
        /// The offending line, verbatim.
        line: String,
    },

    /// A record field would corrupt the registry format.
    #[error("invalid {field} {value:?}: must be non-empty and free of \" : \" and line breaks")]
    InvalidField {
        /// Which field was rejected.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// No registered script has the requested name.
    #[error("could not find script {name:?} in scripts")]
    ScriptNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// A script with this name is already registered.
    #[error("script {name:?} is already registered")]
    DuplicateScript {
        /// The conflicting name.
        name: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Process Errors ===
    /// An external program could not be started.
    #[error("failed to launch {program}: {source}")]
    Launch {
        /// The program that was spawned.
        program: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// An external program ran but did not exit cleanly.
    #[error("{program} exited unsuccessfully{}", fmt_exit_code(*code))]
    ChildExit {
        /// The program that failed.
        program: PathBuf,
        /// Exit code, absent if the child was killed by a signal.
        code: Option<i32>,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for scripthub operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an invalid-field error.
    #[must_use]
    pub fn invalid_field(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            value: value.into(),
        }
    }

    /// Create a script-not-found error.
    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ScriptNotFound { name: name.into() }
    }

    /// Check if this error means the requested script does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ScriptNotFound { .. })
    }

    /// Check if this error means the registry file has not been set up.
    #[must_use]
    pub fn is_registry_missing(&self) -> bool {
        matches!(self, Self::RegistryMissing { .. })
    }
}

fn fmt_exit_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!(" (status {code})"),
        None => " (terminated by signal)".to_string(),
    }
}
