//! `scripthub` - a personal script registry
//!
//! This library provides the core functionality for registering named
//! scripts in a flat-file library and running, editing, or resolving
//! them by name.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod launch;
pub mod logging;
pub mod record;
pub mod registry;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use record::ScriptRecord;
pub use registry::{Registry, SetupOutcome};
