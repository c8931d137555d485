//! Flat-file registry store for scripthub.
//!
//! The registry is a newline-separated text file, one record per line,
//! living at a path chosen by configuration. Every operation is a one-shot
//! read-transform-write cycle over the whole file; there is no session
//! state, no index, and no locking.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::{decode_record, encode_record, ScriptRecord};

/// The authoritative set of script records, persisted as a flat file.
///
/// The backing path is injected at construction so tests can point a
/// registry at a scratch location.
#[derive(Debug, Clone)]
pub struct Registry {
    /// Path to the backing file.
    path: PathBuf,
}

/// Result of an idempotent [`Registry::init`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupOutcome {
    /// The backing file was absent and has been created empty.
    Created,
    /// The backing file already existed; these are its records.
    Existing(Vec<ScriptRecord>),
}

impl Registry {
    /// Create a registry handle for the given backing file.
    ///
    /// No I/O happens here; the file is touched per operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode every record, in file order.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::RegistryMissing`] if the backing file does not
    /// exist (run setup first), [`Error::RegistryRead`] on other I/O
    /// faults, or [`Error::RecordMalformed`] if any line does not parse.
    /// A malformed line aborts the whole load.
    pub fn load_all(&self) -> Result<Vec<ScriptRecord>> {
        let text = self.read_text()?;
        text.lines()
            .filter(|line| !line.is_empty())
            .map(decode_record)
            .collect()
    }

    /// Find the first record whose name exactly equals `name`.
    ///
    /// Linear scan over [`Self::load_all`]; fine at the expected scale of
    /// tens to low hundreds of entries.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::ScriptNotFound`] if no record matches, or with
    /// any [`Self::load_all`] error.
    pub fn find(&self, name: &str) -> Result<ScriptRecord> {
        self.load_all()?
            .into_iter()
            .find(|record| record.name == name)
            .ok_or_else(|| Error::not_found(name))
    }

    /// Append a record, resolving its paths against the current working
    /// directory.
    ///
    /// # Errors
    ///
    /// See [`Self::append_from`].
    pub fn append(&self, record: ScriptRecord) -> Result<ScriptRecord> {
        let cwd = std::env::current_dir()?;
        self.append_from(record, &cwd)
    }

    /// Append a record, resolving relative paths against `base`.
    ///
    /// The backing file is created if absent. Returns the record as
    /// stored, with both paths absolute.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::DuplicateScript`] if a record with the same
    /// name already exists, [`Error::InvalidField`] if a field would
    /// corrupt the line format, or [`Error::RegistryWrite`] on I/O
    /// faults.
    pub fn append_from(&self, record: ScriptRecord, base: &Path) -> Result<ScriptRecord> {
        let record = record.resolve_against(base);

        // A missing file counts as an empty registry here; append is the
        // one operation allowed to create it.
        let existing = match self.load_all() {
            Ok(records) => records,
            Err(err) if err.is_registry_missing() => Vec::new(),
            Err(err) => return Err(err),
        };
        if existing.iter().any(|r| r.name == record.name) {
            return Err(Error::DuplicateScript { name: record.name });
        }

        let line = encode_record(&record)?;
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|source| self.write_error(source))?;
        file.write_all(line.as_bytes())
            .map_err(|source| self.write_error(source))?;

        debug!("appended script {:?} to {}", record.name, self.path.display());
        Ok(record)
    }

    /// Remove the record whose name exactly equals `name`.
    ///
    /// Matches on the decoded name field, never on a substring of the
    /// raw line, and rewrites every surviving line byte-for-byte. Returns
    /// the removed record.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::ScriptNotFound`] if no record matches, or with
    /// read/decode/write errors as in the other operations.
    pub fn remove(&self, name: &str) -> Result<ScriptRecord> {
        let text = self.read_text()?;

        let mut removed = None;
        let mut kept = Vec::new();
        for line in text.lines().filter(|line| !line.is_empty()) {
            let record = decode_record(line)?;
            if removed.is_none() && record.name == name {
                removed = Some(record);
            } else {
                kept.push(line);
            }
        }
        let Some(removed) = removed else {
            return Err(Error::not_found(name));
        };

        let mut contents = kept.join("\n");
        if !contents.is_empty() {
            contents.push('\n');
        }
        fs::write(&self.path, contents).map_err(|source| self.write_error(source))?;

        debug!("removed script {:?} from {}", removed.name, self.path.display());
        Ok(removed)
    }

    /// Idempotent setup.
    ///
    /// Creates the parent directory and an empty backing file if absent.
    /// An existing file is never written to; its records are returned
    /// instead.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::DirectoryCreate`] or [`Error::RegistryWrite`]
    /// when creation fails, or with any [`Self::load_all`] error when the
    /// file already exists.
    pub fn init(&self) -> Result<SetupOutcome> {
        if self.path.exists() {
            return Ok(SetupOutcome::Existing(self.load_all()?));
        }

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        fs::write(&self.path, "").map_err(|source| self.write_error(source))?;

        info!("created registry file at {}", self.path.display());
        Ok(SetupOutcome::Created)
    }

    fn read_text(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                Error::RegistryMissing {
                    path: self.path.clone(),
                }
            } else {
                Error::RegistryRead {
                    path: self.path.clone(),
                    source,
                }
            }
        })
    }

    fn write_error(&self, source: std::io::Error) -> Error {
        Error::RegistryWrite {
            path: self.path.clone(),
            source,
        }
    }
}
