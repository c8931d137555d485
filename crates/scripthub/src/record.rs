//! Core record type for scripthub and its one-line wire format.
//!
//! Each registered script is one line in the registry file, three fields
//! joined by [`FIELD_DELIMITER`].

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Field delimiter separating the three fields of a registry line.
pub const FIELD_DELIMITER: &str = " : ";

/// One managed script: its name and where to run and edit it.
///
/// The name is the unique lookup key within a registry. Paths are stored
/// in absolute form; resolution happens once, when the record is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRecord {
    /// Unique name the script is registered under.
    pub name: String,

    /// Path invoked to run the script.
    pub executable: PathBuf,

    /// Path opened by the editor. Defaults to the executable path.
    pub editable: PathBuf,
}

impl ScriptRecord {
    /// Create a new record. A missing editable path defaults to the
    /// executable path.
    pub fn new(
        name: impl Into<String>,
        executable: impl Into<PathBuf>,
        editable: Option<PathBuf>,
    ) -> Self {
        let executable = executable.into();
        let editable = editable.unwrap_or_else(|| executable.clone());
        Self {
            name: name.into(),
            executable,
            editable,
        }
    }

    /// Resolve both paths to absolute form against `base`.
    ///
    /// Absolute paths pass through untouched; relative paths are joined
    /// onto `base` and lexically cleaned of `.` and `..` components.
    #[must_use]
    pub fn resolve_against(self, base: &Path) -> Self {
        Self {
            name: self.name,
            executable: absolutize(base, self.executable),
            editable: absolutize(base, self.editable),
        }
    }
}

fn absolutize(base: &Path, path: PathBuf) -> PathBuf {
    let joined = if path.is_absolute() {
        path
    } else {
        base.join(path)
    };
    normalize(&joined)
}

/// Collapse `.` and `..` components lexically, without touching the
/// filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Serialize a record to its registry line, trailing newline included.
///
/// # Errors
///
/// Fails with [`Error::InvalidField`] if the name is empty or any field
/// contains the field delimiter or a line break. Nothing that would
/// corrupt a later parse can reach the file.
pub fn encode_record(record: &ScriptRecord) -> Result<String> {
    let executable = record.executable.to_string_lossy();
    let editable = record.editable.to_string_lossy();

    if record.name.is_empty() {
        return Err(Error::invalid_field("name", ""));
    }
    check_field("name", &record.name)?;
    check_field("executable", &executable)?;
    check_field("editable", &editable)?;

    Ok(format!(
        "{}{FIELD_DELIMITER}{executable}{FIELD_DELIMITER}{editable}\n",
        record.name
    ))
}

fn check_field(field: &'static str, value: &str) -> Result<()> {
    if value.contains(FIELD_DELIMITER) || value.contains('\n') || value.contains('\r') {
        return Err(Error::invalid_field(field, value));
    }
    Ok(())
}

/// Parse one registry line back into a record.
///
/// The line must split on the field delimiter into exactly three parts
/// with a non-empty name. Callers skip empty lines; they never reach
/// here.
///
/// # Errors
///
/// Fails with [`Error::RecordMalformed`] otherwise.
pub fn decode_record(line: &str) -> Result<ScriptRecord> {
    let mut parts = line.split(FIELD_DELIMITER);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(executable), Some(editable), None) if !name.is_empty() => {
            Ok(ScriptRecord {
                name: name.to_string(),
                executable: PathBuf::from(executable),
                editable: PathBuf::from(editable),
            })
        }
        _ => Err(Error::RecordMalformed {
            line: line.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_editable() {
        let record = ScriptRecord::new("deploy", "/opt/deploy.sh", Some(PathBuf::from("/src/deploy.sh")));
        assert_eq!(record.name, "deploy");
        assert_eq!(record.executable, PathBuf::from("/opt/deploy.sh"));
        assert_eq!(record.editable, PathBuf::from("/src/deploy.sh"));
    }

    #[test]
    fn test_new_editable_defaults_to_executable() {
        let record = ScriptRecord::new("deploy", "/opt/deploy.sh", None);
        assert_eq!(record.editable, record.executable);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let record = ScriptRecord::new(
            "build",
            "/home/u/proj/build.sh",
            Some(PathBuf::from("/home/u/proj/src/build.sh")),
        );
        let line = encode_record(&record).unwrap();
        assert_eq!(
            line,
            "build : /home/u/proj/build.sh : /home/u/proj/src/build.sh\n"
        );

        let decoded = decode_record(line.trim_end_matches('\n')).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_encode_rejects_empty_name() {
        let record = ScriptRecord::new("", "/opt/x.sh", None);
        let err = encode_record(&record).unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: "name", .. }));
    }

    #[test]
    fn test_encode_rejects_delimiter_in_name() {
        let record = ScriptRecord::new("a : b", "/opt/x.sh", None);
        let err = encode_record(&record).unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: "name", .. }));
    }

    #[test]
    fn test_encode_rejects_delimiter_in_path() {
        let record = ScriptRecord::new("ok", "/opt/odd : dir/x.sh", None);
        let err = encode_record(&record).unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: "executable", .. }));
    }

    #[test]
    fn test_encode_rejects_newline_in_name() {
        let record = ScriptRecord::new("two\nlines", "/opt/x.sh", None);
        assert!(encode_record(&record).is_err());
    }

    #[test]
    fn test_decode_too_few_fields() {
        let err = decode_record("just-a-name").unwrap_err();
        assert!(matches!(err, Error::RecordMalformed { .. }));
    }

    #[test]
    fn test_decode_too_many_fields() {
        let err = decode_record("a : b : c : d").unwrap_err();
        assert!(matches!(err, Error::RecordMalformed { .. }));
    }

    #[test]
    fn test_decode_empty_name() {
        let err = decode_record(" : /a : /b").unwrap_err();
        assert!(matches!(err, Error::RecordMalformed { .. }));
    }

    #[test]
    fn test_decode_malformed_keeps_line() {
        let err = decode_record("garbage").unwrap_err();
        if let Error::RecordMalformed { line } = err {
            assert_eq!(line, "garbage");
        } else {
            panic!("expected RecordMalformed");
        }
    }

    #[test]
    fn test_resolve_relative_paths() {
        let record = ScriptRecord::new("build", "./build.sh", None);
        let resolved = record.resolve_against(Path::new("/home/u/proj"));
        assert_eq!(resolved.executable, PathBuf::from("/home/u/proj/build.sh"));
        assert_eq!(resolved.editable, PathBuf::from("/home/u/proj/build.sh"));
    }

    #[test]
    fn test_resolve_keeps_absolute_paths() {
        let record = ScriptRecord::new("build", "/usr/local/bin/build", None);
        let resolved = record.resolve_against(Path::new("/home/u/proj"));
        assert_eq!(resolved.executable, PathBuf::from("/usr/local/bin/build"));
    }

    #[test]
    fn test_resolve_collapses_parent_components() {
        let record = ScriptRecord::new("build", "../tools/build.sh", None);
        let resolved = record.resolve_against(Path::new("/home/u/proj"));
        assert_eq!(resolved.executable, PathBuf::from("/home/u/tools/build.sh"));
    }

    #[test]
    fn test_record_serialize() {
        let record = ScriptRecord::new("build", "/opt/build.sh", None);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"name\":\"build\""));
        assert!(json.contains("executable"));
    }

    #[test]
    fn test_record_clone_eq() {
        let record = ScriptRecord::new("build", "/opt/build.sh", None);
        assert_eq!(record, record.clone());
    }
}
