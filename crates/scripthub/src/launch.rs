//! Launching external programs with inherited stdio.
//!
//! Both `run` and `edit` hand the controlling terminal to a child process
//! and block until it exits. Spawn failures and unclean exits surface as
//! errors; the child's own output goes straight to the user's terminal.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};
use crate::record::ScriptRecord;

/// Environment variable consulted for the editor override.
pub const EDITOR_ENV: &str = "EDITOR";

/// Run a registered script with no arguments, blocking until it exits.
///
/// # Errors
///
/// Fails with [`Error::ScriptNotFound`] if the record carries an empty
/// executable path (possible only in a hand-edited registry),
/// [`Error::Launch`] if the program cannot be started, or
/// [`Error::ChildExit`] on a non-zero exit.
pub fn run_script(record: &ScriptRecord) -> Result<()> {
    if record.executable.as_os_str().is_empty() {
        return Err(Error::not_found(&record.name));
    }
    launch(&record.executable, None)
}

/// Open `path` in `editor`, blocking until the editor exits.
///
/// # Errors
///
/// Fails with [`Error::Launch`] or [`Error::ChildExit`] as for
/// [`run_script`].
pub fn edit_file(editor: &str, path: &Path) -> Result<()> {
    launch(Path::new(editor), Some(path))
}

/// Pick the editor program: a non-empty `$EDITOR` wins over the
/// configured fallback.
#[must_use]
pub fn choose_editor(fallback: &str) -> String {
    editor_or(std::env::var(EDITOR_ENV).ok(), fallback)
}

fn editor_or(env_value: Option<String>, fallback: &str) -> String {
    env_value
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn launch(program: &Path, arg: Option<&Path>) -> Result<()> {
    let mut command = Command::new(program);
    if let Some(arg) = arg {
        command.arg(arg);
    }

    debug!("launching {}", program.display());
    let status = command
        .spawn()
        .map_err(|source| Error::Launch {
            program: program.to_path_buf(),
            source,
        })?
        .wait()
        .map_err(|source| Error::Launch {
            program: program.to_path_buf(),
            source,
        })?;

    if !status.success() {
        return Err(Error::ChildExit {
            program: program.to_path_buf(),
            code: status.code(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_env_wins() {
        assert_eq!(editor_or(Some("helix".to_string()), "vim"), "helix");
    }

    #[test]
    fn test_editor_falls_back_when_unset() {
        assert_eq!(editor_or(None, "vim"), "vim");
    }

    #[test]
    fn test_editor_falls_back_when_empty() {
        assert_eq!(editor_or(Some(String::new()), "vim"), "vim");
    }

    #[test]
    fn test_run_script_empty_executable() {
        let record = ScriptRecord {
            name: "hollow".to_string(),
            executable: std::path::PathBuf::new(),
            editable: std::path::PathBuf::new(),
        };
        let err = run_script(&record).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_launch_nonexistent_program() {
        let record = ScriptRecord::new("ghost", "/nonexistent/scripthub/test/bin", None);
        let err = run_script(&record).unwrap_err();
        assert!(matches!(err, Error::Launch { .. }));
    }

    #[cfg(unix)]
    mod unix {
        use super::super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::path::PathBuf;

        fn write_script(tag: &str, body: &str) -> PathBuf {
            let path = std::env::temp_dir().join(format!(
                "scripthub_launch_{}_{}",
                tag,
                std::process::id()
            ));
            fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        #[test]
        fn test_run_script_success() {
            let path = write_script("ok", "exit 0");
            let record = ScriptRecord::new("ok", &path, None);
            assert!(run_script(&record).is_ok());
            let _ = fs::remove_file(path);
        }

        #[test]
        fn test_run_script_nonzero_exit() {
            let path = write_script("fail", "exit 3");
            let record = ScriptRecord::new("fail", &path, None);
            let err = run_script(&record).unwrap_err();
            assert!(matches!(err, Error::ChildExit { code: Some(3), .. }));
            let _ = fs::remove_file(path);
        }

        #[test]
        fn test_edit_file_runs_editor_with_path() {
            // A stand-in "editor" that just requires its argument to exist.
            let target = write_script("target", "exit 0");
            let editor = write_script("editor", "test -e \"$1\"");
            assert!(edit_file(&editor.to_string_lossy(), &target).is_ok());
            let _ = fs::remove_file(editor);
            let _ = fs::remove_file(target);
        }
    }
}
