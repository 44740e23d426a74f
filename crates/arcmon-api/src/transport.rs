// Process transport
//
// Locates utilities in a fixed set of system directories and runs them
// with a hard timeout. Stdout is captured as lossy UTF-8; the exit code
// is handed back to the caller rather than judged here.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::{debug, trace};

use crate::error::Error;

/// Directories searched for `arcconf` and `lspci` when no override is set.
pub const DEFAULT_SEARCH_PATHS: &[&str] = &[
    "/bin",
    "/sbin",
    "/usr/bin",
    "/usr/sbin",
    "/usr/local/bin",
    "/usr/local/sbin",
];

/// Default per-invocation timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where to find the utilities and how long to wait for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// RAID management utility name or path.
    pub arcconf: String,
    /// PCI lister name or path.
    pub lspci: String,
    /// Directories searched for bare binary names, in order.
    pub search_paths: Vec<PathBuf>,
    /// Upper bound on a single process invocation.
    pub timeout: Duration,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            arcconf: "arcconf".into(),
            lspci: "lspci".into(),
            search_paths: DEFAULT_SEARCH_PATHS.iter().map(PathBuf::from).collect(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl ReportOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Resolve `binary` to an executable file.
///
/// Names containing a path separator are taken literally; bare names are
/// looked up in `search_paths` only (never `$PATH`). Directories never match.
pub fn locate(binary: &str, search_paths: &[PathBuf]) -> Result<PathBuf, Error> {
    let not_found = || Error::NotFound {
        binary: binary.to_owned(),
        searched: search_paths.to_vec(),
    };

    if binary.contains(std::path::MAIN_SEPARATOR) {
        let path = Path::new(binary);
        return if path.is_file() {
            Ok(path.to_path_buf())
        } else {
            Err(not_found())
        };
    }

    let joined: OsString = std::env::join_paths(search_paths).map_err(|_| not_found())?;
    which::which_in(binary, Some(joined), "/").map_err(|_| not_found())
}

/// Run `program` with `args`, waiting at most `timeout`.
///
/// The child is killed if the timeout elapses.
pub(crate) async fn run(
    program: &Path,
    args: &[&str],
    timeout: Duration,
) -> Result<ReportOutput, Error> {
    let binary = program.display().to_string();
    debug!(program = %binary, ?args, "spawning");

    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = match tokio::time::timeout(timeout, command.output()).await {
        Ok(result) => result.map_err(|source| Error::Spawn {
            binary: binary.clone(),
            source,
        })?,
        Err(_) => {
            return Err(Error::Timeout {
                binary,
                timeout_secs: timeout.as_secs(),
            });
        }
    };

    trace!(
        program = %binary,
        stdout_bytes = output.stdout.len(),
        status = ?output.status.code(),
        "process finished"
    );

    Ok(ReportOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_searches_system_dirs() {
        let config = ToolConfig::default();
        assert_eq!(config.arcconf, "arcconf");
        assert_eq!(config.lspci, "lspci");
        assert_eq!(config.search_paths.len(), 6);
        assert_eq!(config.search_paths[0], PathBuf::from("/bin"));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn locate_missing_binary_reports_searched_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let err = locate("arcconf", &[dir.path().to_path_buf()]).unwrap_err();
        match err {
            Error::NotFound { binary, searched } => {
                assert_eq!(binary, "arcconf");
                assert_eq!(searched, vec![dir.path().to_path_buf()]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn locate_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("arcconf")).unwrap();
        assert!(locate("arcconf", &[dir.path().to_path_buf()]).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn locate_finds_executable_in_search_paths() {
        use std::os::unix::fs::PermissionsExt;

        let empty = tempfile::tempdir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("arcconf");
        std::fs::write(&bin, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755)).unwrap();

        let found = locate(
            "arcconf",
            &[empty.path().to_path_buf(), dir.path().to_path_buf()],
        )
        .unwrap();
        assert_eq!(found, bin);
    }

    #[test]
    fn locate_accepts_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("lspci");
        std::fs::write(&bin, "").unwrap();
        let found = locate(bin.to_str().unwrap(), &[]).unwrap();
        assert_eq!(found, bin);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn run_captures_stdout_and_exit_code() {
        let out = run(
            Path::new("/bin/sh"),
            &["-c", "echo hello; exit 3"],
            Duration::from_secs(5),
        )
        .await
        .unwrap();
        assert_eq!(out.stdout, "hello\n");
        assert_eq!(out.exit_code, Some(3));
        assert!(!out.success());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn run_times_out() {
        let err = run(
            Path::new("/bin/sh"),
            &["-c", "sleep 5"],
            Duration::from_millis(100),
        )
        .await
        .unwrap_err();
        assert!(err.is_timeout());
    }
}
