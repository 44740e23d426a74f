use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the `arcmon-api` crate.
///
/// Covers every failure mode of the external utilities: lookup,
/// spawning, timeouts and unsuccessful exits. `arcmon-core` maps these
/// into domain errors.
#[derive(Debug, Error)]
pub enum Error {
    // ── Lookup ──────────────────────────────────────────────────────
    /// The binary is not present in any of the searched directories.
    #[error("Not found: '{binary}' (searched {})", display_paths(.searched))]
    NotFound {
        binary: String,
        searched: Vec<PathBuf>,
    },

    // ── Execution ───────────────────────────────────────────────────
    /// The process could not be started or its output could not be read.
    #[error("Failed to execute '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The process did not finish within the configured timeout.
    #[error("'{binary}' timed out after {timeout_secs}s")]
    Timeout { binary: String, timeout_secs: u64 },

    /// The process exited unsuccessfully where success is required.
    #[error("'{binary}' exited with status {}: {stderr}", .code.map_or_else(|| "signal".to_owned(), |c| c.to_string()))]
    ExitStatus {
        binary: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl Error {
    /// Returns `true` if the binary could not be located at all.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if the process was killed for exceeding its timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
