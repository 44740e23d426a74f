//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with help text.

use miette::Diagnostic;
use thiserror::Error;

use arcmon_config::ConfigError;
use arcmon_core::{CoreError, DeviceKind};

/// Process exit codes. Monitoring agents only distinguish 0 from 1.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Hardware ─────────────────────────────────────────────────────
    #[error("Cannot detect RAID controllers: {reason}")]
    #[diagnostic(
        code(arcmon::detection),
        help("Check that lspci is installed, or set tools.lspci in the config file.")
    )]
    ControllerDetection { reason: String },

    // Only ever logged as a warning; the message carries everything
    #[error("{binary} is not installed (searched {searched}), skipping")]
    #[diagnostic(code(arcmon::tool_missing))]
    ToolMissing { binary: String, searched: String },

    #[error("Report for controller {ordinal} failed: {reason}")]
    #[diagnostic(code(arcmon::fetch))]
    Fetch { ordinal: u32, reason: String },

    // ── Lookup ───────────────────────────────────────────────────────
    #[error("{kind} '{name}' not found")]
    #[diagnostic(
        code(arcmon::not_found),
        help("Run: arcmon discovery -t {type_arg} to see available names")
    )]
    NotFound {
        kind: DeviceKind,
        name: String,
        type_arg: String,
    },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(arcmon::config),
        help("Check --config / ARCMON_CONFIG and any ARCMON_* overrides.")
    )]
    Config(#[from] ConfigError),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(arcmon::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(arcmon::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ToolMissing { .. } => exit_code::SUCCESS,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ControllerDetection { reason } => Self::ControllerDetection { reason },
            CoreError::ToolMissing { binary, searched } => Self::ToolMissing { binary, searched },
            CoreError::Fetch { ordinal, reason } => Self::Fetch { ordinal, reason },
            CoreError::NotFound { kind, name } => Self::NotFound {
                type_arg: kind.code().to_ascii_lowercase(),
                kind,
                name,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_arcconf_is_a_clean_exit() {
        let err = CliError::from(CoreError::ToolMissing {
            binary: "arcconf".into(),
            searched: "/usr/sbin".into(),
        });
        assert_eq!(err.exit_code(), exit_code::SUCCESS);
        assert_eq!(
            err.to_string(),
            "arcconf is not installed (searched /usr/sbin), skipping"
        );
    }

    #[test]
    fn lookup_and_detection_failures_exit_one() {
        let not_found = CliError::from(CoreError::NotFound {
            kind: DeviceKind::LogicalDevice,
            name: "DEADBEEF".into(),
        });
        assert_eq!(not_found.exit_code(), exit_code::GENERAL);
        assert_eq!(not_found.to_string(), "LD 'DEADBEEF' not found");

        let detection = CliError::from(CoreError::ControllerDetection {
            reason: "lspci missing".into(),
        });
        assert_eq!(detection.exit_code(), exit_code::GENERAL);
    }
}
