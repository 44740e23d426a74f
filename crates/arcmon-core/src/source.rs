//! The port through which the inventory reaches the utilities.
//!
//! [`ReportSource`] is the whole contract the core needs from the outside
//! world. [`Toolchain`](arcmon_api::Toolchain) implements it with real
//! processes; tests implement it with fixtures.

use arcmon_api::Toolchain;

use crate::error::CoreError;
use crate::model::{ControllerOrdinal, DeviceKind};

/// Text captured from one report invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedReport {
    pub text: String,
    /// Set when the utility reported failure; `text` is still usable.
    pub failure: Option<String>,
}

impl FetchedReport {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            failure: None,
        }
    }
}

/// Controller enumeration and per-controller report fetching.
pub trait ReportSource {
    /// Number of supported controllers; 0 when none are installed.
    fn count_controllers(&self) -> impl Future<Output = Result<u32, CoreError>> + Send;

    /// Fails with [`CoreError::ToolMissing`] if reports cannot be produced at all.
    fn ensure_reporter(&self) -> Result<(), CoreError>;

    fn run_report(
        &self,
        controller: ControllerOrdinal,
        kind: DeviceKind,
    ) -> impl Future<Output = Result<FetchedReport, CoreError>> + Send;
}

impl ReportSource for Toolchain {
    async fn count_controllers(&self) -> Result<u32, CoreError> {
        let detection = |err: arcmon_api::Error| CoreError::ControllerDetection {
            reason: err.to_string(),
        };
        let lspci = self.lspci().map_err(detection)?;
        lspci.count_raid_controllers().await.map_err(detection)
    }

    fn ensure_reporter(&self) -> Result<(), CoreError> {
        self.arcconf().map(|_| ()).map_err(tool_missing)
    }

    async fn run_report(
        &self,
        controller: ControllerOrdinal,
        kind: DeviceKind,
    ) -> Result<FetchedReport, CoreError> {
        let arcconf = self.arcconf().map_err(tool_missing)?;
        let out = arcconf
            .getconfig(controller.get(), kind.code())
            .await
            .map_err(|err| CoreError::Fetch {
                ordinal: controller.get(),
                reason: err.to_string(),
            })?;

        let failure = (!out.success()).then(|| {
            let status = out
                .exit_code
                .map_or_else(|| "signal".to_owned(), |code| code.to_string());
            let stderr = out.stderr.trim();
            if stderr.is_empty() {
                format!("arcconf exited with status {status}")
            } else {
                format!("arcconf exited with status {status}: {stderr}")
            }
        });

        Ok(FetchedReport {
            text: out.stdout,
            failure,
        })
    }
}

fn tool_missing(err: arcmon_api::Error) -> CoreError {
    match err {
        arcmon_api::Error::NotFound { binary, searched } => CoreError::ToolMissing {
            binary,
            searched: searched
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        },
        other => CoreError::ToolMissing {
            binary: "arcconf".into(),
            searched: other.to_string(),
        },
    }
}

#[cfg(all(test, unix))]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    use arcmon_api::ToolConfig;

    use super::*;

    fn install(dir: &Path, name: &str, script: &str) {
        let bin = dir.join(name);
        std::fs::write(&bin, script).unwrap();
        std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn toolchain(dir: &Path) -> Toolchain {
        Toolchain::new(ToolConfig {
            search_paths: vec![dir.to_path_buf()],
            ..ToolConfig::default()
        })
    }

    #[tokio::test]
    async fn missing_lspci_is_a_detection_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = toolchain(dir.path()).count_controllers().await.unwrap_err();
        assert!(matches!(err, CoreError::ControllerDetection { .. }));
    }

    #[tokio::test]
    async fn counts_controllers_through_lspci() {
        let dir = tempfile::tempdir().unwrap();
        install(
            dir.path(),
            "lspci",
            "#!/bin/sh\necho '01:00.0 RAID bus controller: Adaptec Series 8'\n",
        );
        assert_eq!(toolchain(dir.path()).count_controllers().await.unwrap(), 1);
    }

    #[test]
    fn missing_arcconf_is_soft() {
        let dir = tempfile::tempdir().unwrap();
        let err = toolchain(dir.path()).ensure_reporter().unwrap_err();
        assert!(err.is_tool_missing());
    }

    #[tokio::test]
    async fn failed_report_keeps_captured_text() {
        let dir = tempfile::tempdir().unwrap();
        install(
            dir.path(),
            "arcconf",
            "#!/bin/sh\necho 'State : Online'\necho 'busy' >&2\nexit 2\n",
        );
        let report = toolchain(dir.path())
            .run_report(
                ControllerOrdinal::new(1).unwrap(),
                DeviceKind::PhysicalDevice,
            )
            .await
            .unwrap();
        assert_eq!(report.text, "State : Online\n");
        assert_eq!(
            report.failure.as_deref(),
            Some("arcconf exited with status 2: busy")
        );
    }
}
