// arcconf client
//
// `arcconf getconfig <controller> <section> nologs` is the only
// invocation the monitoring helper needs. Non-zero exits are returned to
// the caller together with whatever stdout was captured.

use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::error::Error;
use crate::transport::{self, ReportOutput, ToolConfig};

/// Handle on a located `arcconf` executable.
#[derive(Debug, Clone)]
pub struct Arcconf {
    path: PathBuf,
    timeout: Duration,
}

impl Arcconf {
    /// Locate `arcconf` according to `config`.
    pub fn locate(config: &ToolConfig) -> Result<Self, Error> {
        let path = transport::locate(&config.arcconf, &config.search_paths)?;
        debug!(path = %path.display(), "located arcconf");
        Ok(Self {
            path,
            timeout: config.timeout,
        })
    }

    /// Run `getconfig` for one controller and one section (`AD`, `LD` or `PD`).
    ///
    /// `controller` is the 1-based ordinal arcconf expects.
    pub async fn getconfig(&self, controller: u32, section: &str) -> Result<ReportOutput, Error> {
        let ordinal = controller.to_string();
        transport::run(
            &self.path,
            &["getconfig", &ordinal, section, "nologs"],
            self.timeout,
        )
        .await
    }
}

#[cfg(all(test, unix))]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    use super::*;

    fn fake_arcconf(dir: &Path, script: &str) -> ToolConfig {
        let bin = dir.join("arcconf");
        std::fs::write(&bin, script).unwrap();
        std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755)).unwrap();
        ToolConfig {
            search_paths: vec![dir.to_path_buf()],
            ..ToolConfig::default()
        }
    }

    #[tokio::test]
    async fn getconfig_passes_controller_section_and_nologs() {
        let dir = tempfile::tempdir().unwrap();
        let config = fake_arcconf(dir.path(), "#!/bin/sh\necho \"$1|$2|$3|$4\"\n");
        let arcconf = Arcconf::locate(&config).unwrap();

        let out = arcconf.getconfig(2, "PD").await.unwrap();
        assert_eq!(out.stdout.trim(), "getconfig|2|PD|nologs");
        assert!(out.success());
    }

    #[tokio::test]
    async fn getconfig_returns_output_on_failure_exit() {
        let dir = tempfile::tempdir().unwrap();
        let config = fake_arcconf(dir.path(), "#!/bin/sh\necho partial\nexit 1\n");
        let arcconf = Arcconf::locate(&config).unwrap();

        let out = arcconf.getconfig(1, "AD").await.unwrap();
        assert_eq!(out.stdout, "partial\n");
        assert_eq!(out.exit_code, Some(1));
    }

    #[test]
    fn locate_fails_without_binary() {
        let dir = tempfile::tempdir().unwrap();
        let config = ToolConfig {
            search_paths: vec![dir.path().to_path_buf()],
            ..ToolConfig::default()
        };
        assert!(Arcconf::locate(&config).unwrap_err().is_not_found());
    }
}
