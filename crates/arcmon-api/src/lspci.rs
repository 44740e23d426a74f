// lspci client
//
// Counts Adaptec RAID controllers from the plain `lspci` listing. The
// ordinal passed to arcconf is simply the 1-based position in this count.

use std::path::PathBuf;
use std::time::Duration;

use tracing::debug;

use crate::error::Error;
use crate::transport::{self, ToolConfig};

const VENDOR_MARKER: &str = "Adaptec";
const CLASS_MARKER: &str = "RAID bus controller";

/// Handle on a located `lspci` executable.
#[derive(Debug, Clone)]
pub struct Lspci {
    path: PathBuf,
    timeout: Duration,
}

impl Lspci {
    pub fn locate(config: &ToolConfig) -> Result<Self, Error> {
        let path = transport::locate(&config.lspci, &config.search_paths)?;
        Ok(Self {
            path,
            timeout: config.timeout,
        })
    }

    /// Number of Adaptec RAID controllers on the PCI bus.
    pub async fn count_raid_controllers(&self) -> Result<u32, Error> {
        let out = transport::run(&self.path, &[], self.timeout).await?;
        if !out.success() {
            return Err(Error::ExitStatus {
                binary: self.path.display().to_string(),
                code: out.exit_code,
                stderr: out.stderr.trim().to_owned(),
            });
        }
        let count = count_raid_controllers(&out.stdout);
        debug!(count, "counted Adaptec RAID controllers");
        Ok(count)
    }
}

/// Count listing lines naming both the vendor and the RAID bus class.
pub fn count_raid_controllers(listing: &str) -> u32 {
    let matches = listing
        .lines()
        .filter(|line| line.contains(VENDOR_MARKER) && line.contains(CLASS_MARKER))
        .count();
    u32::try_from(matches).unwrap_or(u32::MAX)
}
