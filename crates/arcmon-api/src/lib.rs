//! Process-level access to the utilities behind Adaptec RAID monitoring.
//!
//! - **[`Lspci`]** counts Adaptec RAID controllers on the PCI bus.
//! - **[`Arcconf`]** runs `arcconf getconfig <n> <AD|LD|PD> nologs` and
//!   hands back the raw report text with its exit code.
//! - **[`Toolchain`]** bundles both behind a single [`ToolConfig`], locating
//!   each binary lazily so hosts without controllers never need `arcconf`.
//!
//! Nothing here interprets report text; that is `arcmon-core`'s job.

pub mod arcconf;
pub mod error;
pub mod lspci;
pub mod transport;

pub use arcconf::Arcconf;
pub use error::Error;
pub use lspci::Lspci;
pub use transport::{DEFAULT_SEARCH_PATHS, DEFAULT_TIMEOUT, ReportOutput, ToolConfig, locate};

/// Both utilities, resolved on demand from one configuration.
#[derive(Debug, Clone, Default)]
pub struct Toolchain {
    config: ToolConfig,
}

impl Toolchain {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    pub fn lspci(&self) -> Result<Lspci, Error> {
        Lspci::locate(&self.config)
    }

    pub fn arcconf(&self) -> Result<Arcconf, Error> {
        Arcconf::locate(&self.config)
    }
}
