//! The inventory facade: controller enumeration, report fetching and
//! record assembly behind three calls.
//!
//! Each call is a fresh snapshot. Nothing is cached between calls; a
//! monitoring agent invokes the binary once per item and expects the
//! current hardware state every time.

use tracing::{debug, info, warn};

use crate::assemble::{self, StatsIndex};
use crate::error::CoreError;
use crate::model::{ControllerOrdinal, DeviceKind, Discovery, StatsRecord};
use crate::source::ReportSource;

/// Outcome of the readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum CheckStatus {
    /// Controllers found and `arcconf` is available.
    #[strum(serialize = "ready")]
    Ready,
    /// No controllers; there is nothing to monitor, which is not a fault.
    #[strum(serialize = "no controllers")]
    NoControllers,
    /// Controllers found but `arcconf` is not installed.
    #[strum(serialize = "arcconf missing")]
    ToolMissing,
}

impl CheckStatus {
    /// The agent-facing flag: `1` healthy, `0` not.
    pub fn flag(self) -> u8 {
        match self {
            Self::Ready | Self::NoControllers => 1,
            Self::ToolMissing => 0,
        }
    }
}

pub struct Inventory<S> {
    source: S,
}

impl<S: ReportSource + Sync> Inventory<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Report text for every controller, in ordinal order.
    ///
    /// Returns an empty list without touching `arcconf` when no controllers
    /// are installed. A failed invocation is logged and whatever text it
    /// produced is still parsed.
    async fn reports(
        &self,
        kind: DeviceKind,
    ) -> Result<Vec<(ControllerOrdinal, String)>, CoreError> {
        let count = self.source.count_controllers().await?;
        info!(count, %kind, "detected controllers");
        if count == 0 {
            return Ok(Vec::new());
        }
        self.source.ensure_reporter()?;

        let mut reports = Vec::new();
        for controller in ControllerOrdinal::range(count) {
            let text = match self.source.run_report(controller, kind).await {
                Ok(report) => {
                    if let Some(reason) = &report.failure {
                        warn!(%controller, %kind, %reason, "partial report, parsing output");
                    }
                    report.text
                }
                Err(err) if err.is_tool_missing() => return Err(err),
                Err(err) => {
                    warn!(%controller, %kind, error = %err, "report failed");
                    String::new()
                }
            };
            debug!(%controller, %kind, bytes = text.len(), "fetched report");
            reports.push((controller, text));
        }
        Ok(reports)
    }

    /// Every present device of `kind`, across all controllers.
    pub async fn discover(&self, kind: DeviceKind) -> Result<Discovery, CoreError> {
        let reports = self.reports(kind).await?;
        Ok(reports
            .iter()
            .flat_map(|(controller, text)| assemble::discover(text, kind, *controller))
            .collect())
    }

    /// Stats records of `kind` from all controllers, keyed by natural key.
    pub async fn stats_index(&self, kind: DeviceKind) -> Result<StatsIndex, CoreError> {
        let mut index = StatsIndex::new();
        for (controller, text) in self.reports(kind).await? {
            assemble::index_stats(&text, kind, controller, &mut index);
        }
        Ok(index)
    }

    /// The stats record named `name`, looked up once all controllers are indexed.
    pub async fn stats(&self, kind: DeviceKind, name: &str) -> Result<StatsRecord, CoreError> {
        let mut index = self.stats_index(kind).await?;
        index.remove(name).ok_or_else(|| CoreError::NotFound {
            kind,
            name: name.to_owned(),
        })
    }

    pub async fn check(&self) -> Result<CheckStatus, CoreError> {
        if self.source.count_controllers().await? == 0 {
            return Ok(CheckStatus::NoControllers);
        }
        match self.source.ensure_reporter() {
            Ok(()) => Ok(CheckStatus::Ready),
            Err(err) if err.is_tool_missing() => Ok(CheckStatus::ToolMissing),
            Err(err) => Err(err),
        }
    }
}
