use arcmon_core::{Inventory, ReportSource};
use tracing::info;

use crate::error::CliError;
use crate::output;

/// Prints the bare flag in every output format; `0` and `1` are valid JSON.
pub async fn handle<S: ReportSource + Sync>(inventory: &Inventory<S>) -> Result<(), CliError> {
    let status = inventory.check().await?;
    info!(%status, "readiness");
    output::print_output(&status.flag().to_string())
}
