use arcmon_core::{DeviceKind, Inventory, ReportSource};
use tracing::info;

use crate::cli::{DiscoveryArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub async fn handle<S: ReportSource + Sync>(
    args: &DiscoveryArgs,
    inventory: &Inventory<S>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let kind = DeviceKind::from(args.kind);
    let discovery = inventory.discover(kind).await?;
    info!(%kind, devices = discovery.len(), "discovery complete");
    output::print_output(&output::render_discovery(global.output, &discovery)?)
}
