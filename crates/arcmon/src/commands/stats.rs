use arcmon_core::{DeviceKind, Inventory, ReportSource};

use crate::cli::{GlobalOpts, StatsArgs};
use crate::error::CliError;
use crate::output;

pub async fn handle<S: ReportSource + Sync>(
    args: &StatsArgs,
    inventory: &Inventory<S>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let record = inventory
        .stats(DeviceKind::from(args.kind), &args.name)
        .await?;
    output::print_output(&output::render_stats(global.output, &record)?)
}
