//! Command handlers. Each reads from the inventory and writes to stdout.

pub mod check;
pub mod discovery;
pub mod stats;

use arcmon_api::Toolchain;
use arcmon_core::Inventory;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Route an inventory-backed command to its handler.
pub async fn dispatch(
    cmd: &Command,
    inventory: &Inventory<Toolchain>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Discovery(args) => discovery::handle(args, inventory, global).await,
        Command::Stats(args) => stats::handle(args, inventory, global).await,
        Command::Check => check::handle(inventory).await,
        // Completions are generated before dispatch
        Command::Completions(_) => unreachable!(),
    }
}
