//! Clap derive structures for the `arcmon` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use arcmon_core::DeviceKind;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// arcmon -- Adaptec RAID discovery and stats for monitoring agents
#[derive(Debug, Parser)]
#[command(
    name = "arcmon",
    version,
    about = "Report Adaptec RAID controllers, volumes and disks as JSON",
    long_about = "Runs arcconf once per controller, parses its reports and prints\n\
        either low-level discovery lists or the full stats record of one device.\n\n\
        Hosts without an Adaptec controller get an empty discovery list.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Configuration file (default: platform config dir)
    #[arg(long, short = 'c', env = "ARCMON_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', default_value = "json", global = true)]
    pub output: OutputFormat,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Compact single-line JSON (default, what monitoring agents parse)
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// YAML
    Yaml,
    /// Human-readable table
    Table,
}

/// Report section to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Controllers
    Ad,
    /// Logical devices (volumes)
    Ld,
    /// Physical devices (disks)
    Pd,
}

impl From<KindArg> for DeviceKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Ad => Self::Adapter,
            KindArg::Ld => Self::LogicalDevice,
            KindArg::Pd => Self::PhysicalDevice,
        }
    }
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List present devices of one kind as a discovery document
    #[command(alias = "disc")]
    Discovery(DiscoveryArgs),

    /// Print the stats record of one device
    Stats(StatsArgs),

    /// Print 1 if this host can be monitored, 0 if arcconf is missing
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct DiscoveryArgs {
    /// Device kind
    #[arg(long = "type", short = 't', ignore_case = true)]
    pub kind: KindArg,
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Device kind
    #[arg(long = "type", short = 't', ignore_case = true)]
    pub kind: KindArg,

    /// Device key: controller ordinal (ad), unique identifier (ld),
    /// or "Controller <n>, <location>" (pd)
    #[arg(long, short = 'n')]
    pub name: String,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
