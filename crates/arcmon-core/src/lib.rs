//! Report parsing and device lookup between `arcmon-api` and the CLI.
//!
//! - **[`Inventory`]** is the facade. [`discover()`](Inventory::discover)
//!   lists present devices of one kind across every controller, and
//!   [`stats()`](Inventory::stats) returns the full record for one device
//!   by natural key. [`check()`](Inventory::check) is the readiness check.
//!
//! - **[`ReportSource`]** is the seam to the outside world. The real
//!   implementation is [`arcmon_api::Toolchain`]; tests substitute fixtures.
//!
//! - **Parsing** ([`parse`]) splits a report into per-device sub-blocks and
//!   applies a label table per kind. The tables are data, so a firmware
//!   revision that renames a label is a one-line change.
//!
//! - **Domain model** ([`model`]) holds [`DeviceKind`], the discovery shape
//!   consumed by monitoring low-level discovery, and the per-kind stats
//!   shapes.

pub mod assemble;
pub mod error;
pub mod inventory;
pub mod model;
pub mod parse;
pub mod source;

// ── Primary re-exports ──────────────────────────────────────────────
pub use assemble::StatsIndex;
pub use error::{CoreError, ParseError};
pub use inventory::{CheckStatus, Inventory};
pub use model::{
    AdapterStats, ControllerOrdinal, DeviceKind, Discovery, DiscoveryRecord, LogicalDeviceStats,
    PhysicalDeviceStats, StatsRecord,
};
pub use source::{FetchedReport, ReportSource};
