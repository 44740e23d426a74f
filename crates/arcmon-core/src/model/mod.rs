// ── Domain model ──
//
// Device kinds, the four-field discovery shape and the per-kind stats
// shapes. Discovery and stats records share nothing but `DeviceKind`.

pub mod discovery;
pub mod kind;
pub mod stats;

pub use discovery::{ADAPTER_PRESENT, Discovery, DiscoveryDraft, DiscoveryRecord};
pub use kind::{ControllerOrdinal, DeviceKind};
pub use stats::{
    ADAPTER_STATUS_NOT_PRESENT, AdapterStats, BATTERY_PRESENT, LogicalDeviceStats,
    PhysicalDeviceStats, StatsRecord,
};
