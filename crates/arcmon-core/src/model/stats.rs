// ── Stats shapes ──
//
// One flat struct per report section. Serde names are the lower-case
// report labels, which is the JSON contract the monitoring templates
// key their items on.

use serde::{Deserialize, Serialize};

/// Status reported for an adapter whose report had no `Status` line.
pub const ADAPTER_STATUS_NOT_PRESENT: &str = "NotPresent";

/// Value stored in `battery present` when a battery section was seen.
pub const BATTERY_PRESENT: &str = "True";

/// Controller-level details from `arcconf getconfig <n> AD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterStats {
    #[serde(rename = "controller status")]
    pub controller_status: String,
    #[serde(rename = "channel description")]
    pub channel_description: String,
    #[serde(rename = "controller model")]
    pub controller_model: String,
    #[serde(rename = "controller serial number")]
    pub controller_serial_number: String,
    #[serde(rename = "controller world wide name")]
    pub controller_world_wide_name: String,
    #[serde(rename = "controller alarm")]
    pub controller_alarm: String,
    #[serde(rename = "temperature")]
    pub temperature: String,
    #[serde(rename = "installed memory")]
    pub installed_memory: String,
    #[serde(rename = "global task priority")]
    pub global_task_priority: String,
    #[serde(rename = "performance mode")]
    pub performance_mode: String,
    #[serde(rename = "stayawake period")]
    pub stayawake_period: String,
    #[serde(rename = "defunct disk drive count")]
    pub defunct_disk_drive_count: u32,
    #[serde(rename = "logical devices total")]
    pub logical_devices_total: u32,
    #[serde(rename = "logical devices failed")]
    pub logical_devices_failed: u32,
    #[serde(rename = "logical devices degraded")]
    pub logical_devices_degraded: u32,
    #[serde(rename = "ncq status")]
    pub ncq_status: String,
    #[serde(rename = "copyback")]
    pub copyback: String,
    #[serde(rename = "automatic failover")]
    pub automatic_failover: String,
    #[serde(rename = "background consistency check")]
    pub background_consistency_check: String,
    #[serde(rename = "bios")]
    pub bios: String,
    #[serde(rename = "firmware")]
    pub firmware: String,
    #[serde(rename = "driver")]
    pub driver: String,
    #[serde(rename = "status")]
    pub status: String,
    #[serde(rename = "battery present")]
    pub battery_present: String,
}

/// Volume details from `arcconf getconfig <n> LD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalDeviceStats {
    #[serde(rename = "logical device name")]
    pub name: String,
    #[serde(rename = "block size of member drives")]
    pub block_size: String,
    #[serde(rename = "raid level")]
    pub raid_level: String,
    #[serde(rename = "unique identifier")]
    pub unique_identifier: String,
    #[serde(rename = "status of logical device")]
    pub status: String,
    #[serde(rename = "size")]
    pub size: String,
    #[serde(rename = "parity space")]
    pub parity_space: String,
    #[serde(rename = "stripe-unit size")]
    pub stripe_unit_size: String,
    #[serde(rename = "interface type")]
    pub interface_type: String,
    #[serde(rename = "device type")]
    pub device_type: String,
    #[serde(rename = "read-cache setting")]
    pub read_cache_setting: String,
    #[serde(rename = "read-cache status")]
    pub read_cache_status: String,
    #[serde(rename = "write-cache setting")]
    pub write_cache_setting: String,
    #[serde(rename = "write-cache status")]
    pub write_cache_status: String,
    #[serde(rename = "partitioned")]
    pub partitioned: String,
    #[serde(rename = "protected by hot-spare")]
    pub protected_by_hot_spare: String,
    #[serde(rename = "bootable")]
    pub bootable: String,
    #[serde(rename = "failed stripes")]
    pub failed_stripes: String,
    #[serde(rename = "power settings")]
    pub power_settings: String,
}

/// Disk details from `arcconf getconfig <n> PD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalDeviceStats {
    /// `Controller <n>, <reported location>`.
    #[serde(rename = "device id")]
    pub device_id: String,
    #[serde(rename = "state")]
    pub state: String,
    #[serde(rename = "block size")]
    pub block_size: String,
    #[serde(rename = "supported")]
    pub supported: String,
    #[serde(rename = "transfer speed")]
    pub transfer_speed: String,
    #[serde(rename = "vendor")]
    pub vendor: String,
    #[serde(rename = "model")]
    pub model: String,
    #[serde(rename = "firmware")]
    pub firmware: String,
    #[serde(rename = "serial number")]
    pub serial_number: String,
    #[serde(rename = "reserved size")]
    pub reserved_size: String,
    #[serde(rename = "used size")]
    pub used_size: String,
    #[serde(rename = "unused size")]
    pub unused_size: String,
    #[serde(rename = "total size")]
    pub total_size: String,
    #[serde(rename = "write cache")]
    pub write_cache: String,
    #[serde(rename = "fru")]
    pub fru: String,
    #[serde(rename = "s.m.a.r.t.")]
    pub smart: String,
    #[serde(rename = "s.m.a.r.t. warnings")]
    pub smart_warnings: u32,
    #[serde(rename = "power state")]
    pub power_state: String,
    #[serde(rename = "supported power state")]
    pub supported_power_states: String,
    #[serde(rename = "ssd")]
    pub ssd: String,
    #[serde(rename = "ncq")]
    pub ncq: String,
}

/// A stats record of any kind; serializes as the bare inner object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StatsRecord {
    Adapter(AdapterStats),
    LogicalDevice(LogicalDeviceStats),
    PhysicalDevice(PhysicalDeviceStats),
}

impl From<AdapterStats> for StatsRecord {
    fn from(stats: AdapterStats) -> Self {
        Self::Adapter(stats)
    }
}

impl From<LogicalDeviceStats> for StatsRecord {
    fn from(stats: LogicalDeviceStats) -> Self {
        Self::LogicalDevice(stats)
    }
}

impl From<PhysicalDeviceStats> for StatsRecord {
    fn from(stats: PhysicalDeviceStats) -> Self {
        Self::PhysicalDevice(stats)
    }
}
