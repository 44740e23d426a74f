//! Adapter (`AD`) report labels.

use std::sync::LazyLock;

use super::{FieldTable, FieldValue, Record, parse_triple};
use crate::error::ParseError;
use crate::model::{
    ADAPTER_PRESENT, ADAPTER_STATUS_NOT_PRESENT, AdapterStats, BATTERY_PRESENT, ControllerOrdinal,
    DeviceKind, DiscoveryDraft,
};

static STATS_FIELDS: LazyLock<FieldTable<AdapterStats>> = LazyLock::new(stats_fields);
static DISCOVERY_FIELDS: LazyLock<FieldTable<DiscoveryDraft>> = LazyLock::new(|| {
    FieldTable::<DiscoveryDraft>::new().custom("controller model", |draft, value| {
        draft.alias = Some(value.text.to_owned());
        Ok(())
    })
});

fn stats_fields() -> FieldTable<AdapterStats> {
    FieldTable::<AdapterStats>::new()
        .text("controller status", |r| &mut r.controller_status)
        .text("channel description", |r| &mut r.channel_description)
        .text("controller model", |r| &mut r.controller_model)
        .text("controller serial number", |r| {
            &mut r.controller_serial_number
        })
        .text("controller world wide name", |r| {
            &mut r.controller_world_wide_name
        })
        .text("controller alarm", |r| &mut r.controller_alarm)
        .text("temperature", |r| &mut r.temperature)
        .text("installed memory", |r| &mut r.installed_memory)
        .text("global task priority", |r| &mut r.global_task_priority)
        .text("performance mode", |r| &mut r.performance_mode)
        .text("stayawake period", |r| &mut r.stayawake_period)
        .count("defunct disk drive count", |r| {
            &mut r.defunct_disk_drive_count
        })
        .custom("logical devices/failed/degraded", set_logical_device_counts)
        .text("ncq status", |r| &mut r.ncq_status)
        .text("copyback", |r| &mut r.copyback)
        .text("automatic failover", |r| &mut r.automatic_failover)
        .text("background consistency check", |r| {
            &mut r.background_consistency_check
        })
        .text("bios", |r| &mut r.bios)
        .text("firmware", |r| &mut r.firmware)
        .text("driver", |r| &mut r.driver)
        .text("status", |r| &mut r.status)
        .marker("controller zmm information", mark_battery)
        .marker("battery", mark_battery)
}

fn set_logical_device_counts(
    record: &mut AdapterStats,
    value: &FieldValue<'_>,
) -> Result<(), ParseError> {
    let [total, failed, degraded] = parse_triple(value)?;
    record.logical_devices_total = total;
    record.logical_devices_failed = failed;
    record.logical_devices_degraded = degraded;
    Ok(())
}

fn mark_battery(record: &mut AdapterStats) {
    BATTERY_PRESENT.clone_into(&mut record.battery_present);
}

impl Record for AdapterStats {
    const KIND: DeviceKind = DeviceKind::Adapter;

    fn seed(_controller: ControllerOrdinal) -> Self {
        Self {
            status: ADAPTER_STATUS_NOT_PRESENT.to_owned(),
            ..Self::default()
        }
    }

    fn fields() -> &'static FieldTable<Self> {
        &STATS_FIELDS
    }

    /// Adapters are indexed by controller ordinal, unconditionally.
    fn index_key(&self, controller: ControllerOrdinal) -> Option<String> {
        Some(controller.to_string())
    }
}

/// Adapters are present whenever their report was fetched.
pub(super) fn discovery_seed(controller: ControllerOrdinal) -> DiscoveryDraft {
    DiscoveryDraft {
        id: Some(controller.to_string()),
        presence: Some(ADAPTER_PRESENT.to_owned()),
        ..DiscoveryDraft::new(DeviceKind::Adapter)
    }
}

pub(super) fn discovery_fields() -> &'static FieldTable<DiscoveryDraft> {
    &DISCOVERY_FIELDS
}
