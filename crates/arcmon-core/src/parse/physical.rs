//! Physical device (`PD`) report labels.

use std::sync::LazyLock;

use super::{FieldTable, Record, location_id};
use crate::model::{ControllerOrdinal, DeviceKind, DiscoveryDraft, PhysicalDeviceStats};

static STATS_FIELDS: LazyLock<FieldTable<PhysicalDeviceStats>> = LazyLock::new(|| {
    FieldTable::<PhysicalDeviceStats>::new()
        .custom("reported location", |r, value| {
            r.device_id = location_id(value.controller, value.text);
            Ok(())
        })
        .text("state", |r| &mut r.state)
        .text("block size", |r| &mut r.block_size)
        .text("supported", |r| &mut r.supported)
        .text("transfer speed", |r| &mut r.transfer_speed)
        .text("vendor", |r| &mut r.vendor)
        .text("model", |r| &mut r.model)
        .text("firmware", |r| &mut r.firmware)
        .text("serial number", |r| &mut r.serial_number)
        .text("reserved size", |r| &mut r.reserved_size)
        .text("used size", |r| &mut r.used_size)
        .text("unused size", |r| &mut r.unused_size)
        .text("total size", |r| &mut r.total_size)
        .text("write cache", |r| &mut r.write_cache)
        .text("fru", |r| &mut r.fru)
        .text("s.m.a.r.t.", |r| &mut r.smart)
        .count("s.m.a.r.t. warnings", |r| &mut r.smart_warnings)
        .text("power state", |r| &mut r.power_state)
        .text("supported power state", |r| &mut r.supported_power_states)
        .text("supported power states", |r| &mut r.supported_power_states)
        .text("ssd", |r| &mut r.ssd)
        .text("ncq status", |r| &mut r.ncq)
});

static DISCOVERY_FIELDS: LazyLock<FieldTable<DiscoveryDraft>> = LazyLock::new(|| {
    FieldTable::<DiscoveryDraft>::new()
        .custom("reported location", |draft, value| {
            draft.id = Some(location_id(value.controller, value.text));
            Ok(())
        })
        .custom("state", |draft, value| {
            draft.presence = Some(value.text.to_owned());
            Ok(())
        })
});

impl Record for PhysicalDeviceStats {
    const KIND: DeviceKind = DeviceKind::PhysicalDevice;

    fn seed(_controller: ControllerOrdinal) -> Self {
        Self::default()
    }

    fn fields() -> &'static FieldTable<Self> {
        &STATS_FIELDS
    }

    /// Only drives that report a state are real devices.
    fn index_key(&self, _controller: ControllerOrdinal) -> Option<String> {
        (!self.state.is_empty()).then(|| self.device_id.clone())
    }
}

pub(super) fn discovery_fields() -> &'static FieldTable<DiscoveryDraft> {
    &DISCOVERY_FIELDS
}
