//! Logical device (`LD`) report labels.

use std::sync::LazyLock;

use super::{FieldTable, Record};
use crate::model::{ControllerOrdinal, DeviceKind, DiscoveryDraft, LogicalDeviceStats};

static STATS_FIELDS: LazyLock<FieldTable<LogicalDeviceStats>> = LazyLock::new(|| {
    FieldTable::<LogicalDeviceStats>::new()
        .text("logical device name", |r| &mut r.name)
        .text("block size of member drives", |r| &mut r.block_size)
        .text("raid level", |r| &mut r.raid_level)
        .text("unique identifier", |r| &mut r.unique_identifier)
        .text("status of logical device", |r| &mut r.status)
        .text("size", |r| &mut r.size)
        .text("parity space", |r| &mut r.parity_space)
        .text("stripe-unit size", |r| &mut r.stripe_unit_size)
        .text("interface type", |r| &mut r.interface_type)
        .text("device type", |r| &mut r.device_type)
        .text("read-cache setting", |r| &mut r.read_cache_setting)
        .text("read-cache status", |r| &mut r.read_cache_status)
        .text("write-cache setting", |r| &mut r.write_cache_setting)
        .text("write-cache status", |r| &mut r.write_cache_status)
        .text("partitioned", |r| &mut r.partitioned)
        .text("protected by hot-spare", |r| &mut r.protected_by_hot_spare)
        .text("bootable", |r| &mut r.bootable)
        .text("failed stripes", |r| &mut r.failed_stripes)
        .text("power settings", |r| &mut r.power_settings)
});

// A volume is discovered through its unique identifier, which doubles as
// its alias.
static DISCOVERY_FIELDS: LazyLock<FieldTable<DiscoveryDraft>> = LazyLock::new(|| {
    FieldTable::<DiscoveryDraft>::new().custom("unique identifier", |draft, value| {
        draft.id = Some(value.text.to_owned());
        draft.alias = Some(value.text.to_owned());
        draft.presence = Some(value.text.to_owned());
        Ok(())
    })
});

impl Record for LogicalDeviceStats {
    const KIND: DeviceKind = DeviceKind::LogicalDevice;

    fn seed(_controller: ControllerOrdinal) -> Self {
        Self::default()
    }

    fn fields() -> &'static FieldTable<Self> {
        &STATS_FIELDS
    }

    fn index_key(&self, _controller: ControllerOrdinal) -> Option<String> {
        (!self.unique_identifier.is_empty()).then(|| self.unique_identifier.clone())
    }
}

pub(super) fn discovery_fields() -> &'static FieldTable<DiscoveryDraft> {
    &DISCOVERY_FIELDS
}
