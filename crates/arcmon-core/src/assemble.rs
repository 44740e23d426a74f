//! Record assembly for one controller's report.
//!
//! Discovery keeps drafts that pass the presence test; stats keeps
//! records with an index key. A sub-block whose fields fail to convert
//! is logged and dropped without affecting its neighbours.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::model::{
    AdapterStats, ControllerOrdinal, DeviceKind, DiscoveryRecord, LogicalDeviceStats,
    PhysicalDeviceStats, StatsRecord,
};
use crate::parse::{Record, parse_block, parse_discovery, split_blocks};

/// Stats records by natural key, across controllers.
pub type StatsIndex = BTreeMap<String, StatsRecord>;

/// Discovery records found in `raw`, in report order.
pub fn discover(
    raw: &str,
    kind: DeviceKind,
    controller: ControllerOrdinal,
) -> Vec<DiscoveryRecord> {
    split_blocks(raw, kind)
        .into_iter()
        .filter_map(|block| match parse_discovery(block, kind, controller) {
            Ok(draft) => draft.finish(),
            Err(err) => {
                warn!(%controller, %kind, error = %err, "dropping unparseable sub-block");
                None
            }
        })
        .collect()
}

/// Add every valid record in `raw` to `index`.
///
/// A key already present (for example from an earlier controller) is
/// replaced.
pub fn index_stats(
    raw: &str,
    kind: DeviceKind,
    controller: ControllerOrdinal,
    index: &mut StatsIndex,
) {
    match kind {
        DeviceKind::Adapter => index_records::<AdapterStats>(raw, controller, index),
        DeviceKind::LogicalDevice => index_records::<LogicalDeviceStats>(raw, controller, index),
        DeviceKind::PhysicalDevice => index_records::<PhysicalDeviceStats>(raw, controller, index),
    }
}

fn index_records<R: Record>(raw: &str, controller: ControllerOrdinal, index: &mut StatsIndex) {
    for block in split_blocks(raw, R::KIND) {
        let record = match parse_block::<R>(block, controller) {
            Ok(record) => record,
            Err(err) => {
                warn!(%controller, kind = %R::KIND, error = %err, "dropping unparseable sub-block");
                continue;
            }
        };
        let Some(key) = record.index_key(controller) else {
            continue;
        };
        if index.insert(key.clone(), record.into()).is_some() {
            debug!(%controller, %key, "replaced record with duplicate key");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ordinal(n: u32) -> ControllerOrdinal {
        ControllerOrdinal::new(n).unwrap()
    }

    const PD_REPORT: &str = "\
Physical Device information
   Device #0
      State : Online
      Reported Location : Enclosure 1, Slot 0
      S.M.A.R.T. warnings : 0
   Device #1
      State : Failed
      Reported Location : Enclosure 1, Slot 1
      S.M.A.R.T. warnings : broken
   Device #2
      Reported Location : Enclosure 1, Slot 2
   Device #3
      State : Hot Spare
      Reported Location : Enclosure 1, Slot 3
";

    #[test]
    fn discovery_keeps_only_present_devices() {
        let records = discover(PD_REPORT, DeviceKind::PhysicalDevice, ordinal(1));
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "Controller 1, Enclosure 1, Slot 0",
                "Controller 1, Enclosure 1, Slot 1",
                "Controller 1, Enclosure 1, Slot 3",
            ]
        );
        assert_eq!(records[0].presence, "Online");
    }

    #[test]
    fn stats_drop_unparseable_and_stateless_blocks() {
        let mut index = StatsIndex::new();
        index_stats(
            PD_REPORT,
            DeviceKind::PhysicalDevice,
            ordinal(1),
            &mut index,
        );
        let keys: Vec<&str> = index.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "Controller 1, Enclosure 1, Slot 0",
                "Controller 1, Enclosure 1, Slot 3",
            ]
        );
    }

    #[test]
    fn stats_from_two_controllers_do_not_collide() {
        let mut index = StatsIndex::new();
        index_stats(
            PD_REPORT,
            DeviceKind::PhysicalDevice,
            ordinal(1),
            &mut index,
        );
        index_stats(
            PD_REPORT,
            DeviceKind::PhysicalDevice,
            ordinal(2),
            &mut index,
        );
        assert_eq!(index.len(), 4);
        assert!(index.contains_key("Controller 2, Enclosure 1, Slot 3"));
    }

    #[test]
    fn adapter_stats_are_keyed_by_ordinal() {
        let mut index = StatsIndex::new();
        index_stats(
            "Controller Model : ASR8405\n",
            DeviceKind::Adapter,
            ordinal(2),
            &mut index,
        );
        match index.get("2").unwrap() {
            StatsRecord::Adapter(stats) => assert_eq!(stats.controller_model, "ASR8405"),
            other => panic!("expected adapter stats, got {other:?}"),
        }
    }

    #[test]
    fn adapter_with_malformed_counts_is_not_indexed() {
        let mut index = StatsIndex::new();
        index_stats(
            "Controller Model : ASR8405\nLogical devices/Failed/Degraded : 5/1\n",
            DeviceKind::Adapter,
            ordinal(1),
            &mut index,
        );
        assert!(index.is_empty());
    }

    #[test]
    fn logical_devices_require_identifier() {
        let raw = "\
Logical Device number 0
   Logical Device name : nameless
Logical Device number 1
   Logical Device name : data
   Unique Identifier : 7F00B1C3
";
        let mut index = StatsIndex::new();
        index_stats(raw, DeviceKind::LogicalDevice, ordinal(1), &mut index);
        assert_eq!(index.len(), 1);
        assert!(index.contains_key("7F00B1C3"));
        assert!(!index.contains_key(""));
    }

    #[test]
    fn parsing_is_deterministic() {
        let first = discover(PD_REPORT, DeviceKind::PhysicalDevice, ordinal(1));
        let second = discover(PD_REPORT, DeviceKind::PhysicalDevice, ordinal(1));
        assert_eq!(first, second);
    }
}
