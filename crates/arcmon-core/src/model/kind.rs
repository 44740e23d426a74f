// ── Device kinds and controller ordinals ──
//
// `DeviceKind` selects the arcconf section, the block delimiter and the
// label table. `ControllerOrdinal` is the 1-based controller number the
// caller injects, since report text never says which controller it
// came from.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The three report sections arcconf can produce.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum DeviceKind {
    /// RAID controller card.
    #[serde(rename = "AD")]
    #[strum(serialize = "AD")]
    Adapter,
    /// Virtual volume built from physical disks.
    #[serde(rename = "LD")]
    #[strum(serialize = "LD")]
    LogicalDevice,
    /// Disk drive attached to a controller.
    #[serde(rename = "PD")]
    #[strum(serialize = "PD")]
    PhysicalDevice,
}

impl DeviceKind {
    /// Section code passed to `arcconf getconfig` and used in discovery.
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Literal string that heads every device section of this kind.
    ///
    /// Adapter reports describe exactly one controller and are not split.
    pub fn delimiter(self) -> Option<&'static str> {
        match self {
            Self::Adapter => None,
            Self::LogicalDevice => Some("Logical Device number"),
            Self::PhysicalDevice => Some("Device #"),
        }
    }
}

/// 1-based controller number, as understood by arcconf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControllerOrdinal(u32);

impl ControllerOrdinal {
    /// Returns `None` for zero, which is never a valid ordinal.
    pub fn new(ordinal: u32) -> Option<Self> {
        (ordinal > 0).then_some(Self(ordinal))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Ordinals `1..=count`, in ascending order.
    pub fn range(count: u32) -> impl Iterator<Item = Self> {
        (1..=count).map(Self)
    }
}

impl fmt::Display for ControllerOrdinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn kind_codes() {
        assert_eq!(DeviceKind::Adapter.code(), "AD");
        assert_eq!(DeviceKind::LogicalDevice.code(), "LD");
        assert_eq!(DeviceKind::PhysicalDevice.to_string(), "PD");
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!("ad".parse::<DeviceKind>().unwrap(), DeviceKind::Adapter);
        assert_eq!(
            "Ld".parse::<DeviceKind>().unwrap(),
            DeviceKind::LogicalDevice
        );
        assert_eq!(
            "PD".parse::<DeviceKind>().unwrap(),
            DeviceKind::PhysicalDevice
        );
        assert!("xx".parse::<DeviceKind>().is_err());
    }

    #[test]
    fn kind_serializes_as_code() {
        let json = serde_json::to_string(&DeviceKind::LogicalDevice).unwrap();
        assert_eq!(json, "\"LD\"");
    }

    #[test]
    fn delimiters() {
        assert_eq!(DeviceKind::Adapter.delimiter(), None);
        assert_eq!(
            DeviceKind::LogicalDevice.delimiter(),
            Some("Logical Device number")
        );
        assert_eq!(DeviceKind::PhysicalDevice.delimiter(), Some("Device #"));
    }

    #[test]
    fn ordinal_rejects_zero() {
        assert!(ControllerOrdinal::new(0).is_none());
        assert_eq!(ControllerOrdinal::new(3).unwrap().get(), 3);
    }

    #[test]
    fn ordinal_range_is_one_based() {
        let ordinals: Vec<u32> = ControllerOrdinal::range(3)
            .map(ControllerOrdinal::get)
            .collect();
        assert_eq!(ordinals, vec![1, 2, 3]);
        assert_eq!(ControllerOrdinal::range(0).count(), 0);
    }
}
