// ── Discovery shapes ──
//
// `DiscoveryDraft` is what a line parser fills in; `DiscoveryRecord` is
// what survives the presence test and gets serialized for the
// monitoring platform's low-level discovery.

use serde::{Deserialize, Serialize};

use super::kind::DeviceKind;

/// Sentinel presence value for adapters, which are present whenever queried.
pub const ADAPTER_PRESENT: &str = "Present";

/// One discovered device, in the platform's macro naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryRecord {
    #[serde(rename = "{#DEVICE_ID}")]
    pub id: String,
    #[serde(rename = "{#DEVICE_TYPE}")]
    pub kind: DeviceKind,
    #[serde(rename = "{#DEVICE_ALIAS}")]
    pub alias: String,
    #[serde(rename = "{#PRESENT}")]
    pub presence: String,
}

/// The discovery document: `{"data": [...]}`, never null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discovery {
    pub data: Vec<DiscoveryRecord>,
}

impl Discovery {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl FromIterator<DiscoveryRecord> for Discovery {
    fn from_iter<I: IntoIterator<Item = DiscoveryRecord>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

/// Discovery fields as seen so far in one sub-block.
///
/// `kind` is fixed at construction; the optional fields are only set by
/// recognized lines, so "never seen" and "seen but empty" stay distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryDraft {
    pub kind: DeviceKind,
    pub id: Option<String>,
    pub alias: Option<String>,
    pub presence: Option<String>,
}

impl DiscoveryDraft {
    pub fn new(kind: DeviceKind) -> Self {
        Self {
            kind,
            id: None,
            alias: None,
            presence: None,
        }
    }

    /// A draft denotes a real device only if presence ended up non-empty.
    pub fn is_present(&self) -> bool {
        self.presence.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Apply the drop rule: absent drafts yield `None`.
    pub fn finish(self) -> Option<DiscoveryRecord> {
        if !self.is_present() {
            return None;
        }
        Some(DiscoveryRecord {
            id: self.id.unwrap_or_default(),
            kind: self.kind,
            alias: self.alias.unwrap_or_default(),
            presence: self.presence.unwrap_or_default(),
        })
    }
}
