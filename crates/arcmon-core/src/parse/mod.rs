//! Block splitting and label-driven line parsing.
//!
//! Report text has no machine-readable structure. A report is cut into
//! sub-blocks on the kind's delimiter ([`split_blocks`]), each sub-block is
//! read line by line as `label : value` pairs ([`field_lines`]), and every
//! normalized label is looked up in a per-kind [`FieldTable`] that knows
//! which record field it fills and how. Unknown labels are ignored.

pub mod adapter;
pub mod logical;
pub mod physical;

use std::collections::HashMap;

use crate::error::ParseError;
use crate::model::{ControllerOrdinal, DeviceKind, DiscoveryDraft, StatsRecord};

/// Separator between a label and its value.
pub const SEPARATOR: &str = " : ";

// ── Block splitting ─────────────────────────────────────────────────

/// Cut a raw report into candidate sub-blocks.
///
/// Adapter reports are a single block. Device reports are split on the
/// kind's delimiter; the fragment before the first delimiter is kept and
/// is expected to fail the presence test downstream.
pub fn split_blocks(raw: &str, kind: DeviceKind) -> Vec<&str> {
    match kind.delimiter() {
        None => vec![raw],
        Some(delimiter) => raw.split(delimiter).collect(),
    }
}

// ── Line splitting ──────────────────────────────────────────────────

/// One line of a sub-block: normalized label and, if present, trimmed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLine<'a> {
    /// Trimmed and lower-cased.
    pub label: String,
    /// `None` when the line has no separator.
    pub value: Option<&'a str>,
}

/// Split every line on the first [`SEPARATOR`].
pub fn field_lines(block: &str) -> impl Iterator<Item = FieldLine<'_>> {
    block.lines().map(|line| {
        let mut parts = line.splitn(2, SEPARATOR);
        let label = parts.next().unwrap_or_default().trim().to_lowercase();
        FieldLine {
            label,
            value: parts.next().map(str::trim),
        }
    })
}

// ── Field tables ────────────────────────────────────────────────────

/// A recognized value, with the context some setters need.
#[derive(Debug, Clone, Copy)]
pub struct FieldValue<'a> {
    pub label: &'a str,
    pub text: &'a str,
    pub controller: ControllerOrdinal,
}

/// Setter for fields that need more than a plain assignment.
pub type Setter<R> = fn(&mut R, &FieldValue<'_>) -> Result<(), ParseError>;

/// How a recognized label updates its record.
pub enum Field<R> {
    /// Trimmed value stored verbatim.
    Text(fn(&mut R) -> &mut String),
    /// Value parsed as an unsigned integer.
    Count(fn(&mut R) -> &mut u32),
    /// Kind-specific transform.
    Custom(Setter<R>),
    /// The label's occurrence alone sets the field; any value is ignored.
    Marker(fn(&mut R)),
}

impl<R> Field<R> {
    fn apply(&self, record: &mut R, value: &FieldValue<'_>) -> Result<(), ParseError> {
        match self {
            Self::Text(slot) => value.text.clone_into(slot(record)),
            Self::Count(slot) => *slot(record) = parse_count(value)?,
            Self::Custom(set) => set(record, value)?,
            Self::Marker(mark) => mark(record),
        }
        Ok(())
    }
}

/// Normalized label → field mapping for one record shape.
pub struct FieldTable<R> {
    fields: HashMap<&'static str, Field<R>>,
}

impl<R> Default for FieldTable<R> {
    fn default() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }
}

impl<R> FieldTable<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(self, label: &'static str, slot: fn(&mut R) -> &mut String) -> Self {
        self.with(label, Field::Text(slot))
    }

    pub fn count(self, label: &'static str, slot: fn(&mut R) -> &mut u32) -> Self {
        self.with(label, Field::Count(slot))
    }

    pub fn custom(self, label: &'static str, setter: Setter<R>) -> Self {
        self.with(label, Field::Custom(setter))
    }

    pub fn marker(self, label: &'static str, mark: fn(&mut R)) -> Self {
        self.with(label, Field::Marker(mark))
    }

    fn with(mut self, label: &'static str, field: Field<R>) -> Self {
        self.fields.insert(label, field);
        self
    }

    pub fn get(&self, label: &str) -> Option<&Field<R>> {
        self.fields.get(label)
    }

    /// Run every line of `block` through the table, starting from `record`.
    ///
    /// Lines without a separator only match [`Field::Marker`] entries. The
    /// first conversion failure aborts the block.
    pub fn parse(
        &self,
        mut record: R,
        block: &str,
        controller: ControllerOrdinal,
    ) -> Result<R, ParseError> {
        for line in field_lines(block) {
            let Some(field) = self.get(&line.label) else {
                continue;
            };
            match (field, line.value) {
                (Field::Marker(mark), _) => mark(&mut record),
                (field, Some(text)) => field.apply(
                    &mut record,
                    &FieldValue {
                        label: &line.label,
                        text,
                        controller,
                    },
                )?,
                (_, None) => {}
            }
        }
        Ok(record)
    }
}

// ── Value transforms ────────────────────────────────────────────────

fn parse_count(value: &FieldValue<'_>) -> Result<u32, ParseError> {
    value
        .text
        .parse()
        .map_err(|e| ParseError::new(value.label, value.text, format!("{e}")))
}

/// Parse `total/failed/degraded` into its three counts, in that order.
pub fn parse_triple(value: &FieldValue<'_>) -> Result<[u32; 3], ParseError> {
    let parts: Vec<&str> = value.text.split('/').map(str::trim).collect();
    let &[total, failed, degraded] = parts.as_slice() else {
        return Err(ParseError::new(
            value.label,
            value.text,
            format!("expected 3 '/'-separated counts, found {}", parts.len()),
        ));
    };
    let count = |part: &str| {
        part.parse::<u32>()
            .map_err(|e| ParseError::new(value.label, value.text, format!("'{part}': {e}")))
    };
    Ok([count(total)?, count(failed)?, count(degraded)?])
}

/// Identifier of a physical device: `Controller <n>, <location>`.
pub fn location_id(controller: ControllerOrdinal, location: &str) -> String {
    format!("Controller {controller}, {location}")
}

// ── Records ─────────────────────────────────────────────────────────

/// A stats shape with its label table and validity rule.
pub trait Record: Sized + Into<StatsRecord> + 'static {
    const KIND: DeviceKind;

    /// Fresh record for one sub-block, with kind-determined defaults.
    fn seed(controller: ControllerOrdinal) -> Self;

    fn fields() -> &'static FieldTable<Self>;

    /// Key to index this record under, or `None` if it is not a real device.
    fn index_key(&self, controller: ControllerOrdinal) -> Option<String>;
}

/// Parse one sub-block into a stats record.
pub fn parse_block<R: Record>(block: &str, controller: ControllerOrdinal) -> Result<R, ParseError> {
    R::fields().parse(R::seed(controller), block, controller)
}

/// Parse one sub-block into a discovery draft for `kind`.
pub fn parse_discovery(
    block: &str,
    kind: DeviceKind,
    controller: ControllerOrdinal,
) -> Result<DiscoveryDraft, ParseError> {
    let (fields, seed) = match kind {
        DeviceKind::Adapter => (adapter::discovery_fields(), adapter::discovery_seed(controller)),
        DeviceKind::LogicalDevice => (logical::discovery_fields(), DiscoveryDraft::new(kind)),
        DeviceKind::PhysicalDevice => (physical::discovery_fields(), DiscoveryDraft::new(kind)),
    };
    fields.parse(seed, block, controller)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ordinal(n: u32) -> ControllerOrdinal {
        ControllerOrdinal::new(n).unwrap()
    }

    fn value<'a>(label: &'a str, text: &'a str) -> FieldValue<'a> {
        FieldValue {
            label,
            text,
            controller: ordinal(1),
        }
    }

    #[derive(Debug, Default, PartialEq)]
    struct Sample {
        name: String,
        count: u32,
        flag: bool,
    }

    fn sample_table() -> FieldTable<Sample> {
        FieldTable::<Sample>::new()
            .text("name", |s| &mut s.name)
            .count("count", |s| &mut s.count)
            .marker("flag section", |s| s.flag = true)
    }

    #[test]
    fn adapter_report_is_one_block() {
        let raw = "Controller Status : Optimal\nController Model : X\n";
        assert_eq!(split_blocks(raw, DeviceKind::Adapter), vec![raw]);
    }

    #[test]
    fn device_reports_keep_leading_fragment() {
        let raw = "header\nDevice #0\nState : Online\nDevice #1\nState : Ready\n";
        let blocks = split_blocks(raw, DeviceKind::PhysicalDevice);
        assert_eq!(
            blocks,
            vec!["header\n", "0\nState : Online\n", "1\nState : Ready\n"]
        );
    }

    #[test]
    fn logical_reports_split_on_logical_delimiter() {
        let raw = "Logical Device number 0\nA : 1\nLogical Device number 1\nA : 2\n";
        let blocks = split_blocks(raw, DeviceKind::LogicalDevice);
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], "");
    }

    #[test]
    fn empty_report_yields_single_empty_block() {
        assert_eq!(split_blocks("", DeviceKind::PhysicalDevice), vec![""]);
    }

    #[test]
    fn field_lines_normalize_label_and_trim_value() {
        let lines: Vec<FieldLine<'_>> =
            field_lines("   Controller Model   :   ASR8405  \r\n").collect();
        assert_eq!(
            lines,
            vec![FieldLine {
                label: "controller model".into(),
                value: Some("ASR8405"),
            }]
        );
    }

    #[test]
    fn field_lines_split_on_first_separator_only() {
        let line = field_lines("Reported Location : Enclosure 0 : Slot 1")
            .next()
            .unwrap();
        assert_eq!(line.value, Some("Enclosure 0 : Slot 1"));
    }

    #[test]
    fn line_without_separator_has_no_value() {
        let line = field_lines("   Controller ZMM Information").next().unwrap();
        assert_eq!(line.label, "controller zmm information");
        assert_eq!(line.value, None);
    }

    #[test]
    fn colon_without_spaces_is_not_a_separator() {
        let line = field_lines("Temperature:40 C").next().unwrap();
        assert_eq!(line.value, None);
    }

    #[test]
    fn table_parse_assigns_known_labels() {
        let block = "  NAME :  disk \ncount : 7\nunknown : x\nFlag Section\n";
        let sample = sample_table()
            .parse(Sample::default(), block, ordinal(1))
            .unwrap();
        assert_eq!(
            sample,
            Sample {
                name: "disk".into(),
                count: 7,
                flag: true,
            }
        );
    }

    #[test]
    fn table_parse_skips_valued_fields_without_separator() {
        let sample = sample_table()
            .parse(Sample::default(), "name\ncount\n", ordinal(1))
            .unwrap();
        assert_eq!(sample, Sample::default());
    }

    #[test]
    fn table_parse_fails_on_bad_count() {
        let err = sample_table()
            .parse(Sample::default(), "count : many\n", ordinal(1))
            .unwrap_err();
        assert_eq!(err.label, "count");
        assert_eq!(err.value, "many");
    }

    #[test]
    fn triple_parses_in_order() {
        assert_eq!(parse_triple(&value("ld", "5/1/0")).unwrap(), [5, 1, 0]);
        assert_eq!(parse_triple(&value("ld", "5 / 1 / 0")).unwrap(), [5, 1, 0]);
    }

    #[test]
    fn triple_rejects_malformed_values() {
        assert!(parse_triple(&value("ld", "5/1")).is_err());
        assert!(parse_triple(&value("ld", "5/1/0/0")).is_err());
        assert!(parse_triple(&value("ld", "5/x/0")).is_err());
        assert!(parse_triple(&value("ld", "")).is_err());
    }

    #[test]
    fn location_id_prefixes_controller() {
        assert_eq!(
            location_id(ordinal(2), "Enclosure 1, Slot 3"),
            "Controller 2, Enclosure 1, Slot 3"
        );
    }
}
