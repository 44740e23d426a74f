// ── Core error types ──
//
// `CoreError` is what callers of the inventory see. `ParseError` never
// leaves a single sub-block: the assembler logs it and drops the block.
// Process-level failures are translated where the utilities are invoked.

use thiserror::Error;

use crate::model::DeviceKind;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Infrastructure ───────────────────────────────────────────────
    #[error("Cannot detect RAID controllers: {reason}")]
    ControllerDetection { reason: String },

    #[error("{binary} not found")]
    ToolMissing { binary: String, searched: String },

    #[error("Report for controller {ordinal} failed: {reason}")]
    Fetch { ordinal: u32, reason: String },

    // ── Lookup ───────────────────────────────────────────────────────
    #[error("{kind} '{name}' not found")]
    NotFound { kind: DeviceKind, name: String },
}

impl CoreError {
    /// Returns `true` for the soft "utility not installed" condition.
    pub fn is_tool_missing(&self) -> bool {
        matches!(self, Self::ToolMissing { .. })
    }
}

/// A recognized field whose value could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value '{value}' for '{label}': {reason}")]
pub struct ParseError {
    pub label: String,
    pub value: String,
    pub reason: String,
}

impl ParseError {
    pub fn new(label: &str, value: &str, reason: impl Into<String>) -> Self {
        Self {
            label: label.to_owned(),
            value: value.to_owned(),
            reason: reason.into(),
        }
    }
}
