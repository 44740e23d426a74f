//! Output formatting: compact JSON, pretty JSON, YAML, table.
//!
//! Compact JSON is the contract with the monitoring agent; the other
//! formats are for people at a terminal. Everything goes to stdout, logs
//! go to stderr.

use std::io::{self, Write};

use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use arcmon_core::{Discovery, DiscoveryRecord, StatsRecord};

use crate::cli::OutputFormat;
use crate::error::CliError;

// ── Table rows ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DiscoveryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Alias")]
    alias: String,
    #[tabled(rename = "Present")]
    presence: String,
}

impl From<&DiscoveryRecord> for DiscoveryRow {
    fn from(record: &DiscoveryRecord) -> Self {
        Self {
            id: record.id.clone(),
            kind: record.kind.to_string(),
            alias: record.alias.clone(),
            presence: record.presence.clone(),
        }
    }
}

// ── Render dispatchers ───────────────────────────────────────────────

pub fn render_discovery(format: OutputFormat, discovery: &Discovery) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => {
            let rows: Vec<DiscoveryRow> = discovery.data.iter().map(DiscoveryRow::from).collect();
            Ok(Table::new(rows).with(Style::rounded()).to_string())
        }
        _ => render_structured(format, discovery),
    }
}

pub fn render_stats(format: OutputFormat, record: &StatsRecord) -> Result<String, CliError> {
    match format {
        OutputFormat::Table => render_detail(record),
        _ => render_structured(format, record),
    }
}

/// Print the rendered output to stdout.
pub fn print_output(output: &str) -> Result<(), CliError> {
    if output.is_empty() {
        return Ok(());
    }
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_structured<T: Serialize + ?Sized>(
    format: OutputFormat,
    data: &T,
) -> Result<String, CliError> {
    Ok(match format {
        OutputFormat::Json | OutputFormat::Table => serde_json::to_string(data)?,
        OutputFormat::JsonPretty => serde_json::to_string_pretty(data)?,
        OutputFormat::Yaml => serde_yaml::to_string(data)?,
    })
}

/// `label: value` lines, labels right-aligned.
fn render_detail<T: Serialize>(data: &T) -> Result<String, CliError> {
    let value = serde_json::to_value(data)?;
    let Some(fields) = value.as_object() else {
        return Ok(value.to_string());
    };
    let width = fields.keys().map(String::len).max().unwrap_or(0);
    Ok(fields
        .iter()
        .map(|(label, value)| {
            let value = value
                .as_str()
                .map_or_else(|| value.to_string(), ToOwned::to_owned);
            format!("{label:>width$}: {value}")
        })
        .collect::<Vec<_>>()
        .join("\n"))
}
