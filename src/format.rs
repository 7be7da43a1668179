//! Output formatting for the AgroView CLI client.
//!
//! Two output formats are supported: a fixed-width text table for terminal
//! reading and pretty-printed JSON for scripting. Tables are driven by an
//! ordered column spec; each column names the record attribute it reads,
//! its header label, and an optional value formatter.

use crate::model;
use serde_json::Value;
use std::str::FromStr;
use strum::EnumIter;

pub const TABLE: &str = "table";
pub const JSON: &str = "json";

/// Cells wider than this are truncated.
pub const MAX_COLUMN_WIDTH: usize = 40;
/// Placeholder for absent or null attributes.
pub const MISSING_VALUE: &str = "N/A";
/// Printed instead of a table when a list comes back empty.
pub const NO_RESULTS_NOTICE: &str = "No results found.";

/// Error types that can occur during formatting operations
#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    /// Error when an unsupported output format is requested
    #[error("invalid output format {0}")]
    UnsupportedOutputFormat(String),
    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),
}

/// Enum representing the supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// Returns a vector of all supported format names as strings
    pub fn names() -> Vec<&'static str> {
        vec![TABLE, JSON]
    }

    /// Resolves the per-command `--json` flag; table is the default.
    pub fn from_json_flag(json: bool) -> OutputFormat {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Table
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormattingError;

    fn from_str(format_str: &str) -> Result<OutputFormat, FormattingError> {
        match format_str.to_lowercase().as_str() {
            TABLE => Ok(OutputFormat::Table),
            JSON => Ok(OutputFormat::Json),
            other => Err(FormattingError::UnsupportedOutputFormat(other.to_string())),
        }
    }
}

/// A single table column: the record attribute it reads, the header label,
/// and an optional formatter applied to present values.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub formatter: Option<fn(&Value) -> String>,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str) -> Column {
        Column {
            key,
            label,
            formatter: None,
        }
    }

    pub const fn with_formatter(
        key: &'static str,
        label: &'static str,
        formatter: fn(&Value) -> String,
    ) -> Column {
        Column {
            key,
            label,
            formatter: Some(formatter),
        }
    }
}

pub fn to_pretty_json(value: &Value) -> Result<String, FormattingError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Formats a numeric acreage/area attribute with one decimal place.
pub fn format_area(value: &Value) -> String {
    match value.as_f64() {
        Some(number) => format!("{:.1}", number),
        None => model::display_text(value),
    }
}

/// Formats an ISO-8601 timestamp attribute as its date part.
pub fn format_date(value: &Value) -> String {
    match value.as_str() {
        Some(text) => text.chars().take(10).collect(),
        None => model::display_text(value),
    }
}

fn cell_text(record: &Value, column: &Column) -> String {
    match record.get(column.key) {
        None | Some(Value::Null) => MISSING_VALUE.to_string(),
        Some(value) => match column.formatter {
            Some(formatter) => formatter(value),
            None => model::display_text(value),
        },
    }
}

/// Truncates to `width` characters and pads right with spaces.
fn fit(text: &str, width: usize) -> String {
    let mut cell: String = text.chars().take(width).collect();
    let used = cell.chars().count();
    for _ in used..width {
        cell.push(' ');
    }
    cell
}

/// Renders records as a fixed-width table.
///
/// Column width is the larger of the label and the widest formatted value,
/// capped at [`MAX_COLUMN_WIDTH`]; longer values are truncated to the width.
/// Output is a header line, a dash rule of the header's length, one line per
/// record, and a trailing `"{n} result(s)"` count. An empty input renders
/// only [`NO_RESULTS_NOTICE`].
pub fn render_table(records: &[Value], columns: &[Column]) -> String {
    if records.is_empty() {
        return NO_RESULTS_NOTICE.to_string();
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| columns.iter().map(|column| cell_text(record, column)).collect())
        .collect();

    let mut widths: Vec<usize> = columns
        .iter()
        .map(|column| column.label.chars().count())
        .collect();
    for row in &rows {
        for (index, cell) in row.iter().enumerate() {
            widths[index] = widths[index].max(cell.chars().count());
        }
    }
    for width in widths.iter_mut() {
        *width = (*width).min(MAX_COLUMN_WIDTH);
    }

    let header = columns
        .iter()
        .zip(&widths)
        .map(|(column, width)| fit(column.label, *width))
        .collect::<Vec<_>>()
        .join("  ");

    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push("-".repeat(header.chars().count()));
    for row in &rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| fit(cell, *width))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line);
    }
    lines.push(format!("{} result(s)", records.len()));

    let mut output = header;
    for line in lines {
        output.push('\n');
        output.push_str(&line);
    }
    output
}

/// Renders a single record as labeled lines, one per declared attribute,
/// with [`MISSING_VALUE`] for absent or null keys.
pub fn render_detail(record: &Value, labels: &[(&str, &str)]) -> String {
    labels
        .iter()
        .map(|(label, key)| {
            let value = model::record_text(record, key)
                .unwrap_or_else(|| MISSING_VALUE.to_string());
            format!("{}:  {}", label, value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
