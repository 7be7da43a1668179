//! Shared rendering helpers for the action handlers.

use crate::actions::CliActionError;
use crate::format::{self, Column, OutputFormat};
use crate::model;
use serde_json::Value;

/// Prints a list response: the extracted records as pretty JSON, or as a
/// table over the given columns.
pub fn print_list(
    response: &Value,
    columns: &[Column],
    format: OutputFormat,
) -> Result<(), CliActionError> {
    let records = model::extract_records(response);
    match format {
        OutputFormat::Json => println!("{}", format::to_pretty_json(&Value::Array(records))?),
        OutputFormat::Table => println!("{}", format::render_table(&records, columns)),
    }
    Ok(())
}

/// Prints a single-record response: the raw body as pretty JSON, or the
/// labeled detail lines.
pub fn print_detail(
    response: &Value,
    labels: &[(&str, &str)],
    format: OutputFormat,
) -> Result<(), CliActionError> {
    match format {
        OutputFormat::Json => println!("{}", format::to_pretty_json(response)?),
        OutputFormat::Table => println!("{}", format::render_detail(response, labels)),
    }
    Ok(())
}
