//! Dataset file loading. CSV exports (pandas style) and JSON documents are
//! both accepted; rows that cannot be read are skipped with a warning.

use std::io::Read;
use std::path::Path;

use serde_json::{Map, Number, Value};
use thiserror::Error;

use api::{ApiError, Dataset, Record};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] ApiError),

    #[error("unsupported dataset format: {0}")]
    UnsupportedFormat(String),
}

pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => read_csv(std::fs::File::open(path)?),
        "json" => Ok(api::decode_dataset(&std::fs::read(path)?)?),
        other => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}

pub fn read_csv<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let mut records = Vec::new();
    for (line, row) in csv_reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                tracing::warn!(line, %err, "skipping unreadable CSV row");
                continue;
            }
        };

        let object: Map<String, Value> = headers
            .iter()
            .zip(row.iter())
            .map(|(header, cell)| (header.to_string(), cell_value(cell)))
            .collect();

        match serde_json::from_value::<Record>(Value::Object(object)) {
            Ok(record) => records.push(record),
            Err(err) => tracing::warn!(line, %err, "skipping malformed CSV row"),
        }
    }

    Ok(Dataset::new(records))
}

/// Typed JSON value for one CSV cell: blanks become null, pandas booleans and
/// numbers are recognised, everything else stays text.
fn cell_value(cell: &str) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    match trimmed {
        "True" | "true" => return Value::Bool(true),
        "False" | "false" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(int) = trimmed.parse::<i64>() {
        return Value::Number(int.into());
    }
    if let Some(number) = trimmed.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(number);
    }
    Value::String(trimmed.to_string())
}
