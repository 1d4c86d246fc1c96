//! CSV ingestion implementation.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Cell spellings treated as missing in addition to empty cells.
pub const DEFAULT_NULL_MARKERS: &[&str] = &["NA", "N/A", "NaN", "nan", "null", "NULL", "None"];

/// Owned copy of [`DEFAULT_NULL_MARKERS`].
pub fn default_null_markers() -> Vec<String> {
    DEFAULT_NULL_MARKERS.iter().map(|s| s.to_string()).collect()
}

/// Reader builder used by all path-based entrypoints.
pub fn reader_builder(delimiter: u8) -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .delimiter(delimiter)
        .trim(csv::Trim::Headers);
    builder
}

/// Ingest a CSV file into an in-memory [`DataSet`] using a provided schema.
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain all schema fields (order can differ).
/// - Each value is parsed according to the schema field type.
/// - Empty cells and [`DEFAULT_NULL_MARKERS`] become [`Value::Null`].
pub fn ingest_csv_from_path(path: impl AsRef<Path>, schema: &Schema) -> IngestionResult<DataSet> {
    let mut rdr = reader_builder(b',').from_path(path)?;
    ingest_csv_from_reader(&mut rdr, schema, &default_null_markers())
}

/// Ingest a CSV file, inferring one [`DataType`] per column from its values.
pub fn ingest_csv_inferred_from_path(path: impl AsRef<Path>) -> IngestionResult<DataSet> {
    let mut rdr = reader_builder(b',').from_path(path)?;
    ingest_csv_inferred_from_reader(&mut rdr, &default_null_markers())
}

/// Ingest CSV data from an existing CSV reader using a provided schema.
pub fn ingest_csv_from_reader<R: Read>(
    rdr: &mut csv::Reader<R>,
    schema: &Schema,
    null_markers: &[String],
) -> IngestionResult<DataSet> {
    let headers = read_headers(rdr)?;

    // Map schema fields -> CSV column indexes (allows re-ordered CSV columns).
    let mut col_idxs = Vec::with_capacity(schema.fields.len());
    for field in &schema.fields {
        match headers.iter().position(|h| h == field.name) {
            Some(idx) => col_idxs.push(idx),
            None => {
                return Err(IngestionError::SchemaMismatch {
                    message: format!(
                        "missing required column '{field}'. headers={:?}",
                        headers.iter().collect::<Vec<_>>(),
                        field = field.name
                    ),
                });
            }
        }
    }

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        let record = result?;
        rows.push(parse_record(
            user_row(row_idx0),
            &record,
            schema,
            &col_idxs,
            null_markers,
        )?);
    }

    Ok(DataSet::new(schema.clone(), rows))
}

/// Ingest CSV data from an existing CSV reader, inferring column types.
///
/// A column is `Int64` if every non-missing cell parses as an integer, else `Float64` if every
/// cell parses as a float, else `Bool` if every cell is `true`/`false`, else `Utf8`. Columns
/// with no non-missing cells are `Utf8`. Column order follows the header.
pub fn ingest_csv_inferred_from_reader<R: Read>(
    rdr: &mut csv::Reader<R>,
    null_markers: &[String],
) -> IngestionResult<DataSet> {
    let headers = read_headers(rdr)?;
    let records = rdr.records().collect::<Result<Vec<_>, _>>()?;

    let schema = infer_schema(&headers, &records, null_markers);
    let col_idxs: Vec<usize> = (0..schema.fields.len()).collect();

    let mut rows: Vec<Vec<Value>> = Vec::with_capacity(records.len());
    for (row_idx0, record) in records.iter().enumerate() {
        rows.push(parse_record(
            user_row(row_idx0),
            record,
            &schema,
            &col_idxs,
            null_markers,
        )?);
    }

    Ok(DataSet::new(schema, rows))
}

fn read_headers<R: Read>(rdr: &mut csv::Reader<R>) -> IngestionResult<StringRecord> {
    let headers = rdr.headers()?.clone();
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(IngestionError::SchemaMismatch {
            message: "csv input has no header row".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for h in headers.iter() {
        if !seen.insert(h) {
            return Err(IngestionError::SchemaMismatch {
                message: format!("duplicate column '{h}' in header"),
            });
        }
    }
    Ok(headers)
}

// Report 1-based row number for users; +1 again because header is row 1.
fn user_row(row_idx0: usize) -> usize {
    row_idx0 + 2
}

fn parse_record(
    row: usize,
    record: &StringRecord,
    schema: &Schema,
    col_idxs: &[usize],
    null_markers: &[String],
) -> IngestionResult<Vec<Value>> {
    schema
        .fields
        .iter()
        .zip(col_idxs.iter())
        .map(|(field, &csv_idx)| {
            let raw = record.get(csv_idx).unwrap_or("");
            parse_typed_value(row, &field.name, field.data_type, raw, null_markers)
        })
        .collect()
}

fn infer_schema(headers: &StringRecord, records: &[StringRecord], null_markers: &[String]) -> Schema {
    let fields = headers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let cells = records
                .iter()
                .filter_map(|r| r.get(idx))
                .map(str::trim)
                .filter(|raw| !is_missing(raw, null_markers));
            Field::new(name, infer_type(cells))
        })
        .collect();
    Schema::new(fields)
}

fn infer_type<'a>(cells: impl Iterator<Item = &'a str> + Clone) -> DataType {
    if cells.clone().next().is_none() {
        return DataType::Utf8;
    }
    if cells.clone().all(|c| c.parse::<i64>().is_ok()) {
        DataType::Int64
    } else if cells.clone().all(|c| c.parse::<f64>().is_ok()) {
        DataType::Float64
    } else if cells.clone().all(|c| c.eq_ignore_ascii_case("true") || c.eq_ignore_ascii_case("false")) {
        DataType::Bool
    } else {
        DataType::Utf8
    }
}

fn is_missing(trimmed: &str, null_markers: &[String]) -> bool {
    trimmed.is_empty() || null_markers.iter().any(|m| m == trimmed)
}

fn parse_typed_value(
    row: usize,
    column: &str,
    data_type: DataType,
    raw: &str,
    null_markers: &[String],
) -> IngestionResult<Value> {
    let trimmed = raw.trim();
    if is_missing(trimmed, null_markers) {
        return Ok(Value::Null);
    }

    let parse_error = |message: String| IngestionError::ParseError {
        row,
        column: column.to_owned(),
        raw: raw.to_owned(),
        message,
    };

    match data_type {
        DataType::Utf8 => Ok(Value::Utf8(raw.to_owned())),
        DataType::Int64 => trimmed
            .parse::<i64>()
            .map(Value::Int64)
            .map_err(|e| parse_error(e.to_string())),
        DataType::Float64 => trimmed
            .parse::<f64>()
            .map(Value::Float64)
            .map_err(|e| parse_error(e.to_string())),
        DataType::Bool => parse_bool(trimmed).map(Value::Bool).map_err(parse_error),
    }
}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Ok(true),
        "false" | "f" | "0" | "no" | "n" => Ok(false),
        _ => Err("expected bool (true/false/1/0/yes/no)".to_string()),
    }
}
