//! Row filtering for [`crate::types::DataSet`].

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::{ClosedRange, DataSet, Value};

/// Returns a new [`DataSet`] containing only rows for which `predicate` returns `true`.
///
/// This is a convenience wrapper around [`DataSet::filter_rows`].
pub fn filter<F>(dataset: &DataSet, predicate: F) -> DataSet
where
    F: FnMut(&[Value]) -> bool,
{
    dataset.filter_rows(predicate)
}

/// Keep the rows whose value in `column` lies within `range` (both ends inclusive).
///
/// - `column` must exist and be `Int64` or `Float64`.
/// - An empty range (`lo > hi`) yields an empty dataset.
/// - Nulls (and cells missing from a short row) never match.
pub fn filter_range(dataset: &DataSet, column: &str, range: ClosedRange) -> ProcessingResult<DataSet> {
    let idx = dataset.schema.require_index(column)?;
    let data_type = dataset.schema.fields[idx].data_type;
    if !data_type.is_numeric() {
        return Err(ProcessingError::NotNumeric {
            column: column.to_owned(),
            data_type,
        });
    }

    if range.is_empty() {
        return Ok(DataSet::empty(dataset.schema.clone()));
    }

    Ok(dataset.filter_rows(|row| match row.get(idx) {
        Some(Value::Int64(v)) => range.lo <= *v && *v <= range.hi,
        Some(other) => other.as_f64().is_some_and(|v| range.contains(v)),
        None => false,
    }))
}
