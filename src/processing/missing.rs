//! Missing-value handling for [`crate::types::DataSet`].

use crate::error::ProcessingResult;
use crate::types::{DataSet, Value};

/// Returns a new [`DataSet`] with every row that holds a [`Value::Null`] in any column removed.
///
/// Schema and relative row order are preserved. Applying it twice is the same as applying it once.
pub fn drop_nulls(dataset: &DataSet) -> DataSet {
    dataset.filter_rows(|row| !row.iter().any(Value::is_null))
}

/// Like [`drop_nulls`], but only the listed columns are checked.
pub fn drop_nulls_in(dataset: &DataSet, columns: &[&str]) -> ProcessingResult<DataSet> {
    let idxs = columns
        .iter()
        .map(|c| dataset.schema.require_index(c))
        .collect::<ProcessingResult<Vec<_>>>()?;
    Ok(dataset.filter_rows(|row| {
        idxs.iter()
            .all(|&i| row.get(i).is_some_and(|v| !v.is_null()))
    }))
}

/// Number of missing values per column, in schema order.
pub fn null_counts(dataset: &DataSet) -> Vec<(String, usize)> {
    let counts = dataset.reduce_rows(vec![0usize; dataset.column_count()], |mut acc, row| {
        for (slot, value) in acc.iter_mut().zip(row) {
            if value.is_null() {
                *slot += 1;
            }
        }
        acc
    });
    dataset
        .schema
        .field_names()
        .map(str::to_owned)
        .zip(counts)
        .collect()
}
