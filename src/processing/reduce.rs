//! Reduction operations for [`crate::types::DataSet`].

use crate::error::{ProcessingError, ProcessingResult};
use crate::types::{ClosedRange, DataSet, DataType, Value};

/// Built-in reduction operations over a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Count all rows (including nulls).
    Count,
    /// Sum numeric values, ignoring nulls.
    Sum,
    /// Minimum numeric value, ignoring nulls.
    Min,
    /// Maximum numeric value, ignoring nulls.
    Max,
    /// Arithmetic mean of numeric values as `Float64`, ignoring nulls.
    Mean,
}

/// Reduce a column using a built-in [`ReduceOp`].
///
/// - Returns [`ProcessingError::UnknownColumn`] if `column` does not exist in the schema.
/// - For `Sum`/`Min`/`Max`/`Mean`, returns `Value::Null` if there are no non-null values or the
///   column is not numeric.
/// - For `Count`, always returns `Value::Int64(row_count)`.
/// - An `Int64` sum that overflows is returned as `Float64`.
pub fn reduce(dataset: &DataSet, column: &str, op: ReduceOp) -> ProcessingResult<Value> {
    let idx = dataset.schema.require_index(column)?;

    Ok(match op {
        ReduceOp::Count => Value::Int64(dataset.row_count() as i64),
        ReduceOp::Mean => {
            let (sum, n) = dataset.reduce_rows((0.0f64, 0usize), |(sum, n), row| {
                match row.get(idx).and_then(Value::as_f64) {
                    Some(v) => (sum + v, n + 1),
                    None => (sum, n),
                }
            });
            if n == 0 {
                Value::Null
            } else {
                Value::Float64(sum / n as f64)
            }
        }
        ReduceOp::Sum | ReduceOp::Min | ReduceOp::Max => {
            reduce_numeric_typed(dataset, idx, dataset.schema.fields[idx].data_type, op)
        }
    })
}

fn reduce_numeric_typed(dataset: &DataSet, idx: usize, data_type: DataType, op: ReduceOp) -> Value {
    match data_type {
        DataType::Int64 => {
            let mut acc: Option<i64> = None;
            for row in &dataset.rows {
                if let Some(Value::Int64(v)) = row.get(idx) {
                    acc = Some(match (op, acc) {
                        (ReduceOp::Sum, Some(a)) => match a.checked_add(*v) {
                            Some(sum) => sum,
                            None => return float_sum(dataset, idx),
                        },
                        (ReduceOp::Min, Some(a)) => a.min(*v),
                        (ReduceOp::Max, Some(a)) => a.max(*v),
                        (_, None) => *v,
                        _ => unreachable!("non-numeric op handled earlier"),
                    });
                }
            }
            acc.map(Value::Int64).unwrap_or(Value::Null)
        }
        DataType::Float64 => {
            let mut acc: Option<f64> = None;
            for row in &dataset.rows {
                if let Some(Value::Float64(v)) = row.get(idx) {
                    acc = Some(match (op, acc) {
                        (ReduceOp::Sum, Some(a)) => a + v,
                        (ReduceOp::Min, Some(a)) => a.min(*v),
                        (ReduceOp::Max, Some(a)) => a.max(*v),
                        (_, None) => *v,
                        _ => unreachable!("non-numeric op handled earlier"),
                    });
                }
            }
            acc.map(Value::Float64).unwrap_or(Value::Null)
        }
        _ => Value::Null,
    }
}

/// Sum of an integer column that no longer fits in `i64`.
fn float_sum(dataset: &DataSet, idx: usize) -> Value {
    Value::Float64(
        dataset
            .rows
            .iter()
            .filter_map(|row| row.get(idx).and_then(Value::as_f64))
            .sum(),
    )
}

/// Observed `[min, max]` of a numeric column, e.g. to bound a range slider.
///
/// `Float64` bounds are widened to the enclosing integers. Returns `Ok(None)` when the column
/// holds no non-null values.
pub fn numeric_bounds(dataset: &DataSet, column: &str) -> ProcessingResult<Option<ClosedRange>> {
    let idx = dataset.schema.require_index(column)?;
    let data_type = dataset.schema.fields[idx].data_type;
    if !data_type.is_numeric() {
        return Err(ProcessingError::NotNumeric {
            column: column.to_owned(),
            data_type,
        });
    }

    let lo = reduce(dataset, column, ReduceOp::Min)?;
    let hi = reduce(dataset, column, ReduceOp::Max)?;
    Ok(match (lo, hi) {
        (Value::Int64(lo), Value::Int64(hi)) => Some(ClosedRange::new(lo, hi)),
        (Value::Float64(lo), Value::Float64(hi)) => {
            Some(ClosedRange::new(lo.floor() as i64, hi.ceil() as i64))
        }
        _ => None,
    })
}
