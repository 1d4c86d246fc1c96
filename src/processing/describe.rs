//! Summary statistics for the numeric columns of a [`crate::types::DataSet`].

use crate::types::{DataSet, Value};

/// Descriptive statistics of one numeric column. Nulls are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    /// Column name.
    pub column: String,
    /// Number of non-null values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: Option<f64>,
    /// Sample standard deviation (n - 1). `None` below two values.
    pub std: Option<f64>,
    /// Smallest value.
    pub min: Option<f64>,
    /// 25th percentile.
    pub q25: Option<f64>,
    /// 50th percentile.
    pub median: Option<f64>,
    /// 75th percentile.
    pub q75: Option<f64>,
    /// Largest value.
    pub max: Option<f64>,
}

/// Summarize every `Int64`/`Float64` column, in schema order.
pub fn describe(dataset: &DataSet) -> Vec<ColumnSummary> {
    dataset
        .schema
        .fields
        .iter()
        .enumerate()
        .filter(|(_, f)| f.data_type.is_numeric())
        .map(|(idx, f)| {
            let mut values: Vec<f64> = dataset
                .rows
                .iter()
                .filter_map(|r| r.get(idx).and_then(Value::as_f64))
                .collect();
            values.sort_by(f64::total_cmp);
            summarize(&f.name, &values)
        })
        .collect()
}

fn summarize(column: &str, sorted: &[f64]) -> ColumnSummary {
    let count = sorted.len();
    let mean = (count > 0).then(|| sorted.iter().sum::<f64>() / count as f64);
    let std = mean.filter(|_| count > 1).map(|m| {
        let ss: f64 = sorted.iter().map(|v| (v - m).powi(2)).sum();
        (ss / (count - 1) as f64).sqrt()
    });

    ColumnSummary {
        column: column.to_owned(),
        count,
        mean,
        std,
        min: sorted.first().copied(),
        q25: quantile(sorted, 0.25),
        median: quantile(sorted, 0.5),
        q75: quantile(sorted, 0.75),
        max: sorted.last().copied(),
    }
}

/// Linear interpolation between the closest ranks of an ascending slice.
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64))
}
