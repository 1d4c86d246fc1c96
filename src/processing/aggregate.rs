//! Value-count aggregation for [`crate::types::DataSet`].

use std::collections::HashMap;

use crate::error::ProcessingResult;
use crate::types::{DataSet, Value, MISSING};

/// One distinct value and the number of rows holding it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyEntry {
    /// The distinct value.
    pub value: Value,
    /// Rows holding `value`.
    pub count: usize,
}

/// Occurrence counts of the distinct values of one column.
///
/// Entries are ordered by descending count; equal counts keep the order in which the values
/// first appeared in the input.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    column: String,
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Name of the aggregated column.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Iterate entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.iter()
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no value was observed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of aggregated rows.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Largest count, `0` for an empty table.
    pub fn max_count(&self) -> usize {
        self.entries.first().map_or(0, |e| e.count)
    }

    /// Count for `value`, if it occurs.
    pub fn get(&self, value: &Value) -> Option<usize> {
        let key = GroupKey::of(value);
        self.entries
            .iter()
            .find(|e| GroupKey::of(&e.value) == key)
            .map(|e| e.count)
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyEntry;
    type IntoIter = std::slice::Iter<'a, FrequencyEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Hashable identity of a [`Value`].
///
/// Floats group by bit pattern with `-0.0` folded into `0.0` and every NaN folded together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum GroupKey<'a> {
    Null,
    Int64(i64),
    Float64(u64),
    Bool(bool),
    Utf8(&'a str),
}

impl<'a> GroupKey<'a> {
    fn of(value: &'a Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Int64(v) => Self::Int64(*v),
            Value::Float64(v) if v.is_nan() => Self::Float64(f64::NAN.to_bits()),
            Value::Float64(v) if *v == 0.0 => Self::Float64(0.0f64.to_bits()),
            Value::Float64(v) => Self::Float64(v.to_bits()),
            Value::Bool(v) => Self::Bool(*v),
            Value::Utf8(s) => Self::Utf8(s.as_str()),
        }
    }
}

/// Count the rows holding each distinct value of `column`.
///
/// Any column type is accepted. [`Value::Null`] (including cells missing from a short row) is
/// counted as a value of its own, so the counts always sum to `dataset.row_count()`. An empty
/// dataset yields an empty table.
pub fn value_counts(dataset: &DataSet, column: &str) -> ProcessingResult<FrequencyTable> {
    let idx = dataset.schema.require_index(column)?;

    let mut slots: HashMap<GroupKey<'_>, usize> = HashMap::new();
    let mut entries: Vec<FrequencyEntry> = Vec::new();
    for row in &dataset.rows {
        let value = row.get(idx).unwrap_or(&MISSING);
        let slot = *slots.entry(GroupKey::of(value)).or_insert_with(|| {
            entries.push(FrequencyEntry {
                value: value.clone(),
                count: 0,
            });
            entries.len() - 1
        });
        entries[slot].count += 1;
    }

    // Stable: equal counts stay in first-seen order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    Ok(FrequencyTable {
        column: column.to_owned(),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::value_counts;
    use crate::error::ProcessingError;
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn single_column(data_type: DataType, values: Vec<Value>) -> DataSet {
        let schema = Schema::new(vec![Field::new("c", data_type)]);
        DataSet::new(schema, values.into_iter().map(|v| vec![v]).collect())
    }

    fn labels(values: &[&str]) -> DataSet {
        single_column(DataType::Utf8, values.iter().map(|s| Value::from(*s)).collect())
    }

    fn pairs(ds: &DataSet) -> Vec<(String, usize)> {
        value_counts(ds, "c")
            .unwrap()
            .iter()
            .map(|e| (e.value.to_string(), e.count))
            .collect()
    }

    #[test]
    fn short_rows_count_as_null() {
        let schema = Schema::new(vec![
            Field::new("cups", DataType::Int64),
            Field::new("c", DataType::Utf8),
        ]);
        // Built as a literal: `DataSet::new` would reject the short row.
        let ds = DataSet {
            schema,
            rows: vec![
                vec![Value::Int64(1), Value::from("Latte")],
                vec![Value::Int64(2)],
            ],
        };
        let table = value_counts(&ds, "c").unwrap();
        assert_eq!(table.total(), 2);
        assert_eq!(table.get(&Value::Null), Some(1));
    }

    #[test]
    fn orders_by_descending_count() {
        let ds = labels(&["A", "B", "A", "C", "B", "A"]);
        assert_eq!(
            pairs(&ds),
            vec![("A".to_string(), 3), ("B".to_string(), 2), ("C".to_string(), 1)]
        );
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let ds = labels(&["B", "A", "B", "A", "C"]);
        assert_eq!(
            pairs(&ds),
            vec![("B".to_string(), 2), ("A".to_string(), 2), ("C".to_string(), 1)]
        );
    }

    #[test]
    fn counts_sum_to_row_count_including_nulls() {
        let ds = single_column(
            DataType::Int64,
            vec![Value::Int64(2), Value::Null, Value::Int64(2), Value::Null, Value::Int64(7)],
        );
        let table = value_counts(&ds, "c").unwrap();
        assert_eq!(table.total(), ds.row_count());
        assert_eq!(table.get(&Value::Int64(2)), Some(2));
        assert_eq!(table.get(&Value::Null), Some(2));
        assert_eq!(table.get(&Value::Int64(3)), None);
    }

    #[test]
    fn float_zero_signs_and_nans_are_grouped() {
        let ds = single_column(
            DataType::Float64,
            vec![
                Value::Float64(0.0),
                Value::Float64(-0.0),
                Value::Float64(f64::NAN),
                Value::Float64(-f64::NAN),
            ],
        );
        let table = value_counts(&ds, "c").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&Value::Float64(0.0)), Some(2));
        assert_eq!(table.get(&Value::Float64(f64::NAN)), Some(2));
    }

    #[test]
    fn empty_dataset_yields_empty_table() {
        let table = value_counts(&labels(&[]), "c").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.max_count(), 0);
        assert_eq!(table.column(), "c");
    }

    #[test]
    fn unknown_column_is_an_error() {
        let err = value_counts(&labels(&["A"]), "nope").unwrap_err();
        assert!(matches!(err, ProcessingError::UnknownColumn { ref column, .. } if column == "nope"));
    }
}
