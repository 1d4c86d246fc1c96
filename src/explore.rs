//! Exploration pipeline: clean once, then answer filter-and-count requests.
//!
//! An [`Explorer`] owns the raw dataset and its cleaned copy. Each call to
//! [`Explorer::explore`] receives the current user selections as a plain [`Selection`] and runs
//! the range filter followed by value counting over the cleaned data. Nothing is retained
//! between calls, so a new selection simply supersedes the previous result.

use std::path::Path;

use crate::error::{ExploreResult, ProcessingError};
use crate::ingestion::{ingest_from_path, IngestionOptions};
use crate::processing::{
    describe, drop_nulls, filter_range, null_counts, numeric_bounds, value_counts, ColumnSummary,
    FrequencyTable,
};
use crate::types::{ClosedRange, DataSet};

/// The user's current choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Column whose distinct values are counted.
    pub category_column: String,
    /// Range applied to the numeric column. `None` keeps every row.
    pub range: Option<ClosedRange>,
}

impl Selection {
    /// Count `category_column` over every cleaned row.
    pub fn new(category_column: impl Into<String>) -> Self {
        Self {
            category_column: category_column.into(),
            range: None,
        }
    }

    /// Restrict the numeric column to `range` first.
    pub fn with_range(mut self, range: ClosedRange) -> Self {
        self.range = Some(range);
        self
    }
}

/// Result of one [`Explorer::explore`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct Exploration {
    /// Range that was applied, if any.
    pub range: Option<ClosedRange>,
    /// Rows left after the range filter.
    pub filtered_rows: usize,
    /// Value counts of the category column over the filtered rows.
    pub frequencies: FrequencyTable,
}

/// Holds the loaded dataset and its cleaned copy; both are read-only after construction.
#[derive(Debug, Clone)]
pub struct Explorer {
    raw: DataSet,
    cleaned: DataSet,
    numeric_column: String,
}

impl Explorer {
    /// Validate `numeric_column` and clean `raw`.
    ///
    /// The numeric column must exist and be `Int64` or `Float64`. Once cleaned it holds no nulls,
    /// so every later range filter sees a value in every row.
    pub fn new(raw: DataSet, numeric_column: impl Into<String>) -> ExploreResult<Self> {
        let numeric_column = numeric_column.into();
        let idx = raw.schema.require_index(&numeric_column)?;
        let data_type = raw.schema.fields[idx].data_type;
        if !data_type.is_numeric() {
            return Err(ProcessingError::NotNumeric {
                column: numeric_column,
                data_type,
            }
            .into());
        }

        let cleaned = drop_nulls(&raw);
        log::debug!(
            "cleaned dataset: {} of {} rows kept",
            cleaned.row_count(),
            raw.row_count()
        );
        if cleaned.is_empty() && !raw.is_empty() {
            log::warn!("every row has a missing value; nothing left to explore");
        }

        Ok(Self {
            raw,
            cleaned,
            numeric_column,
        })
    }

    /// Load a CSV file and build an explorer over it.
    pub fn from_path(
        path: impl AsRef<Path>,
        options: &IngestionOptions,
        numeric_column: impl Into<String>,
    ) -> ExploreResult<Self> {
        let raw = ingest_from_path(path, options)?;
        Self::new(raw, numeric_column)
    }

    /// Dataset as loaded, missing values included.
    pub fn raw(&self) -> &DataSet {
        &self.raw
    }

    /// Dataset with every incomplete row removed.
    pub fn cleaned(&self) -> &DataSet {
        &self.cleaned
    }

    /// Column the range filter applies to.
    pub fn numeric_column(&self) -> &str {
        &self.numeric_column
    }

    /// Missing values per column of the raw dataset.
    pub fn null_counts(&self) -> Vec<(String, usize)> {
        null_counts(&self.raw)
    }

    /// Summary statistics of the cleaned dataset.
    pub fn describe(&self) -> Vec<ColumnSummary> {
        describe(&self.cleaned)
    }

    /// Observed `[min, max]` of the numeric column after cleaning; `None` if no rows are left.
    pub fn bounds(&self) -> ExploreResult<Option<ClosedRange>> {
        Ok(numeric_bounds(&self.cleaned, &self.numeric_column)?)
    }

    /// Columns that can be picked for counting: every column except the numeric one.
    pub fn category_columns(&self) -> Vec<&str> {
        self.cleaned
            .schema
            .field_names()
            .filter(|name| *name != self.numeric_column)
            .collect()
    }

    /// Range-filter the cleaned dataset, then count the values of the selected column.
    ///
    /// An inverted range (`lo > hi`) is not an error: it filters out every row and yields an
    /// empty frequency table.
    pub fn explore(&self, selection: &Selection) -> ExploreResult<Exploration> {
        // Validate the column up front so an inverted range cannot hide a bad selection.
        self.cleaned.schema.require_index(&selection.category_column)?;

        let filtered = match selection.range {
            Some(range) => {
                if range.is_empty() {
                    log::warn!("range {range} on '{}' is inverted; no rows match", self.numeric_column);
                }
                filter_range(&self.cleaned, &self.numeric_column, range)?
            }
            None => self.cleaned.clone(),
        };

        let frequencies = value_counts(&filtered, &selection.category_column)?;
        log::debug!(
            "explore column='{}' range={:?}: {} rows, {} distinct values",
            selection.category_column,
            selection.range,
            filtered.row_count(),
            frequencies.len()
        );

        Ok(Exploration {
            range: selection.range,
            filtered_rows: filtered.row_count(),
            frequencies,
        })
    }
}
