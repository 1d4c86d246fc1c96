//! In-memory data transformations.
//!
//! The processing layer operates on [`crate::types::DataSet`] values produced by ingestion.
//! Every function is pure: inputs are borrowed, results are new datasets or tables.
//!
//! - [`drop_nulls()`]: remove rows with a missing value in any column
//! - [`filter_range()`]: keep rows whose numeric column lies within a closed range
//! - [`value_counts()`]: frequency table of a column's distinct values
//! - [`reduce()`]: common reductions (count/sum/min/max/mean)
//! - [`describe()`]: summary statistics of numeric columns
//!
//! ## Example: clean → filter → count
//!
//! ```rust
//! use nano_explore::processing::{drop_nulls, filter_range, value_counts};
//! use nano_explore::types::{ClosedRange, DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("cups", DataType::Int64),
//!     Field::new("type", DataType::Utf8),
//! ]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::Int64(1), Value::from("Espresso")],
//!         vec![Value::Int64(3), Value::from("Filter")],
//!         vec![Value::Null, Value::from("Filter")],
//!         vec![Value::Int64(2), Value::from("Filter")],
//!     ],
//! );
//!
//! let cleaned = drop_nulls(&ds);
//! let filtered = filter_range(&cleaned, "cups", ClosedRange::new(2, 4)).unwrap();
//! let counts = value_counts(&filtered, "type").unwrap();
//! assert_eq!(counts.get(&Value::from("Filter")), Some(2));
//! assert_eq!(counts.total(), filtered.row_count());
//! ```

pub mod aggregate;
pub mod describe;
pub mod filter;
pub mod missing;
pub mod reduce;

pub use aggregate::{value_counts, FrequencyEntry, FrequencyTable};
pub use describe::{describe, ColumnSummary};
pub use filter::{filter, filter_range};
pub use missing::{drop_nulls, drop_nulls_in, null_counts};
pub use reduce::{numeric_bounds, reduce, ReduceOp};
