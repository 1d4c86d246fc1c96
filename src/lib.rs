//! `nano-explore` is a small library for exploring a single CSV file: load it into an in-memory
//! [`types::DataSet`], drop incomplete rows, and count the distinct values of one column within
//! a range of a numeric column.
//!
//! The primary entrypoint is [`explore::Explorer`], which loads and cleans the data once and then
//! answers any number of [`explore::Selection`]s.
//!
//! ## Loading
//!
//! [`ingestion::ingest_from_path`] reads a UTF-8 CSV file with a header row. Column types are
//! inferred unless a [`types::Schema`] is given in [`ingestion::IngestionOptions`]. Supported
//! logical types are:
//!
//! - [`types::DataType::Int64`]
//! - [`types::DataType::Float64`]
//! - [`types::DataType::Bool`]
//! - [`types::DataType::Utf8`]
//!
//! Empty cells and null markers such as `NA` map to [`types::Value::Null`].
//!
//! ```no_run
//! use nano_explore::explore::{Explorer, Selection};
//! use nano_explore::ingestion::IngestionOptions;
//! use nano_explore::types::ClosedRange;
//!
//! # fn main() -> Result<(), nano_explore::ExploreError> {
//! let explorer = Explorer::from_path("data/coffee.csv", &IngestionOptions::default(), "cups_per_day")?;
//! let out = explorer.explore(&Selection::new("coffee_type").with_range(ClosedRange::new(2, 4)))?;
//! for entry in &out.frequencies {
//!     println!("{}: {}", entry.value, entry.count);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: CSV loading and ingestion observers
//! - [`types`]: schema + in-memory dataset types
//! - [`processing`]: pure transformations (clean, range filter, value counts, reductions, describe)
//! - [`explore`]: the clean → filter → count pipeline
//! - [`render`]: plain-text tables and bar charts
//! - [`config`]: run configuration for the binary
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod explore;
pub mod ingestion;
pub mod processing;
pub mod render;
pub mod types;

pub use error::{
    ExploreError, ExploreResult, IngestionError, IngestionResult, ProcessingError, ProcessingResult,
};
