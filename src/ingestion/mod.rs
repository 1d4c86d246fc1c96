//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest_from_path`] (from [`unified`]) which:
//!
//! - loads a CSV file into an in-memory [`crate::types::DataSet`], with a provided or inferred
//!   [`crate::types::Schema`]
//! - maps empty cells and configured null markers to [`crate::types::Value::Null`]
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! Reader-level functions are available under [`csv`].

pub mod csv;
pub mod observability;
pub mod unified;

pub use observability::{
    CompositeObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats, LogObserver,
};
pub use unified::{ingest_from_path, IngestionOptions};
