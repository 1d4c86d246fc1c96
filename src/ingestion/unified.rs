//! Unified ingestion entrypoint.
//!
//! Most callers should use [`ingest_from_path`], which loads a CSV file into an in-memory
//! [`crate::types::DataSet`].
//!
//! - If [`IngestionOptions::schema`] is `None`, column types are inferred from the data.
//! - If an [`super::observability::IngestionObserver`] is provided, success/failure/alerts are
//!   reported to it.

use std::error::Error as StdError;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{IngestionError, IngestionResult};
use crate::types::{DataSet, Schema};

use super::csv;
use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};

/// Options controlling ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Expected schema. If `None`, one type per column is inferred.
    pub schema: Option<Schema>,
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Cell spellings (after trimming) treated as missing, in addition to empty cells.
    pub null_markers: Vec<String>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("schema", &self.schema)
            .field("delimiter", &(self.delimiter as char))
            .field("null_markers", &self.null_markers)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            schema: None,
            delimiter: b',',
            null_markers: csv::default_null_markers(),
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Load a CSV file into a [`DataSet`].
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row/column stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use nano_explore::ingestion::{ingest_from_path, IngestionOptions, LogObserver};
///
/// # fn main() -> Result<(), nano_explore::IngestionError> {
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(LogObserver)),
///     ..Default::default()
/// };
/// let ds = ingest_from_path("data/coffee.csv", &opts)?;
/// println!("rows={}", ds.row_count());
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(path: impl AsRef<Path>, options: &IngestionOptions) -> IngestionResult<DataSet> {
    let path = path.as_ref();
    let ctx = IngestionContext {
        path: path.to_path_buf(),
        inferred_schema: options.schema.is_none(),
    };

    let result = ingest_csv(path, options);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(ds) => obs.on_success(
                &ctx,
                IngestionStats {
                    rows: ds.row_count(),
                    columns: ds.column_count(),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn ingest_csv(path: &Path, options: &IngestionOptions) -> IngestionResult<DataSet> {
    let mut rdr = csv::reader_builder(options.delimiter).from_path(path)?;
    match &options.schema {
        Some(schema) => csv::ingest_csv_from_reader(&mut rdr, schema, &options.null_markers),
        None => csv::ingest_csv_inferred_from_reader(&mut rdr, &options.null_markers),
    }
}

fn severity_for_error(e: &IngestionError) -> IngestionSeverity {
    match e {
        IngestionError::Io(_) => IngestionSeverity::Critical,
        IngestionError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => IngestionSeverity::Critical,
            _ if error_chain_contains_io(err) => IngestionSeverity::Critical,
            _ => IngestionSeverity::Error,
        },
        IngestionError::SchemaMismatch { .. } => IngestionSeverity::Error,
        IngestionError::ParseError { .. } => IngestionSeverity::Error,
    }
}

fn error_chain_contains_io(e: &(dyn StdError + 'static)) -> bool {
    let mut cur: Option<&(dyn StdError + 'static)> = Some(e);
    while let Some(err) = cur {
        if err.is::<std::io::Error>() {
            return true;
        }
        cur = err.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{severity_for_error, IngestionOptions};
    use crate::error::IngestionError;
    use crate::ingestion::IngestionSeverity;

    #[test]
    fn io_failures_are_critical() {
        let err = IngestionError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(severity_for_error(&err), IngestionSeverity::Critical);
    }

    #[test]
    fn data_failures_are_errors() {
        let err = IngestionError::SchemaMismatch {
            message: "x".to_string(),
        };
        assert_eq!(severity_for_error(&err), IngestionSeverity::Error);
    }

    #[test]
    fn default_options_infer_schema_with_comma_delimiter() {
        let opts = IngestionOptions::default();
        assert!(opts.schema.is_none());
        assert_eq!(opts.delimiter, b',');
        assert!(opts.null_markers.iter().any(|m| m == "NA"));
        assert_eq!(opts.alert_at_or_above, IngestionSeverity::Critical);
    }
}
