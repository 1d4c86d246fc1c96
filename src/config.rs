//! Run configuration for the `nano-explore` binary.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::explore::Selection;
use crate::ingestion::csv::default_null_markers;
use crate::types::ClosedRange;

/// What to load and which selection to explore.
///
/// Every field has a default, so a config file only needs the keys it changes:
///
/// ```json
/// { "dataset_path": "survey.csv", "range": { "lo": 2, "hi": 4 } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerConfig {
    pub dataset_path: PathBuf,
    /// Integer column restricted by `range`.
    pub numeric_column: String,
    /// Column whose values are counted.
    pub category_column: String,
    /// `None` explores the full observed range.
    pub range: Option<ClosedRange>,
    /// Rows shown in the raw and cleaned previews.
    pub preview_rows: usize,
    /// Width of the longest bar in the chart.
    pub chart_width: usize,
    pub null_markers: Vec<String>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("data/coffee.csv"),
            numeric_column: "cups_per_day".to_string(),
            category_column: "coffee_type".to_string(),
            range: None,
            preview_rows: 10,
            chart_width: 40,
            null_markers: default_null_markers(),
        }
    }
}

impl ExplorerConfig {
    /// Read a JSON config file.
    pub fn from_json_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Selection described by this config.
    pub fn selection(&self) -> Selection {
        Selection {
            category_column: self.category_column.clone(),
            range: self.range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ExplorerConfig;
    use crate::types::ClosedRange;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: ExplorerConfig =
            serde_json::from_str(r#"{ "category_column": "roast", "range": { "lo": 2, "hi": 4 } }"#).unwrap();
        assert_eq!(cfg.category_column, "roast");
        assert_eq!(cfg.range, Some(ClosedRange::new(2, 4)));
        assert_eq!(cfg.numeric_column, "cups_per_day");
        assert_eq!(cfg.preview_rows, 10);

        let sel = cfg.selection();
        assert_eq!(sel.category_column, "roast");
        assert_eq!(sel.range, Some(ClosedRange::new(2, 4)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let res = serde_json::from_str::<ExplorerConfig>(r#"{ "colour": "blue" }"#);
        assert!(res.is_err());
    }

    #[test]
    fn missing_config_file_is_reported() {
        let err = ExplorerConfig::from_json_path("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }
}
