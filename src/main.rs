use std::sync::Arc;

use anyhow::{Context, Result};

use nano_explore::config::ExplorerConfig;
use nano_explore::explore::Explorer;
use nano_explore::ingestion::{IngestionOptions, LogObserver};
use nano_explore::render::{render_bar_chart, render_null_counts, render_summary, render_table};

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => ExplorerConfig::from_json_path(path)?,
        None => ExplorerConfig::default(),
    };
    log::debug!("config: {config:?}");

    let options = IngestionOptions {
        null_markers: config.null_markers.clone(),
        observer: Some(Arc::new(LogObserver)),
        ..Default::default()
    };
    let explorer = Explorer::from_path(&config.dataset_path, &options, config.numeric_column.as_str())
        .with_context(|| format!("loading {}", config.dataset_path.display()))?;

    println!("# Raw data ({} rows)\n", explorer.raw().row_count());
    println!("{}", render_table(explorer.raw(), config.preview_rows));

    println!("# Summary statistics\n");
    println!("{}", render_summary(&explorer.describe()));

    println!("# Missing values\n");
    println!("{}", render_null_counts(&explorer.null_counts()));

    println!(
        "# Cleaned data ({} of {} rows kept)\n",
        explorer.cleaned().row_count(),
        explorer.raw().row_count()
    );
    println!("{}", render_table(explorer.cleaned(), config.preview_rows));

    let selection = config.selection();
    let exploration = explorer.explore(&selection)?;
    let range = match exploration.range {
        Some(r) => r.to_string(),
        None => match explorer.bounds()? {
            Some(b) => format!("{b} (full range)"),
            None => "(no values)".to_string(),
        },
    };
    println!(
        "# '{}' for {} in {} ({} rows)\n",
        selection.category_column,
        explorer.numeric_column(),
        range,
        exploration.filtered_rows
    );
    print!("{}", render_bar_chart(&exploration.frequencies, config.chart_width));

    Ok(())
}
