//! Plain-text presentation of datasets, summaries and frequency tables.
//!
//! Every function returns a `String`; callers decide where to print it.

use std::fmt::Write;

use crate::processing::{ColumnSummary, FrequencyTable};
use crate::types::DataSet;

/// Column-aligned preview of the first `max_rows` rows.
pub fn render_table(dataset: &DataSet, max_rows: usize) -> String {
    let header: Vec<String> = dataset.schema.field_names().map(str::to_owned).collect();
    let body: Vec<Vec<String>> = dataset
        .head(max_rows)
        .rows
        .iter()
        .map(|row| row.iter().map(|v| v.to_string()).collect())
        .collect();

    let mut out = grid(&header, &body);
    if dataset.is_empty() {
        out.push_str("(no rows)\n");
    } else if dataset.row_count() > max_rows {
        let _ = writeln!(out, "... {} more rows", dataset.row_count() - max_rows);
    }
    out
}

/// One line per numeric column with count, mean, std, min, quartiles and max.
pub fn render_summary(summary: &[ColumnSummary]) -> String {
    if summary.is_empty() {
        return "(no numeric columns)\n".to_string();
    }
    let header: Vec<String> = ["column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let body: Vec<Vec<String>> = summary
        .iter()
        .map(|s| {
            vec![
                s.column.clone(),
                s.count.to_string(),
                stat(s.mean),
                stat(s.std),
                stat(s.min),
                stat(s.q25),
                stat(s.median),
                stat(s.q75),
                stat(s.max),
            ]
        })
        .collect();
    grid(&header, &body)
}

/// `column  missing` listing, in schema order.
pub fn render_null_counts(counts: &[(String, usize)]) -> String {
    let header = vec!["column".to_string(), "missing".to_string()];
    let body: Vec<Vec<String>> = counts
        .iter()
        .map(|(name, n)| vec![name.clone(), n.to_string()])
        .collect();
    grid(&header, &body)
}

/// Horizontal bar chart of a frequency table, bars scaled to `width` characters.
pub fn render_bar_chart(table: &FrequencyTable, width: usize) -> String {
    if table.is_empty() {
        return "no data to display\n".to_string();
    }

    let labels: Vec<String> = table.iter().map(|e| e.value.to_string()).collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let max = table.max_count().max(1);

    let mut out = String::new();
    for (label, entry) in labels.iter().zip(table) {
        // Non-zero counts always get at least one mark.
        let bar = (entry.count * width).div_ceil(max);
        let _ = writeln!(
            out,
            "{label:<label_width$} | {} {}",
            "#".repeat(bar),
            entry.count
        );
    }
    out
}

fn stat(v: Option<f64>) -> String {
    v.map_or_else(|| "NaN".to_string(), |v| format!("{v:.3}"))
}

fn grid(header: &[String], body: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in body {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for row in body {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(c, &w)| format!("{c:<w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
