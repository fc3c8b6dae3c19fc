#[cfg(test)]
mod tests;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::dataset::ClinicalDataset;

/// Per-cluster description: member count plus the mean of every original
/// (unscaled) feature over the members.
#[derive(Debug, Clone)]
pub struct SummaryRow {
    pub cluster: usize,
    pub count: usize,
    pub means: Vec<f64>,
}

/// Centroid summary table, one row per cluster in ascending label order.
#[derive(Debug, Clone)]
pub struct ClusterSummary {
    pub feature_names: Vec<String>,
    pub rows: Vec<SummaryRow>,
}

impl ClusterSummary {
    /// Join predicted labels onto the unscaled feature rows and aggregate.
    /// Row counts always sum to the dataset record count.
    pub fn build(labels: &[usize], dataset: &ClinicalDataset, k: usize) -> Self {
        let n_features = dataset.n_features();
        let mut counts = vec![0usize; k];
        let mut sums = vec![vec![0.0f64; n_features]; k];

        for (row, &label) in dataset.rows.iter().zip(labels.iter()) {
            counts[label] += 1;
            for (col, value) in row.iter().enumerate() {
                sums[label][col] += value;
            }
        }

        let rows = (0..k)
            .map(|cluster| {
                let count = counts[cluster];
                let means = sums[cluster]
                    .iter()
                    .map(|sum| if count > 0 { sum / count as f64 } else { 0.0 })
                    .collect();
                SummaryRow {
                    cluster,
                    count,
                    means,
                }
            })
            .collect();

        Self {
            feature_names: dataset.feature_names.clone(),
            rows,
        }
    }

    pub fn total_count(&self) -> usize {
        self.rows.iter().map(|row| row.count).sum()
    }

    /// Semicolon-separated table with fixed 2-decimal feature means.
    pub fn to_delimited(&self) -> String {
        let mut out = String::from("Cluster;N_Pacientes");
        for name in &self.feature_names {
            out.push(';');
            out.push_str(name);
        }
        out.push('\n');

        for row in &self.rows {
            out.push_str(&format!("{};{}", row.cluster, row.count));
            for mean in &row.means {
                out.push_str(&format!(";{:.2}", mean));
            }
            out.push('\n');
        }
        out
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        eprintln!("[summary] writing centroid table to {}", path.display());
        fs::write(path, self.to_delimited())
            .with_context(|| format!("Failed to write centroid table to {}", path.display()))
    }

    /// Fixed-width table for the console.
    pub fn render(&self) -> String {
        let mut headers: Vec<String> = vec!["Cluster".to_string(), "N_Pacientes".to_string()];
        headers.extend(self.feature_names.iter().cloned());
        let widths: Vec<usize> = headers.iter().map(|name| name.len().max(8)).collect();

        let mut out = String::new();
        let mut header_line = String::new();
        for (name, width) in headers.iter().zip(&widths) {
            header_line.push_str(&format!("{:>width$}  ", name, width = *width));
        }
        out.push_str(header_line.trim_end());
        out.push('\n');
        out.push_str(&"─".repeat(widths.iter().map(|w| w + 2).sum::<usize>() - 2));
        out.push('\n');

        for row in &self.rows {
            let mut line = format!("{:>width$}  ", row.cluster, width = widths[0]);
            line.push_str(&format!("{:>width$}  ", row.count, width = widths[1]));
            for (mean, width) in row.means.iter().zip(widths.iter().skip(2)) {
                line.push_str(&format!("{:>width$.2}  ", mean, width = *width));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}
