
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{Context, Result};

use crate::clusterer::{kmeans, ClusterError};

/// One point on the elbow curve
#[derive(Debug, Clone, PartialEq)]
pub struct ElbowPoint {
    pub k: usize,
    pub wcss: f64,
}

/// Fit one clusterer per candidate K, in ascending order, recording the
/// within-cluster sum of squared distances of each fit. Selecting K stays
/// a human decision; this only produces the curve.
pub fn sweep(
    points: &[Vec<f64>],
    k_range: RangeInclusive<usize>,
    max_iter: usize,
    n_init: usize,
    seed: u64,
) -> Result<Vec<ElbowPoint>, ClusterError> {
    let mut curve = Vec::new();
    for k in k_range {
        let fit = kmeans(points, k, max_iter, n_init, seed)?;
        curve.push(ElbowPoint {
            k,
            wcss: fit.model.inertia,
        });
    }
    Ok(curve)
}

/// `K;WCSS` rows, 2-decimal WCSS.
pub fn format_csv(curve: &[ElbowPoint]) -> String {
    let mut out = String::from("K;WCSS\n");
    for point in curve {
        out.push_str(&format!("{};{:.2}\n", point.k, point.wcss));
    }
    out
}

/// Export the curve for later inspection.
pub fn write_csv(curve: &[ElbowPoint], path: &Path) -> Result<()> {
    eprintln!("[elbow] writing WCSS curve to {}", path.display());
    fs::write(path, format_csv(curve))
        .with_context(|| format!("Failed to write elbow curve to {}", path.display()))
}

/// Render the curve as a fixed-height console chart.
pub fn render_chart(curve: &[ElbowPoint]) -> String {
    const HEIGHT: usize = 12;
    const COL_WIDTH: usize = 6;

    if curve.is_empty() {
        return String::new();
    }

    let max = curve.iter().map(|p| p.wcss).fold(f64::NEG_INFINITY, f64::max);
    let min = curve.iter().map(|p| p.wcss).fold(f64::INFINITY, f64::min);
    let span = (max - min).max(f64::EPSILON);

    let mut grid = vec![vec![' '; curve.len() * COL_WIDTH]; HEIGHT];
    for (col, point) in curve.iter().enumerate() {
        let level = ((point.wcss - min) / span * (HEIGHT - 1) as f64).round() as usize;
        let row = HEIGHT - 1 - level;
        grid[row][col * COL_WIDTH + COL_WIDTH / 2] = 'o';
    }

    let label_width = format!("{:.0}", max).len().max(format!("{:.0}", min).len());

    let mut out = String::from("WCSS vs K (elbow curve)\n");
    for (row, cells) in grid.iter().enumerate() {
        let label = if row == 0 {
            format!("{:>width$.0}", max, width = label_width)
        } else if row == HEIGHT - 1 {
            format!("{:>width$.0}", min, width = label_width)
        } else {
            " ".repeat(label_width)
        };
        out.push_str(&label);
        out.push_str(" |");
        out.push_str(cells.iter().collect::<String>().trim_end());
        out.push('\n');
    }

    out.push_str(&" ".repeat(label_width));
    out.push_str(" +");
    out.push_str(&"-".repeat(curve.len() * COL_WIDTH));
    out.push('\n');
    out.push_str(&" ".repeat(label_width + 2));
    for point in curve {
        out.push_str(&format!("{:^width$}", point.k, width = COL_WIDTH));
    }
    out.push('\n');
    out
}
