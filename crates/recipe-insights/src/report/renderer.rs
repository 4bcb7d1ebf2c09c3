use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::report::chart::{Chart, ChartKind};
use crate::report::plots::{plot_bar, plot_line, plot_pie, plot_scatter};

/// Destination for finished charts.
pub trait ChartSink {
    /// Persist one chart and return where it went.
    fn render(&mut self, chart: &Chart) -> Result<PathBuf>;
}

/// Writes every chart as a PNG into one directory.
///
/// Each call to [`ChartSink::render`] draws into a fresh bitmap sized for that
/// chart and drops it once the file is written, so nothing carries over from
/// one chart to the next. Existing files with the same name are overwritten.
#[derive(Debug)]
pub struct PngRenderer {
    output_dir: PathBuf,
    saved: Vec<PathBuf>,
}

impl PngRenderer {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            saved: Vec::new(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Files written so far, in render order.
    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }
}

impl ChartSink for PngRenderer {
    fn render(&mut self, chart: &Chart) -> Result<PathBuf> {
        let file_name = chart.file_name();
        let path = self.output_dir.join(&file_name);

        {
            let figure = BitMapBackend::new(&path, chart.figure_size()).into_drawing_area();
            figure.fill(&WHITE)?;

            let drawn = match &chart.kind {
                ChartKind::Bar(data) => plot_bar(&figure, chart, data),
                ChartKind::Pie(data) => plot_pie(&figure, chart, data),
                ChartKind::Scatter(points) => plot_scatter(&figure, chart, points),
                ChartKind::Line(data) => plot_line(&figure, chart, data),
            };
            drawn.with_context(|| format!("Failed to draw chart '{}'", chart.title))?;

            figure
                .present()
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }

        println!("Saved: {}", file_name);
        log::debug!("Chart '{}' written to {}", chart.title, path.display());
        self.saved.push(path.clone());
        Ok(path)
    }
}
