//! Load → aggregate → render, one analysis at a time.
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::analysis::{default_analyses, Analysis};
use crate::config::ReportConfig;
use crate::data_handling::Dataset;
use crate::io::read_dataset;
use crate::report::{font_available, ChartSink, PngRenderer};
use crate::summary::{AnalyticsSummary, SUMMARY_FILE_NAME};

/// What a report run produced.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReportOutcome {
    /// Chart files in render order.
    pub charts: Vec<PathBuf>,
    /// Titles of analyses that did not apply to the data.
    pub skipped: Vec<&'static str>,
    pub summary: Option<PathBuf>,
}

pub struct ReportGenerator {
    config: ReportConfig,
    analyses: Vec<Box<dyn Analysis>>,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        Self::with_analyses(config, default_analyses())
    }

    pub fn with_analyses(config: ReportConfig, analyses: Vec<Box<dyn Analysis>>) -> Self {
        Self { config, analyses }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Run every applicable analysis against `dataset`, handing each chart to
    /// `sink` before the next one is built.
    pub fn generate(&self, dataset: &Dataset, sink: &mut dyn ChartSink) -> Result<ReportOutcome> {
        let mut outcome = ReportOutcome::default();

        for analysis in &self.analyses {
            if !analysis.is_applicable(dataset) {
                log::info!("Skipping '{}': not applicable to the loaded data", analysis.title());
                outcome.skipped.push(analysis.title());
                continue;
            }

            let chart = analysis.build(dataset, &self.config);
            let path = sink
                .render(&chart)
                .with_context(|| format!("Failed to save chart '{}'", analysis.title()))?;
            outcome.charts.push(path);
        }

        Ok(outcome)
    }

    /// Read the exports from the configured input directory and write all
    /// charts (and the summary, if enabled) into the output directory.
    pub fn run(&self) -> Result<ReportOutcome> {
        log::info!("Reading exports from {}", self.config.input_dir.display());
        let dataset = read_dataset(&self.config.input_dir)?;

        std::fs::create_dir_all(&self.config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                self.config.output_dir.display()
            )
        })?;

        if !font_available() {
            log::warn!("No sans-serif font could be loaded; chart text will fail to draw");
        }
        let mut renderer = PngRenderer::new(&self.config.output_dir);
        let mut outcome = self.generate(&dataset, &mut renderer)?;

        if self.config.write_summary {
            let summary = AnalyticsSummary::from_dataset(&dataset, self.config.top_n);
            log::info!("\n{}", summary);
            let path = summary.write_to(&self.config.output_dir)?;
            println!("Saved: {}", SUMMARY_FILE_NAME);
            outcome.summary = Some(path);
        }

        println!("\nAll charts generated successfully!");
        Ok(outcome)
    }
}
