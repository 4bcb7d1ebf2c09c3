use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings for one report run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory holding the four CSV exports.
    pub input_dir: PathBuf,
    /// Directory the charts (and summary) are written to.
    pub output_dir: PathBuf,
    /// Number of categories kept by the ranked bar charts.
    pub top_n: usize,
    /// Also write `analytics_summary.txt`.
    pub write_summary: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            top_n: 10,
            write_summary: false,
        }
    }
}

/// Load a report configuration from a JSON file. Missing fields take their
/// default values.
pub fn load_report_config<P: AsRef<Path>>(path: P) -> Result<ReportConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: ReportConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}
