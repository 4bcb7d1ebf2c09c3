//! Backend-independent description of a chart.
use crate::stats::Count;

/// Image extension of every saved chart.
pub const IMAGE_EXTENSION: &str = "png";

#[derive(Debug, Clone, PartialEq)]
pub enum ChartKind {
    /// Ranked categories, one bar each.
    Bar(Vec<Count>),
    /// Category counts, drawn as shares with percentage labels.
    Pie(Vec<Count>),
    /// Free `(x, y)` points.
    Scatter(Vec<(f64, f64)>),
    /// Ordered categories joined by a line with point markers.
    Line(Vec<Count>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub kind: ChartKind,
}

impl Chart {
    pub fn new(title: &str, x_label: &str, y_label: &str, kind: ChartKind) -> Self {
        Self {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            kind,
        }
    }

    /// Figure size in pixels.
    pub fn figure_size(&self) -> (u32, u32) {
        match self.kind {
            ChartKind::Pie(_) => (600, 600),
            ChartKind::Scatter(_) => (700, 500),
            ChartKind::Bar(_) | ChartKind::Line(_) => (800, 500),
        }
    }

    pub fn file_name(&self) -> String {
        chart_filename(&self.title)
    }
}

/// Derive the output file name from a chart title: lowercase, spaces
/// replaced by underscores, image extension appended.
pub fn chart_filename(title: &str) -> String {
    format!(
        "{}.{}",
        title.to_lowercase().replace(' ', "_"),
        IMAGE_EXTENSION
    )
}
