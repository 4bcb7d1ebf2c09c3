//! Chart description, drawing and persistence.
//!
//! Analyses produce a backend-independent [`Chart`]; a [`ChartSink`] decides
//! where it ends up. [`PngRenderer`] draws with `plotters` into bitmap files.
pub mod chart;
pub mod plots;
pub mod renderer;

pub use chart::{chart_filename, Chart, ChartKind, IMAGE_EXTENSION};
pub use plots::font_available;
pub use renderer::{ChartSink, PngRenderer};
