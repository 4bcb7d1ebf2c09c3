//! The analyses that make up the report.
//!
//! Each analysis is an independent unit: it names its chart, says whether it
//! can run on the loaded data, and turns the data into a [`Chart`]. The
//! generator walks [`default_analyses`] in order and skips the ones that are
//! not applicable, so optional charts need no special casing.
pub mod engagement;
pub mod recipes;
pub mod users;

use crate::config::ReportConfig;
use crate::data_handling::Dataset;
use crate::report::Chart;

pub use engagement::{PrepTimeVsLikes, TopInteracted};
pub use recipes::{CommonIngredients, DifficultyDistribution, RecipesPerUser};
pub use users::{TopCountries, UserGrowth};

pub trait Analysis {
    /// Chart title; also determines the output file name.
    fn title(&self) -> &'static str;

    /// Whether the loaded data supports this analysis.
    fn is_applicable(&self, _dataset: &Dataset) -> bool {
        true
    }

    /// Aggregate the data into a chart.
    fn build(&self, dataset: &Dataset, config: &ReportConfig) -> Chart;
}

/// All analyses in report order.
pub fn default_analyses() -> Vec<Box<dyn Analysis>> {
    vec![
        Box::new(CommonIngredients),
        Box::new(DifficultyDistribution),
        Box::new(TopInteracted::views()),
        Box::new(TopInteracted::likes()),
        Box::new(PrepTimeVsLikes),
        Box::new(UserGrowth),
        Box::new(TopCountries),
        Box::new(RecipesPerUser),
    ]
}
