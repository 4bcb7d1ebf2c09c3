use crate::analysis::Analysis;
use crate::config::ReportConfig;
use crate::data_handling::Dataset;
use crate::report::{Chart, ChartKind};
use crate::stats::{monthly_counts, top_n, value_counts};

/// New users per calendar month, oldest first.
pub struct UserGrowth;

impl Analysis for UserGrowth {
    fn title(&self) -> &'static str {
        "User Growth by Month"
    }

    fn build(&self, dataset: &Dataset, _config: &ReportConfig) -> Chart {
        let months = monthly_counts(dataset.users.iter().map(|u| u.created_at.as_ref()))
            .into_iter()
            .map(|(month, count)| (month.to_string(), count))
            .collect();
        Chart::new(self.title(), "Month", "New Users", ChartKind::Line(months))
    }
}

/// Countries ranked by user count. Only runs when the users export has a
/// `country` column.
pub struct TopCountries;

impl Analysis for TopCountries {
    fn title(&self) -> &'static str {
        "Top Countries by User Count"
    }

    fn is_applicable(&self, dataset: &Dataset) -> bool {
        dataset.users.has_column("country")
    }

    fn build(&self, dataset: &Dataset, config: &ReportConfig) -> Chart {
        let counts = value_counts(dataset.users.iter().filter_map(|u| u.country.as_deref()));
        Chart::new(
            self.title(),
            "Country",
            "Users",
            ChartKind::Bar(top_n(counts, config.top_n)),
        )
    }
}
