use crate::analysis::Analysis;
use crate::config::ReportConfig;
use crate::data_handling::Dataset;
use crate::report::{Chart, ChartKind};
use crate::stats::{top_n, value_counts};

/// Most frequent ingredient names across all recipes.
pub struct CommonIngredients;

impl Analysis for CommonIngredients {
    fn title(&self) -> &'static str {
        "Top 10 Most Common Ingredients"
    }

    fn build(&self, dataset: &Dataset, config: &ReportConfig) -> Chart {
        let counts = value_counts(dataset.ingredients.iter().map(|i| i.name.as_str()));
        Chart::new(
            self.title(),
            "Ingredient",
            "Count",
            ChartKind::Bar(top_n(counts, config.top_n)),
        )
    }
}

/// Share of recipes per difficulty level.
pub struct DifficultyDistribution;

impl Analysis for DifficultyDistribution {
    fn title(&self) -> &'static str {
        "Difficulty Distribution"
    }

    fn build(&self, dataset: &Dataset, _config: &ReportConfig) -> Chart {
        let counts = value_counts(dataset.recipes.iter().map(|r| r.difficulty.as_str()));
        Chart::new(self.title(), "", "", ChartKind::Pie(counts))
    }
}

/// Authors ranked by number of recipes.
pub struct RecipesPerUser;

impl Analysis for RecipesPerUser {
    fn title(&self) -> &'static str {
        "Users With the Most Recipes"
    }

    fn build(&self, dataset: &Dataset, config: &ReportConfig) -> Chart {
        let counts = value_counts(dataset.recipes.iter().map(|r| r.author_user_id.as_str()));
        Chart::new(
            self.title(),
            "User ID",
            "Number of Recipes",
            ChartKind::Bar(top_n(counts, config.top_n)),
        )
    }
}
