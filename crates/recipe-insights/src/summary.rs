//! Plain-text analytics summary written next to the charts.
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::data_handling::{Dataset, InteractionKind};
use crate::stats::{
    interaction_counts, mean, mean_by_key, pearson_correlation, prep_time_vs_likes, top_n,
    value_counts, Count,
};

pub const SUMMARY_FILE_NAME: &str = "analytics_summary.txt";

/// Number of most-liked recipes whose ingredients are summarised.
const TOP_LIKED_RECIPES: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSummary {
    pub common_ingredients: Vec<Count>,
    pub avg_prep_time: Option<f64>,
    pub avg_cook_time: Option<f64>,
    pub difficulty: Vec<Count>,
    pub most_viewed: Vec<Count>,
    pub most_liked: Vec<Count>,
    pub most_cook_attempts: Vec<Count>,
    /// `None` when no interaction carries a usable rating.
    pub avg_rating: Option<Vec<(String, f64)>>,
    pub prep_likes_correlation: f64,
    /// `None` when the ingredients export has no `recipe_id` column.
    pub top_liked_ingredients: Option<Vec<Count>>,
}

impl AnalyticsSummary {
    pub fn from_dataset(dataset: &Dataset, limit: usize) -> Self {
        let prep_times: Vec<f64> = dataset.recipes.iter().filter_map(|r| r.prep_time_min).collect();
        let cook_times: Vec<f64> = dataset.recipes.iter().filter_map(|r| r.cook_time_min).collect();

        let ratings: Vec<(&str, f64)> = dataset
            .interactions_of(&InteractionKind::Rating)
            .filter_map(|i| i.rating.map(|r| (i.recipe_id.as_str(), r)))
            .collect();
        let avg_rating = if ratings.is_empty() {
            None
        } else {
            Some(mean_by_key(ratings).into_iter().take(limit).collect())
        };

        let (prep, likes): (Vec<f64>, Vec<f64>) = prep_time_vs_likes(dataset)
            .into_iter()
            .filter_map(|p| p.prep_time_min.map(|prep| (prep, p.likes as f64)))
            .unzip();

        let likes_ranked = interaction_counts(dataset, &InteractionKind::Like);
        let top_liked_ingredients = if dataset.ingredients.has_column("recipe_id") {
            let top_ids: HashSet<&str> = likes_ranked
                .iter()
                .take(TOP_LIKED_RECIPES)
                .map(|(id, _)| id.as_str())
                .collect();
            let names = dataset
                .ingredients
                .iter()
                .filter(|i| {
                    i.recipe_id
                        .as_deref()
                        .map_or(false, |id| top_ids.contains(id))
                })
                .map(|i| i.name.as_str());
            Some(top_n(value_counts(names), limit))
        } else {
            None
        };

        Self {
            common_ingredients: top_n(
                value_counts(dataset.ingredients.iter().map(|i| i.name.as_str())),
                limit,
            ),
            avg_prep_time: mean(&prep_times),
            avg_cook_time: mean(&cook_times),
            difficulty: value_counts(dataset.recipes.iter().map(|r| r.difficulty.as_str())),
            most_viewed: top_n(interaction_counts(dataset, &InteractionKind::View), limit),
            most_liked: top_n(likes_ranked, limit),
            most_cook_attempts: top_n(
                interaction_counts(dataset, &InteractionKind::CookAttempt),
                limit,
            ),
            avg_rating,
            prep_likes_correlation: pearson_correlation(&prep, &likes),
            top_liked_ingredients,
        }
    }

    /// Write the summary into `dir` and return the file path.
    pub fn write_to<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let path = dir.as_ref().join(SUMMARY_FILE_NAME);
        std::fs::write(&path, self.to_string())
            .with_context(|| format!("Failed to write summary: {}", path.display()))?;
        Ok(path)
    }
}

fn write_counts(f: &mut fmt::Formatter, counts: &[Count]) -> fmt::Result {
    for (label, count) in counts {
        writeln!(f, "{}: {}", label, count)?;
    }
    Ok(())
}

fn write_average(f: &mut fmt::Formatter, value: Option<f64>, missing: &str) -> fmt::Result {
    match value {
        Some(v) => writeln!(f, "{:.2}", v),
        None => writeln!(f, "{}", missing),
    }
}

impl fmt::Display for AnalyticsSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "=== ANALYTICS SUMMARY ===")?;

        writeln!(f, "\n1. Most common ingredients:")?;
        write_counts(f, &self.common_ingredients)?;

        writeln!(f, "\n2. Average preparation time (min):")?;
        write_average(f, self.avg_prep_time, "No preparation time data available.")?;

        writeln!(f, "\n3. Average cook time (min):")?;
        write_average(f, self.avg_cook_time, "No cook time data available.")?;

        writeln!(f, "\n4. Difficulty distribution:")?;
        write_counts(f, &self.difficulty)?;

        writeln!(f, "\n5. Most viewed recipes:")?;
        write_counts(f, &self.most_viewed)?;

        writeln!(f, "\n6. Most liked recipes:")?;
        write_counts(f, &self.most_liked)?;

        writeln!(f, "\n7. Recipes with most cook attempts:")?;
        write_counts(f, &self.most_cook_attempts)?;

        writeln!(f, "\n8. Average rating per recipe:")?;
        match &self.avg_rating {
            Some(ratings) => {
                for (recipe_id, rating) in ratings {
                    writeln!(f, "{}: {}", recipe_id, rating)?;
                }
            }
            None => writeln!(f, "No rating data available.")?,
        }

        writeln!(f, "\n9. Correlation between prep time and likes:")?;
        writeln!(
            f,
            "Correlation (prep_time_min vs like_count): {:.4}",
            self.prep_likes_correlation
        )?;

        writeln!(
            f,
            "\n10. Ingredients associated with high engagement (top liked recipes):"
        )?;
        match &self.top_liked_ingredients {
            Some(counts) => write_counts(f, counts)?,
            None => writeln!(f, "No ingredient-to-recipe mapping available.")?,
        }

        Ok(())
    }
}
