//! Counting, ranking and join helpers behind every chart.
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chrono::{Datelike, NaiveDateTime};
use statrs::statistics::Statistics;

use crate::data_handling::{Dataset, InteractionKind};

/// A category label with its number of occurrences.
pub type Count = (String, usize);

/// Count occurrences of each non-empty value.
///
/// The result is ordered by count, highest first. Ties keep the order in
/// which the values first appeared, so repeated runs over the same input are
/// identical.
pub fn value_counts<I, S>(values: I) -> Vec<Count>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: Vec<Count> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for value in values {
        let value = value.as_ref();
        if value.is_empty() {
            continue;
        }
        match index.get(value) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                index.insert(value.to_string(), counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }

    // stable sort keeps first-appearance order for ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Keep the `n` largest categories of an already ranked count.
pub fn top_n(mut counts: Vec<Count>, n: usize) -> Vec<Count> {
    counts.truncate(n);
    counts
}

/// Share of each category in the total, as fractions in `[0, 1]`.
pub fn proportions(counts: &[Count]) -> Vec<(String, f64)> {
    let total: usize = counts.iter().map(|(_, c)| c).sum();
    if total == 0 {
        return Vec::new();
    }
    counts
        .iter()
        .map(|(label, c)| (label.clone(), *c as f64 / total as f64))
        .collect()
}

/// Ranked number of interactions of `kind` per recipe id.
pub fn interaction_counts(dataset: &Dataset, kind: &InteractionKind) -> Vec<Count> {
    value_counts(dataset.interactions_of(kind).map(|i| i.recipe_id.as_str()))
}

/// Like counts keyed by recipe id.
pub fn likes_per_recipe(dataset: &Dataset) -> HashMap<String, usize> {
    interaction_counts(dataset, &InteractionKind::Like)
        .into_iter()
        .collect()
}

/// One recipe in the prep time / likes pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct PrepLikes {
    pub recipe_id: String,
    pub prep_time_min: Option<f64>,
    pub likes: usize,
}

/// Left join of like counts onto every recipe. Recipes without a single like
/// get `0`; likes on unknown recipe ids are ignored.
pub fn prep_time_vs_likes(dataset: &Dataset) -> Vec<PrepLikes> {
    let likes = likes_per_recipe(dataset);
    dataset
        .recipes
        .iter()
        .map(|recipe| PrepLikes {
            recipe_id: recipe.recipe_id.clone(),
            prep_time_min: recipe.prep_time_min,
            likes: likes.get(&recipe.recipe_id).copied().unwrap_or(0),
        })
        .collect()
}

/// Calendar month bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(timestamp: &NaiveDateTime) -> Self {
        Self {
            year: timestamp.year(),
            month: timestamp.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Count timestamps per calendar month, oldest month first. Missing
/// timestamps are skipped.
pub fn monthly_counts<'a, I>(timestamps: I) -> Vec<(YearMonth, usize)>
where
    I: IntoIterator<Item = Option<&'a NaiveDateTime>>,
{
    let mut buckets: BTreeMap<YearMonth, usize> = BTreeMap::new();
    for ts in timestamps.into_iter().flatten() {
        *buckets.entry(YearMonth::of(ts)).or_insert(0) += 1;
    }
    buckets.into_iter().collect()
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().mean())
}

/// Pearson correlation coefficient. Returns `0.0` when it is undefined: fewer
/// than two pairs, mismatched lengths or a constant series.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return 0.0;
    }
    let sd_x = x.iter().std_dev();
    let sd_y = y.iter().std_dev();
    if sd_x == 0.0 || sd_y == 0.0 || sd_x.is_nan() || sd_y.is_nan() {
        return 0.0;
    }
    x.iter().covariance(y.iter()) / (sd_x * sd_y)
}

/// Mean of the values grouped by key, ranked by mean (highest first). Ties
/// keep first-appearance order.
pub fn mean_by_key<'a, I>(pairs: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    for (key, value) in pairs {
        match index.get(key) {
            Some(&pos) => groups[pos].1.push(value),
            None => {
                index.insert(key, groups.len());
                groups.push((key.to_string(), vec![value]));
            }
        }
    }

    let mut means: Vec<(String, f64)> = groups
        .into_iter()
        .filter_map(|(key, values)| mean(&values).map(|m| (key, m)))
        .collect();
    means.sort_by(|a, b| b.1.total_cmp(&a.1));
    means
}
