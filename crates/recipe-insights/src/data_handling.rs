//! Typed, read-only tables for the recipe exports.
//!
//! Rows are produced by the loaders in [`crate::io`] after the header has been
//! checked against the table schema. Every table keeps the header columns it
//! was read with, so optional analyses can ask whether a column was present.
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub recipe_id: String,
    pub difficulty: String,
    /// `None` when the cell was empty.
    pub prep_time_min: Option<f64>,
    pub cook_time_min: Option<f64>,
    pub author_user_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    /// Only populated when the export carries a `recipe_id` column.
    pub recipe_id: Option<String>,
}

/// Interaction event types found in the `type` column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    View,
    Like,
    CookAttempt,
    Rating,
    Other(String),
}

impl InteractionKind {
    pub fn parse(value: &str) -> Self {
        match value {
            "view" => InteractionKind::View,
            "like" => InteractionKind::Like,
            "cook_attempt" => InteractionKind::CookAttempt,
            "rating" => InteractionKind::Rating,
            other => InteractionKind::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub kind: InteractionKind,
    pub recipe_id: String,
    pub rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// `None` when `created_at` was empty or could not be parsed.
    pub created_at: Option<NaiveDateTime>,
    pub country: Option<String>,
}

/// Rows of one CSV export together with the header it was read with.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T> {
    pub rows: Vec<T>,
    pub columns: Vec<String>,
}

impl<T> Table<T> {
    pub fn new(rows: Vec<T>, columns: Vec<String>) -> Self {
        Self { rows, columns }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }
}

/// The four tables the report is built from.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub recipes: Table<Recipe>,
    pub ingredients: Table<Ingredient>,
    pub interactions: Table<Interaction>,
    pub users: Table<User>,
}

impl Dataset {
    pub fn log_input_data_summary(&self) {
        log::info!(
            "Loaded {} recipes, {} ingredient rows, {} interactions, {} users",
            self.recipes.len(),
            self.ingredients.len(),
            self.interactions.len(),
            self.users.len()
        );
        let unparsed = self.users.iter().filter(|u| u.created_at.is_none()).count();
        if unparsed > 0 {
            log::debug!("{} users have no usable created_at timestamp", unparsed);
        }
    }

    /// Interactions of one kind, in file order.
    pub fn interactions_of<'a>(
        &'a self,
        kind: &'a InteractionKind,
    ) -> impl Iterator<Item = &'a Interaction> + 'a {
        self.interactions.iter().filter(move |i| &i.kind == kind)
    }
}
