//! Schema-checked readers for `recipe.csv`, `ingredients.csv`,
//! `interactions.csv` and `users.csv`.
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{Reader, StringRecord, Trim};

use crate::data_handling::{
    Dataset, Ingredient, Interaction, InteractionKind, Recipe, Table, User,
};
use crate::error::DatasetError;

/// Expected layout of one export.
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub table: &'static str,
    pub file_name: &'static str,
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
}

pub const RECIPES: TableSchema = TableSchema {
    table: "recipes",
    file_name: "recipe.csv",
    required: &["recipe_id", "difficulty", "prep_time_min", "author_user_id"],
    optional: &["cook_time_min"],
};

pub const INGREDIENTS: TableSchema = TableSchema {
    table: "ingredients",
    file_name: "ingredients.csv",
    required: &["name"],
    optional: &["recipe_id"],
};

pub const INTERACTIONS: TableSchema = TableSchema {
    table: "interactions",
    file_name: "interactions.csv",
    required: &["type", "recipe_id"],
    optional: &["rating"],
};

pub const USERS: TableSchema = TableSchema {
    table: "users",
    file_name: "users.csv",
    required: &["created_at"],
    optional: &["country"],
};

impl TableSchema {
    /// Check that every required column is in the header.
    pub fn validate(&self, headers: &StringRecord) -> Result<(), DatasetError> {
        for column in self.required {
            if find_column(headers, column).is_none() {
                return Err(DatasetError::MissingColumn {
                    table: self.table,
                    column,
                });
            }
        }
        Ok(())
    }
}

/// Column positions resolved against a validated header.
struct Columns<'a> {
    schema: &'a TableSchema,
    headers: StringRecord,
}

impl<'a> Columns<'a> {
    fn required(&self, name: &'static str) -> Result<usize, DatasetError> {
        find_column(&self.headers, name).ok_or(DatasetError::MissingColumn {
            table: self.schema.table,
            column: name,
        })
    }

    fn optional(&self, name: &str) -> Option<usize> {
        find_column(&self.headers, name)
    }

    fn names(&self) -> Vec<String> {
        self.headers.iter().map(|h| h.to_string()).collect()
    }
}

/// Read all four exports from `dir`. Fails on the first unreadable file or
/// schema violation; nothing is returned partially.
pub fn read_dataset<P: AsRef<Path>>(dir: P) -> Result<Dataset> {
    let dir = dir.as_ref();
    let dataset = Dataset {
        recipes: read_recipes(dir.join(RECIPES.file_name))?,
        ingredients: read_ingredients(dir.join(INGREDIENTS.file_name))?,
        interactions: read_interactions(dir.join(INTERACTIONS.file_name))?,
        users: read_users(dir.join(USERS.file_name))?,
    };
    dataset.log_input_data_summary();
    Ok(dataset)
}

pub fn read_recipes<P: AsRef<Path>>(path: P) -> Result<Table<Recipe>> {
    let (mut reader, columns) = open_table(&path, &RECIPES)?;
    let id_idx = columns.required("recipe_id")?;
    let difficulty_idx = columns.required("difficulty")?;
    let prep_idx = columns.required("prep_time_min")?;
    let author_idx = columns.required("author_user_id")?;
    let cook_idx = columns.optional("cook_time_min");

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = read_record(result, &path, row_idx)?;
        let row = row_idx + 1;
        rows.push(Recipe {
            recipe_id: cell(&record, id_idx).to_string(),
            difficulty: cell(&record, difficulty_idx).to_string(),
            prep_time_min: parse_number(&RECIPES, "prep_time_min", row, cell(&record, prep_idx))?,
            cook_time_min: cook_idx.and_then(|idx| {
                parse_optional_number(&RECIPES, "cook_time_min", row, cell(&record, idx))
            }),
            author_user_id: cell(&record, author_idx).to_string(),
        });
    }

    Ok(Table::new(rows, columns.names()))
}

pub fn read_ingredients<P: AsRef<Path>>(path: P) -> Result<Table<Ingredient>> {
    let (mut reader, columns) = open_table(&path, &INGREDIENTS)?;
    let name_idx = columns.required("name")?;
    let recipe_idx = columns.optional("recipe_id");

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = read_record(result, &path, row_idx)?;
        rows.push(Ingredient {
            name: cell(&record, name_idx).to_string(),
            recipe_id: recipe_idx.map(|idx| cell(&record, idx).to_string()),
        });
    }

    Ok(Table::new(rows, columns.names()))
}

pub fn read_interactions<P: AsRef<Path>>(path: P) -> Result<Table<Interaction>> {
    let (mut reader, columns) = open_table(&path, &INTERACTIONS)?;
    let type_idx = columns.required("type")?;
    let recipe_idx = columns.required("recipe_id")?;
    let rating_idx = columns.optional("rating");

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = read_record(result, &path, row_idx)?;
        let row = row_idx + 1;
        let kind = InteractionKind::parse(cell(&record, type_idx));
        // ratings only mean something on rating events
        let rating = match (&kind, rating_idx) {
            (InteractionKind::Rating, Some(idx)) => {
                parse_optional_number(&INTERACTIONS, "rating", row, cell(&record, idx))
            }
            _ => None,
        };
        rows.push(Interaction {
            kind,
            recipe_id: cell(&record, recipe_idx).to_string(),
            rating,
        });
    }

    Ok(Table::new(rows, columns.names()))
}

pub fn read_users<P: AsRef<Path>>(path: P) -> Result<Table<User>> {
    let (mut reader, columns) = open_table(&path, &USERS)?;
    let created_idx = columns.required("created_at")?;
    let country_idx = columns.optional("country");

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = read_record(result, &path, row_idx)?;
        rows.push(User {
            created_at: parse_timestamp(cell(&record, created_idx)),
            country: country_idx
                .map(|idx| cell(&record, idx))
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        });
    }

    Ok(Table::new(rows, columns.names()))
}

/// Lenient timestamp parsing: anything unrecognised becomes `None` instead of
/// an error. Offsets are dropped and the wall-clock time is kept.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn open_table<'a, P: AsRef<Path>>(
    path: P,
    schema: &'a TableSchema,
) -> Result<(Reader<File>, Columns<'a>)> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open {} file: {}", schema.table, path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read header row of {}", path.display()))?
        .clone();
    schema.validate(&headers)?;

    Ok((reader, Columns { schema, headers }))
}

fn read_record<P: AsRef<Path>>(
    result: csv::Result<StringRecord>,
    path: P,
    row_idx: usize,
) -> Result<StringRecord> {
    result.with_context(|| {
        format!(
            "Failed to read row {} of {}",
            row_idx + 1,
            path.as_ref().display()
        )
    })
}

fn parse_number(
    schema: &TableSchema,
    column: &'static str,
    row: usize,
    value: &str,
) -> Result<Option<f64>, DatasetError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<f64>()
        .map(Some)
        .map_err(|_| DatasetError::InvalidNumber {
            table: schema.table,
            column,
            row,
            value: value.to_string(),
        })
}

/// Optional numeric columns never fail a load: unparseable cells are dropped.
fn parse_optional_number(
    schema: &TableSchema,
    column: &'static str,
    row: usize,
    value: &str,
) -> Option<f64> {
    match parse_number(schema, column, row, value) {
        Ok(number) => number,
        Err(e) => {
            log::debug!("Ignoring {}", e);
            None
        }
    }
}

fn cell(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).unwrap_or_default()
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header == name)
}
