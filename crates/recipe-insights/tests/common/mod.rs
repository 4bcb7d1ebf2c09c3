//! CSV fixtures shared by the integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use anyhow::Result;
use recipe_insights::report::{Chart, ChartSink};

pub const RECIPES: &str = "\
recipe_id,name,prep_time_min,cook_time_min,difficulty,author_user_id
r1,Pancakes,10,15,easy,u1
r2,Curry,30,40,medium,u2
r3,Bread,60,45,hard,u1
r4,Salad,5,,easy,u3
r5,Soup,,30,easy,u1
";

pub const INGREDIENTS: &str = "\
recipe_id,name
r1,flour
r1,egg
r1,milk
r2,rice
r2,salt
r3,flour
r3,salt
r4,lettuce
r5,salt
";

pub const INTERACTIONS: &str = "\
user_id,recipe_id,type,rating
u1,r1,view,
u2,r1,view,
u3,r2,view,
u1,r1,like,
u2,r1,like,
u3,r3,like,
u1,r9,like,
u2,r2,cook_attempt,
u1,r1,rating,5
u2,r1,rating,4
u3,r2,rating,3
";

pub const USERS: &str = "\
user_id,country,created_at
u1,US,2024-01-15
u2,DE,2024-01-20T08:30:00.000Z
u3,US,2024-02-01
u4,,not-a-date
";

pub const USERS_WITHOUT_COUNTRY: &str = "\
user_id,created_at
u1,2024-01-15
u2,2024-01-20
u3,2024-02-01
u4,not-a-date
";

/// Write the four exports into `dir`, with custom contents for `users.csv`.
pub fn write_exports_with_users(dir: &Path, users: &str) {
    std::fs::write(dir.join("recipe.csv"), RECIPES).unwrap();
    std::fs::write(dir.join("ingredients.csv"), INGREDIENTS).unwrap();
    std::fs::write(dir.join("interactions.csv"), INTERACTIONS).unwrap();
    std::fs::write(dir.join("users.csv"), users).unwrap();
}

pub fn write_exports(dir: &Path) {
    write_exports_with_users(dir, USERS);
}

/// Keeps charts in memory instead of drawing them.
#[derive(Default)]
pub struct RecordingSink {
    pub charts: Vec<Chart>,
}

impl RecordingSink {
    pub fn chart(&self, title: &str) -> Option<&Chart> {
        self.charts.iter().find(|c| c.title == title)
    }
}

impl ChartSink for RecordingSink {
    fn render(&mut self, chart: &Chart) -> Result<PathBuf> {
        self.charts.push(chart.clone());
        Ok(PathBuf::from(chart.file_name()))
    }
}
