mod common;

use common::RecordingSink;
use recipe_insights::config::ReportConfig;
use recipe_insights::io::read_dataset;
use recipe_insights::pipeline::ReportGenerator;
use recipe_insights::report::{font_available, ChartKind};
use recipe_insights::stats::proportions;

fn counts(pairs: &[(&str, usize)]) -> Vec<(String, usize)> {
    pairs.iter().map(|(l, c)| (l.to_string(), *c)).collect()
}

#[test]
fn produces_all_eight_charts_in_order() {
    let dir = tempfile::tempdir().unwrap();
    common::write_exports(dir.path());
    let dataset = read_dataset(dir.path()).unwrap();

    let mut sink = RecordingSink::default();
    let outcome = ReportGenerator::new(ReportConfig::default())
        .generate(&dataset, &mut sink)
        .unwrap();

    let files: Vec<String> = outcome
        .charts
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    assert_eq!(
        files,
        vec![
            "top_10_most_common_ingredients.png",
            "difficulty_distribution.png",
            "top_viewed_recipes.png",
            "top_liked_recipes.png",
            "prep_time_vs_likes.png",
            "user_growth_by_month.png",
            "top_countries_by_user_count.png",
            "users_with_the_most_recipes.png",
        ]
    );
    assert!(outcome.skipped.is_empty());
}

#[test]
fn aggregated_values_match_the_fixture() {
    let dir = tempfile::tempdir().unwrap();
    common::write_exports(dir.path());
    let dataset = read_dataset(dir.path()).unwrap();

    let mut sink = RecordingSink::default();
    ReportGenerator::new(ReportConfig::default())
        .generate(&dataset, &mut sink)
        .unwrap();

    let ingredients = sink.chart("Top 10 Most Common Ingredients").unwrap();
    assert_eq!(
        ingredients.kind,
        ChartKind::Bar(counts(&[
            ("salt", 3),
            ("flour", 2),
            ("egg", 1),
            ("milk", 1),
            ("rice", 1),
            ("lettuce", 1)
        ]))
    );
    assert_eq!(ingredients.x_label, "Ingredient");

    let viewed = sink.chart("Top Viewed Recipes").unwrap();
    assert_eq!(viewed.kind, ChartKind::Bar(counts(&[("r1", 2), ("r2", 1)])));

    // likes on unknown recipes still rank
    let liked = sink.chart("Top Liked Recipes").unwrap();
    assert_eq!(
        liked.kind,
        ChartKind::Bar(counts(&[("r1", 2), ("r3", 1), ("r9", 1)]))
    );

    let authors = sink.chart("Users With the Most Recipes").unwrap();
    assert_eq!(
        authors.kind,
        ChartKind::Bar(counts(&[("u1", 3), ("u2", 1), ("u3", 1)]))
    );

    let countries = sink.chart("Top Countries by User Count").unwrap();
    assert_eq!(countries.kind, ChartKind::Bar(counts(&[("US", 2), ("DE", 1)])));
}

#[test]
fn difficulty_shares_sum_to_one_hundred_percent() {
    let dir = tempfile::tempdir().unwrap();
    common::write_exports(dir.path());
    let dataset = read_dataset(dir.path()).unwrap();

    let mut sink = RecordingSink::default();
    ReportGenerator::new(ReportConfig::default())
        .generate(&dataset, &mut sink)
        .unwrap();

    match &sink.chart("Difficulty Distribution").unwrap().kind {
        ChartKind::Pie(data) => {
            assert_eq!(data, &counts(&[("easy", 3), ("medium", 1), ("hard", 1)]));
            let percent: f64 = proportions(data).iter().map(|(_, p)| p * 100.0).sum();
            assert!((percent - 100.0).abs() < 1e-9);
        }
        other => panic!("expected a pie chart, got {:?}", other),
    }
}

#[test]
fn unliked_recipes_plot_with_zero_likes() {
    let dir = tempfile::tempdir().unwrap();
    common::write_exports(dir.path());
    let dataset = read_dataset(dir.path()).unwrap();

    let mut sink = RecordingSink::default();
    ReportGenerator::new(ReportConfig::default())
        .generate(&dataset, &mut sink)
        .unwrap();

    // r5 has no prep time and is left out of the scatter
    assert_eq!(
        sink.chart("Prep Time vs Likes").unwrap().kind,
        ChartKind::Scatter(vec![(10.0, 2.0), (30.0, 0.0), (60.0, 1.0), (5.0, 0.0)])
    );
}

#[test]
fn user_growth_buckets_by_month() {
    let dir = tempfile::tempdir().unwrap();
    common::write_exports_with_users(dir.path(), common::USERS_WITHOUT_COUNTRY);
    let dataset = read_dataset(dir.path()).unwrap();

    let mut sink = RecordingSink::default();
    ReportGenerator::new(ReportConfig::default())
        .generate(&dataset, &mut sink)
        .unwrap();

    assert_eq!(
        sink.chart("User Growth by Month").unwrap().kind,
        ChartKind::Line(counts(&[("2024-01", 2), ("2024-02", 1)]))
    );
}

#[test]
fn country_chart_is_skipped_without_country_column() {
    let dir = tempfile::tempdir().unwrap();
    common::write_exports_with_users(dir.path(), common::USERS_WITHOUT_COUNTRY);
    let dataset = read_dataset(dir.path()).unwrap();

    let mut sink = RecordingSink::default();
    let outcome = ReportGenerator::new(ReportConfig::default())
        .generate(&dataset, &mut sink)
        .unwrap();

    assert_eq!(outcome.charts.len(), 7);
    assert_eq!(outcome.skipped, vec!["Top Countries by User Count"]);
    assert!(sink.chart("Top Countries by User Count").is_none());
}

#[test]
fn top_n_limit_truncates_bar_charts() {
    let dir = tempfile::tempdir().unwrap();
    common::write_exports(dir.path());
    let dataset = read_dataset(dir.path()).unwrap();

    let config = ReportConfig {
        top_n: 2,
        ..ReportConfig::default()
    };
    let mut sink = RecordingSink::default();
    ReportGenerator::new(config).generate(&dataset, &mut sink).unwrap();

    for chart in &sink.charts {
        if let ChartKind::Bar(data) = &chart.kind {
            assert!(data.len() <= 2, "{} has {} bars", chart.title, data.len());
        }
    }
    // title stays fixed regardless of the limit
    assert!(sink.chart("Top 10 Most Common Ingredients").is_some());
}

#[test]
fn repeated_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    common::write_exports(dir.path());
    let generator = ReportGenerator::new(ReportConfig::default());

    let mut first = RecordingSink::default();
    let first_outcome = generator
        .generate(&read_dataset(dir.path()).unwrap(), &mut first)
        .unwrap();
    let mut second = RecordingSink::default();
    let second_outcome = generator
        .generate(&read_dataset(dir.path()).unwrap(), &mut second)
        .unwrap();

    assert_eq!(first_outcome, second_outcome);
    assert_eq!(first.charts, second.charts);
}

#[test]
fn bad_optional_numbers_do_not_block_charts() {
    let dir = tempfile::tempdir().unwrap();
    common::write_exports(dir.path());
    std::fs::write(
        dir.path().join("recipe.csv"),
        "recipe_id,prep_time_min,cook_time_min,difficulty,author_user_id\n\
         r1,10,unknown,easy,u1\n\
         r2,30,40,medium,u2\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("interactions.csv"),
        "user_id,recipe_id,type,rating\n\
         u1,r1,view,N/A\n\
         u2,r1,like,\n\
         u2,r2,rating,4\n\
         u3,r2,rating,great\n",
    )
    .unwrap();

    let dataset = read_dataset(dir.path()).unwrap();
    assert_eq!(dataset.recipes.rows[0].cook_time_min, None);
    assert_eq!(dataset.recipes.rows[1].cook_time_min, Some(40.0));
    let ratings: Vec<Option<f64>> = dataset.interactions.iter().map(|i| i.rating).collect();
    assert_eq!(ratings, vec![None, None, Some(4.0), None]);

    let mut sink = RecordingSink::default();
    let outcome = ReportGenerator::new(ReportConfig::default())
        .generate(&dataset, &mut sink)
        .unwrap();
    assert_eq!(outcome.charts.len(), 8);
    assert!(outcome.skipped.is_empty());
}

#[test]
fn country_header_must_match_exactly() {
    let dir = tempfile::tempdir().unwrap();
    common::write_exports_with_users(
        dir.path(),
        "user_id,Country,created_at\nu1,US,2024-01-15\n",
    );
    let dataset = read_dataset(dir.path()).unwrap();

    let mut sink = RecordingSink::default();
    let outcome = ReportGenerator::new(ReportConfig::default())
        .generate(&dataset, &mut sink)
        .unwrap();
    assert_eq!(outcome.skipped, vec!["Top Countries by User Count"]);
}

#[test]
fn run_writes_png_files() {
    if !font_available() {
        eprintln!("skipping: no sans-serif font available to draw chart text");
        return;
    }
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    common::write_exports(input.path());

    let config = ReportConfig {
        input_dir: input.path().to_path_buf(),
        output_dir: output.path().join("charts"),
        write_summary: true,
        ..ReportConfig::default()
    };
    let outcome = ReportGenerator::new(config).run().unwrap();

    assert_eq!(outcome.charts.len(), 8);
    for path in &outcome.charts {
        assert!(path.exists(), "{} missing", path.display());
    }
    assert!(output.path().join("charts/analytics_summary.txt").exists());
}
