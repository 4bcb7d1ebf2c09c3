use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use recipe_insights::config::{load_report_config, ReportConfig};
use recipe_insights::pipeline::ReportGenerator;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(
            env_logger::Env::default().filter_or("RECIPE_INSIGHTS_LOG", "error,recipe_insights=info"),
        )
        .init();

    let matches = build_cli().get_matches();
    let config = resolve_config(&matches)?;

    if matches.get_flag("print_config") {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    log::info!(
        "[RecipeInsights] Writing charts from {:?} to {:?}",
        config.input_dir,
        config.output_dir
    );

    match ReportGenerator::new(config).run() {
        Ok(outcome) => {
            log::info!(
                "[RecipeInsights] {} charts written, {} skipped",
                outcome.charts.len(),
                outcome.skipped.len()
            );
            Ok(())
        }
        Err(e) => {
            log::error!("Report generation failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn build_cli() -> Command {
    Command::new("recipe-insights")
        .version(clap::crate_version!())
        .author("Justin Sing <justincsing@gmail.com>")
        .about("\u{1F4CA} Summary charts for recipe, ingredient, interaction and user exports")
        .arg(
            Arg::new("config")
                .help("Optional JSON configuration file. Defaults are used for missing fields.")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("input_dir")
                .short('i')
                .long("input-dir")
                .help(
                    "Directory holding recipe.csv, ingredients.csv, interactions.csv and users.csv. \
                     Overrides the configuration file.",
                )
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("output_dir")
                .short('o')
                .long("output-dir")
                .help("Directory the charts are written to. Overrides the configuration file.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::DirPath),
        )
        .arg(
            Arg::new("top_n")
                .short('n')
                .long("top-n")
                .help("Number of categories kept in the ranked bar charts.")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help("Also write analytics_summary.txt.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("print_config")
                .long("print-config")
                .help("Print the effective configuration as JSON and exit.")
                .action(ArgAction::SetTrue),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Written by {author-with-newline}Version {version}\n\n\
             {all-args}{after-help}",
        )
}

fn resolve_config(matches: &ArgMatches) -> Result<ReportConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            log::info!("[RecipeInsights] Using config: {:?}", path);
            load_report_config(path)?
        }
        None => ReportConfig::default(),
    };

    if let Some(dir) = matches.get_one::<PathBuf>("input_dir") {
        config.input_dir = dir.clone();
    }
    if let Some(dir) = matches.get_one::<PathBuf>("output_dir") {
        config.output_dir = dir.clone();
    }
    if let Some(&top_n) = matches.get_one::<usize>("top_n") {
        config.top_n = top_n;
    }
    if matches.get_flag("summary") {
        config.write_summary = true;
    }

    Ok(config)
}
