//! recipe-insights: summary charts for recipe platform exports.
//!
//! The crate reads four CSV exports (recipes, ingredients, interactions and
//! users), checks them against a fixed schema, aggregates them into eight
//! charts and writes each chart as a PNG named after its title. An optional
//! plain-text summary covers the same data with a few extra statistics.
//!
//! Analyses are independent units behind the [`analysis::Analysis`] trait and
//! render through an explicit [`report::ChartSink`], so they can be tested
//! without touching an image backend.
pub mod analysis;
pub mod config;
pub mod data_handling;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod summary;
