//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_risk` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use strum::IntoEnumIterator;
use url_risk::initialization::init_logger_with;
use url_risk::scoring::RiskFactor;
use url_risk::{
    init_db_pool_with_path, recent_scans, run_migrations, run_scan, Config, UrlAssessment,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Some(limit) = config.recent {
        return show_history(&config, limit).await;
    }

    match run_scan(config).await {
        Ok(report) => {
            for outcome in &report.assessments {
                print_assessment(outcome);
            }
            println!(
                "Assessed {} URL{} ({} succeeded, {} failed) in {:.1}s",
                report.total_urls,
                if report.total_urls == 1 { "" } else { "s" },
                report.successful,
                report.failed,
                report.elapsed_seconds
            );
            println!("Scan history saved in {}", report.db_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("url_risk error: {:#}", e);
            process::exit(1);
        }
    }
}

/// Renders one URL's side-by-side assessment.
fn print_assessment(outcome: &UrlAssessment) {
    println!("\n{}", outcome.url);
    println!(
        "  composite risk score: {:.0}%",
        outcome.assessment.composite_score * 100.0
    );
    match outcome.ml_probability {
        Some(p) => println!("  ml confidence:        {:.0}%", p * 100.0),
        None => println!("  ml confidence:        unavailable"),
    }

    for factor in RiskFactor::iter() {
        if let Some(score) = outcome.assessment.factor_scores.get(&factor) {
            println!("  {:<14} {:.2}", factor.label(), score);
        }
    }

    let insights = &outcome.assessment.insights;
    for finding in &insights.high {
        println!("  [high]     {}", finding);
    }
    for finding in &insights.moderate {
        println!("  [moderate] {}", finding);
    }
    for finding in &insights.positive {
        println!("  [positive] {}", finding);
    }
}

/// Prints the most recent scan history rows.
async fn show_history(config: &Config, limit: i64) -> Result<()> {
    let pool = init_db_pool_with_path(&config.db_path)
        .await
        .context("Failed to open history database")?;
    run_migrations(&pool)
        .await
        .context("Failed to run migrations")?;

    let records = recent_scans(&pool, limit)
        .await
        .context("Failed to query scan history")?;

    if records.is_empty() {
        println!("No scan history in {}", config.db_path.display());
        return Ok(());
    }

    for record in records {
        println!(
            "{}  {:.2}  {}  {}",
            record.timestamp,
            record.prediction,
            if record.is_malicious {
                "malicious"
            } else {
                "benign"
            },
            record.url
        );
    }
    Ok(())
}
