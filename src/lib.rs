//! url_risk library: URL risk assessment core
//!
//! This library scores URLs for phishing risk along two independent paths:
//! a weighted structural heuristic (length, special characters, subdomain
//! depth, path depth, suspicious keywords, TLD reputation) and an optional
//! external classifier consuming a fixed 5-element feature vector. The two
//! scores are surfaced side by side, never fused. Scan results are recorded
//! in a SQLite history table keyed by a content hash of the URL, so
//! re-scanning a URL overwrites its prior row.
//!
//! # Example
//!
//! ```
//! use url_risk::{assess_url, ScoringConfig};
//!
//! let config = ScoringConfig::default();
//! let assessment = assess_url("https://www.google.com", &config);
//! assert!(assessment.composite_score <= 1.0);
//! ```
//!
//! Batch scanning with history persistence requires a Tokio runtime; use
//! [`run_scan`] from an async context.

#![warn(missing_docs)]

pub mod app;
pub mod assessment;
pub mod classifier;
pub mod config;
mod error_handling;
pub mod features;
pub mod initialization;
pub mod insights;
pub mod scoring;
pub mod storage;
pub mod structure;

// Re-export public API
pub use assessment::{assess_url, assess_url_with_classifier, RiskAssessment, UrlAssessment};
pub use config::{Config, LogFormat, LogLevel, ScoringConfig};
pub use error_handling::{ClassifierError, DatabaseError, InitializationError};
pub use run::{run_scan, ScanReport};
pub use storage::{init_db_pool_with_path, recent_scans, run_migrations, ScanRecord};

// Internal run module (contains the batch scanning logic)
mod run {
    use anyhow::{bail, Context, Result};
    use chrono::Utc;
    use std::path::PathBuf;
    use std::time::Instant;

    use log::{info, warn};
    use tokio::fs;

    use crate::app::validate_and_normalize_url;
    use crate::assessment::{assess_url_with_classifier, UrlAssessment};
    use crate::classifier::{LinearModel, UrlClassifier};
    use crate::config::{Config, ScoringConfig};
    use crate::storage::{init_db_pool_with_path, record_scan, run_migrations};

    /// Results of a scanning run.
    #[derive(Debug, Clone)]
    pub struct ScanReport {
        /// Total number of URLs read from the input.
        pub total_urls: usize,
        /// Number of URLs successfully assessed.
        pub successful: usize,
        /// Number of URLs rejected or failed.
        pub failed: usize,
        /// Per-URL assessments, in input order.
        pub assessments: Vec<UrlAssessment>,
        /// Path to the SQLite database containing scan history.
        pub db_path: PathBuf,
        /// Elapsed time in seconds.
        pub elapsed_seconds: f64,
    }

    /// Runs a scan over the configured URL(s).
    ///
    /// This is the main entry point for the library. URLs come from the
    /// single `url` field and/or the `file` input (one URL per line; blank
    /// lines and `#` comments are skipped). Each URL is validated and
    /// assessed; when a classifier prediction is available the result is
    /// recorded in the history database.
    ///
    /// # Errors
    ///
    /// Returns an error when no input is configured, the input file cannot
    /// be read, or the database cannot be opened or migrated. Per-URL
    /// problems (invalid URLs, classifier failures) are logged and counted,
    /// never fatal.
    pub async fn run_scan(config: Config) -> Result<ScanReport> {
        let started = Instant::now();

        let urls = read_urls(&config).await?;
        if urls.is_empty() {
            bail!("No URLs to scan: provide a URL argument or --file");
        }

        let classifier = load_classifier(&config);
        let scoring = ScoringConfig::default();

        let pool = init_db_pool_with_path(&config.db_path)
            .await
            .context("Failed to open history database")?;
        run_migrations(&pool)
            .await
            .context("Failed to run migrations")?;

        let total_urls = urls.len();
        let mut successful = 0;
        let mut failed = 0;
        let mut assessments = Vec::with_capacity(total_urls);

        for raw in urls {
            let Some(url) = validate_and_normalize_url(&raw) else {
                failed += 1;
                continue;
            };

            let outcome = assess_url_with_classifier(
                &url,
                &scoring,
                classifier.as_ref().map(|m| m as &dyn UrlClassifier),
            );

            info!(
                "{}: composite risk {:.2}, ml probability {}",
                url,
                outcome.assessment.composite_score,
                outcome
                    .ml_probability
                    .map(|p| format!("{:.2}", p))
                    .unwrap_or_else(|| "unavailable".to_string())
            );

            // History rows carry the classifier probability; without one
            // there is nothing to persist.
            if let Some(probability) = outcome.ml_probability {
                record_scan(&pool, &url, probability, Utc::now().timestamp_millis())
                    .await
                    .context("Failed to record scan history")?;
            }

            assessments.push(outcome);
            successful += 1;
        }

        Ok(ScanReport {
            total_urls,
            successful,
            failed,
            assessments,
            db_path: config.db_path,
            elapsed_seconds: started.elapsed().as_secs_f64(),
        })
    }

    /// Collects input URLs from the single-URL argument and/or the file.
    async fn read_urls(config: &Config) -> Result<Vec<String>> {
        let mut urls = Vec::new();

        if let Some(url) = &config.url {
            urls.push(url.clone());
        }

        if let Some(path) = &config.file {
            let contents = fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read URL file: {}", path.display()))?;
            urls.extend(
                contents
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty() && !line.starts_with('#'))
                    .map(String::from),
            );
        }

        Ok(urls)
    }

    /// Loads the optional classifier model; unavailability is not fatal.
    fn load_classifier(config: &Config) -> Option<LinearModel> {
        let path = config.model.as_ref()?;
        match LinearModel::from_file(path) {
            Ok(model) => Some(model),
            Err(e) => {
                warn!(
                    "Classifier unavailable ({e}); reporting heuristic scores only: {}",
                    path.display()
                );
                None
            }
        }
    }
}
