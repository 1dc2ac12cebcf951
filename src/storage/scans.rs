//! Scan history reads and writes.
//!
//! History is keyed by a content hash of the URL, so re-scanning the same
//! URL overwrites its prior row (last-write-wins, not append-only). The hash
//! is a dedup key, not a security boundary.

use log::error;
use sha2::{Digest, Sha256};
use sqlx::SqlitePool;

use crate::config::MALICIOUS_THRESHOLD;
use crate::error_handling::DatabaseError;

use super::models::ScanRecord;

/// Stable, deterministic history key for a URL.
pub fn scan_id(url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(url.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Inserts or overwrites the history row for a URL.
///
/// `timestamp` is milliseconds since the Unix epoch. The `is_malicious`
/// column is derived from the prediction at write time.
pub async fn record_scan(
    pool: &SqlitePool,
    url: &str,
    prediction: f64,
    timestamp: i64,
) -> Result<(), DatabaseError> {
    let result = sqlx::query(
        "INSERT OR REPLACE INTO url_scans (id, url, timestamp, prediction, is_malicious)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(scan_id(url))
    .bind(url)
    .bind(timestamp)
    .bind(prediction)
    .bind(prediction >= MALICIOUS_THRESHOLD)
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("Error when writing scan history: {}", e);
            Err(e.into())
        }
    }
}

/// Fetches the most recent scans, newest first.
pub async fn recent_scans(
    pool: &SqlitePool,
    limit: i64,
) -> Result<Vec<ScanRecord>, DatabaseError> {
    let records = sqlx::query_as::<_, ScanRecord>(
        "SELECT id, url, timestamp, prediction, is_malicious
         FROM url_scans
         ORDER BY timestamp DESC
         LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::scan_id;

    #[test]
    fn test_scan_id_is_stable() {
        assert_eq!(scan_id("https://example.com"), scan_id("https://example.com"));
    }

    #[test]
    fn test_scan_id_distinguishes_urls() {
        assert_ne!(scan_id("https://example.com"), scan_id("https://example.org"));
    }

    #[test]
    fn test_scan_id_is_hex_digest() {
        let id = scan_id("https://example.com");
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
