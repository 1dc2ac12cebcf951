// Scan history integration tests: hash-keyed overwrite semantics and the
// recent-scans query.

mod helpers;

use helpers::create_test_pool;
use url_risk::storage::{recent_scans, record_scan};

#[tokio::test]
async fn test_rescan_overwrites_instead_of_duplicating() {
    let pool = create_test_pool().await;

    record_scan(&pool, "https://example.com", 0.2, 1_000).await.unwrap();
    record_scan(&pool, "https://example.com", 0.8, 2_000).await.unwrap();

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_scans")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1, "re-scanning the same URL must not add a row");

    let records = recent_scans(&pool, 10).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].prediction, 0.8);
    assert_eq!(records[0].timestamp, 2_000);
    assert!(records[0].is_malicious);
}

#[tokio::test]
async fn test_distinct_urls_get_distinct_rows() {
    let pool = create_test_pool().await;

    record_scan(&pool, "https://example.com", 0.1, 1_000).await.unwrap();
    record_scan(&pool, "https://example.org", 0.9, 2_000).await.unwrap();

    let records = recent_scans(&pool, 10).await.unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_recent_scans_newest_first_with_limit() {
    let pool = create_test_pool().await;

    for (i, url) in ["https://a.com", "https://b.com", "https://c.com"]
        .iter()
        .enumerate()
    {
        record_scan(&pool, url, 0.3, 1_000 * (i as i64 + 1)).await.unwrap();
    }

    let records = recent_scans(&pool, 2).await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].url, "https://c.com");
    assert_eq!(records[1].url, "https://b.com");
}

#[tokio::test]
async fn test_malicious_threshold_at_half() {
    let pool = create_test_pool().await;

    record_scan(&pool, "https://benign.com", 0.49, 1_000).await.unwrap();
    record_scan(&pool, "https://exactly.com", 0.5, 2_000).await.unwrap();

    let records = recent_scans(&pool, 10).await.unwrap();
    let exactly = records.iter().find(|r| r.url == "https://exactly.com").unwrap();
    let benign = records.iter().find(|r| r.url == "https://benign.com").unwrap();
    assert!(exactly.is_malicious, "0.5 is malicious (threshold inclusive)");
    assert!(!benign.is_malicious);
}

#[tokio::test]
async fn test_record_stores_the_url_verbatim() {
    let pool = create_test_pool().await;

    let url = "https://example.com/path?query=1";
    record_scan(&pool, url, 0.42, 1_000).await.unwrap();

    let records = recent_scans(&pool, 1).await.unwrap();
    assert_eq!(records[0].url, url);
    assert_eq!(records[0].id, url_risk::storage::scan_id(url));
}
