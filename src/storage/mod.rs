// storage/mod.rs
// Scan history persistence

pub mod migrations;
pub mod models;
pub mod pool;
pub mod scans;

// Re-export commonly used items
pub use migrations::run_migrations;
pub use models::ScanRecord;
pub use pool::{init_db_pool_with_path, DbPool};
pub use scans::{recent_scans, record_scan, scan_id};
