//! Error types for initialization, storage, and the classifier boundary.

mod types;

pub use types::{ClassifierError, DatabaseError, InitializationError};
