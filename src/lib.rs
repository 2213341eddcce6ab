//! Mask Integrity - referential integrity checking for masked datasets
//!
//! Verifies that a declared foreign-key relationship still holds in a
//! masked/anonymized copy of a dataset: every non-null foreign-key value in
//! the child table must resolve to a key in the parent table. A child row
//! whose foreign key is set but matches no parent key is an orphan.
//!
//! Provides:
//! - Relationship/dataset models
//! - Identifier validation and quoting (the only path into SQL text)
//! - The orphan-detection checker itself
//! - SQLite dataset access with scoped read-only connections
//! - Demo fixture generation

pub mod fixtures;
pub mod models;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use models::{DatasetPair, KeyValue, Relationship};
pub use store::{SqliteStore, StoreError};
pub use validation::input::ValidationError;
pub use validation::integrity::{CheckError, CheckOutcome, DEFAULT_SAMPLE_LIMIT, IntegrityChecker};
