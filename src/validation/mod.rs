//! Validation functionality
//!
//! Provides validation logic for:
//! - Identifier validation and quoting (the input boundary for SQL assembly)
//! - Referential integrity checking (orphaned foreign keys)

pub mod input;
pub mod integrity;

pub use input::ValidationError;
pub use integrity::{CheckError, CheckOutcome, IntegrityChecker};
