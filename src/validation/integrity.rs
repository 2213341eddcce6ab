//! Referential integrity checking.
//!
//! The checker runs a left-join orphan query against the masked dataset: a
//! child row whose foreign key is set but matches no parent key is an
//! orphan. Null foreign keys denote "no reference" and are exempt from the
//! count.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use super::input::{self, ValidationError};
use crate::models::{KeyValue, Relationship};
use crate::store::{SqliteStore, StoreError};

/// Default number of sample orphans reported for a failed check.
pub const DEFAULT_SAMPLE_LIMIT: usize = 5;

/// Outcome of an integrity check.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Every non-null foreign-key value resolves to a parent key.
    Passed,
    /// At least one orphaned foreign-key value was found.
    Failed {
        /// Number of child rows with an orphaned foreign key.
        orphan_count: u64,
        /// Up to the configured limit of example orphaned values. Empty when
        /// sampling itself failed; the verdict stands regardless.
        samples: Vec<KeyValue>,
    },
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, CheckOutcome::Passed)
    }
}

/// Error during an integrity check.
///
/// Distinguishes "could not check" from "checked, zero orphans": a failed
/// orphan query never reads as a passing verdict.
#[derive(Debug, Error)]
pub enum CheckError {
    /// A declared identifier failed shape validation before any SQL ran.
    #[error("invalid relationship declaration: {0}")]
    InvalidDeclaration(#[from] ValidationError),

    /// The orphan query failed (unknown table or column, unreadable
    /// dataset).
    #[error("{0}")]
    QueryFailure(#[from] StoreError),
}

/// Integrity checker for a single declared foreign-key relationship.
///
/// Side-effect free and stateless apart from its sample limit; the same
/// checker run twice against an unchanged dataset yields identical
/// outcomes.
pub struct IntegrityChecker {
    sample_limit: usize,
}

impl IntegrityChecker {
    pub fn new() -> Self {
        Self {
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }

    /// Create a checker reporting up to `sample_limit` example orphans.
    pub fn with_sample_limit(sample_limit: usize) -> Self {
        Self { sample_limit }
    }

    /// Count child rows whose foreign key is set but resolves to no parent
    /// key.
    pub fn count_orphans(
        &self,
        dataset: &SqliteStore,
        relationship: &Relationship,
    ) -> Result<u64, CheckError> {
        let sql = format!("SELECT COUNT(*) {}", orphan_clause(relationship)?);
        let count = dataset.query_count(&sql)?;
        Ok(count.max(0) as u64)
    }

    /// Fetch up to `limit` orphaned foreign-key values, ordered by value so
    /// repeated runs against unchanged data return identical samples.
    pub fn sample_orphans(
        &self,
        dataset: &SqliteStore,
        relationship: &Relationship,
        limit: usize,
    ) -> Result<Vec<KeyValue>, CheckError> {
        let fk = input::quote_identifier(&relationship.foreign_key_column);
        let sql = format!(
            "SELECT child.{fk} {clause} ORDER BY child.{fk} LIMIT {limit}",
            clause = orphan_clause(relationship)?,
        );
        Ok(dataset.query_values(&sql)?)
    }

    /// Run the full check: count orphans, then sample them on failure.
    ///
    /// Sampling is best-effort: if it fails after orphans were found, the
    /// failed verdict stands with empty samples.
    pub fn check(
        &self,
        dataset: &SqliteStore,
        relationship: &Relationship,
    ) -> Result<CheckOutcome, CheckError> {
        let orphan_count = self.count_orphans(dataset, relationship)?;

        if orphan_count == 0 {
            info!("referential integrity check passed for {}", relationship);
            return Ok(CheckOutcome::Passed);
        }

        warn!(
            "referential integrity check failed for {}: {} orphaned foreign keys",
            relationship, orphan_count
        );
        let samples = match self.sample_orphans(dataset, relationship, self.sample_limit) {
            Ok(samples) => samples,
            Err(err) => {
                warn!("sampling orphaned keys failed, reporting without examples: {}", err);
                Vec::new()
            }
        };

        Ok(CheckOutcome::Failed {
            orphan_count,
            samples,
        })
    }
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared FROM/JOIN/WHERE fragment of both orphan queries. The only place
/// identifiers reach SQL text; everything passes the input boundary first.
fn orphan_clause(relationship: &Relationship) -> Result<String, ValidationError> {
    input::validate_relationship(relationship)?;

    let child = input::quote_identifier(&relationship.child_table);
    let fk = input::quote_identifier(&relationship.foreign_key_column);
    let parent = input::quote_identifier(&relationship.parent_table);
    let pk = input::quote_identifier(&relationship.parent_key_column);

    Ok(format!(
        "FROM {child} child LEFT JOIN {parent} parent ON child.{fk} = parent.{pk} \
         WHERE child.{fk} IS NOT NULL AND parent.{pk} IS NULL"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orphan_clause_quotes_every_identifier() {
        let clause = orphan_clause(&Relationship::demo()).unwrap();
        assert!(clause.contains("FROM \"orders\" child"));
        assert!(clause.contains("LEFT JOIN \"customers\" parent"));
        assert!(clause.contains("child.\"customer_id\" IS NOT NULL"));
        assert!(clause.contains("parent.\"id\" IS NULL"));
    }

    #[test]
    fn test_orphan_clause_rejects_malformed_identifier() {
        let relationship = Relationship::new("orders; DROP TABLE x", "customer_id", "customers", "id");
        assert!(matches!(
            orphan_clause(&relationship),
            Err(ValidationError::InvalidCharacters { .. })
        ));
    }
}
