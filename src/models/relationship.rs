//! Relationship declaration model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A declared foreign-key relationship: `child.fk` must resolve to
/// `parent.pk`.
///
/// The four identifiers are caller-supplied and are never checked against
/// the live schema; a declaration naming a missing table or column surfaces
/// as a query failure at check time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Child table holding the foreign key.
    pub child_table: String,
    /// Foreign-key column in the child table.
    pub foreign_key_column: String,
    /// Parent table referenced by the foreign key.
    pub parent_table: String,
    /// Key column in the parent table.
    pub parent_key_column: String,
}

impl Relationship {
    pub fn new(
        child_table: impl Into<String>,
        foreign_key_column: impl Into<String>,
        parent_table: impl Into<String>,
        parent_key_column: impl Into<String>,
    ) -> Self {
        Self {
            child_table: child_table.into(),
            foreign_key_column: foreign_key_column.into(),
            parent_table: parent_table.into(),
            parent_key_column: parent_key_column.into(),
        }
    }

    /// The relationship seeded by the demo fixtures:
    /// `orders.customer_id` references `customers.id`.
    pub fn demo() -> Self {
        Self::new("orders", "customer_id", "customers", "id")
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} -> {}.{}",
            self.child_table, self.foreign_key_column, self.parent_table, self.parent_key_column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_all_four_identifiers() {
        let relationship = Relationship::new("orders", "customer_id", "customers", "id");
        assert_eq!(
            relationship.to_string(),
            "orders.customer_id -> customers.id"
        );
    }

    #[test]
    fn test_demo_matches_fixture_schema() {
        let demo = Relationship::demo();
        assert_eq!(demo.child_table, "orders");
        assert_eq!(demo.parent_table, "customers");
    }
}
