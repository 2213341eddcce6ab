//! Identifier validation and quoting.
//!
//! Table and column names supplied by a caller are interpolated into SQL
//! text, so every identifier passes through this module exactly once:
//! [`validate_identifier`] enforces shape rules and [`quote_identifier`]
//! produces the quoted form that reaches the query string. Identifiers are
//! caller-controlled and trusted; the boundary centralizes interpolation
//! instead of policing callers.

use thiserror::Error;

use crate::models::Relationship;

/// Maximum length for table and column names.
pub const MAX_IDENTIFIER_LENGTH: usize = 255;

/// Errors that can occur during identifier validation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// Input is empty when a value is required
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    /// Input exceeds maximum allowed length
    #[error("{field} exceeds maximum length (max: {max}, got: {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// Input contains invalid characters
    #[error("{field} contains invalid characters: {reason}")]
    InvalidCharacters { field: &'static str, reason: String },

    /// Input has invalid format
    #[error("{0}: {1}")]
    InvalidFormat(&'static str, String),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validate a table or column identifier.
///
/// # Rules
///
/// - Must not be empty
/// - Must not exceed 255 characters
/// - Must start with a letter or underscore
/// - May contain letters, digits, underscores, and hyphens
///
/// Reserved words are allowed: identifiers are always quoted before they
/// reach a query string.
///
/// # Examples
///
/// ```
/// use mask_integrity::validation::input::validate_identifier;
///
/// assert!(validate_identifier("child table", "orders").is_ok());
/// assert!(validate_identifier("child table", "order-items").is_ok());
/// assert!(validate_identifier("child table", "").is_err());
/// assert!(validate_identifier("child table", "123_invalid").is_err());
/// ```
pub fn validate_identifier(field: &'static str, name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Empty(field));
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_IDENTIFIER_LENGTH,
            actual: name.len(),
        });
    }

    // Must start with a letter or underscore
    let first_char = match name.chars().next() {
        Some(c) => c,
        None => return Err(ValidationError::Empty(field)),
    };
    if !first_char.is_alphabetic() && first_char != '_' {
        return Err(ValidationError::InvalidFormat(
            field,
            "must start with a letter or underscore".to_string(),
        ));
    }

    // May contain letters, digits, underscores, and hyphens
    for c in name.chars() {
        if !c.is_alphanumeric() && c != '_' && c != '-' {
            return Err(ValidationError::InvalidCharacters {
                field,
                reason: format!("invalid character: '{}'", c),
            });
        }
    }

    Ok(())
}

/// Validate all four identifiers of a relationship declaration.
pub fn validate_relationship(relationship: &Relationship) -> ValidationResult<()> {
    validate_identifier("child table", &relationship.child_table)?;
    validate_identifier("foreign key column", &relationship.foreign_key_column)?;
    validate_identifier("parent table", &relationship.parent_table)?;
    validate_identifier("parent key column", &relationship.parent_key_column)?;
    Ok(())
}

/// Quote an identifier for interpolation into SQL text.
///
/// Wraps the name in double quotes with embedded quotes doubled, the
/// standard SQL escaping for identifiers.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier_plain() {
        assert_eq!(quote_identifier("orders"), "\"orders\"");
    }

    #[test]
    fn test_quote_identifier_doubles_embedded_quotes() {
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }
}
