//! Identifier validation and quoting for generated Access SQL.
//!
//! Table and column names cannot be bound as parameters, so every name that
//! ends up in a `CREATE TABLE` or `INSERT ... SELECT` statement passes
//! through [`quote_access`]. Access has no escape sequence for the backtick
//! inside a quoted name, so names containing one are rejected outright.

use crate::error::{ExportError, Result};

/// Maximum identifier length accepted by the Access engine.
pub const MAX_IDENTIFIER_LENGTH: usize = 64;

/// Validate an identifier before it is embedded in SQL.
///
/// Rejects:
/// - Empty identifiers
/// - Identifiers containing null bytes
/// - Identifiers containing backticks
/// - Identifiers longer than [`MAX_IDENTIFIER_LENGTH`] characters
///
/// # Errors
///
/// Returns `ExportError::Config` with a descriptive message.
pub fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ExportError::Config(
            "Identifier cannot be empty".to_string(),
        ));
    }

    if name.contains('\0') {
        return Err(ExportError::Config(format!(
            "Identifier contains null byte: {:?}",
            name
        )));
    }

    if name.contains('`') {
        return Err(ExportError::Config(format!(
            "Identifier contains a backtick, which Access cannot quote: {:?}",
            name
        )));
    }

    let length = name.chars().count();
    if length > MAX_IDENTIFIER_LENGTH {
        return Err(ExportError::Config(format!(
            "Identifier exceeds maximum length of {} characters (got {}): {:?}",
            MAX_IDENTIFIER_LENGTH, length, name
        )));
    }

    Ok(())
}

/// Quote an Access identifier using backticks.
///
/// # Examples
///
/// ```
/// use access_export::core::identifier::quote_access;
///
/// assert_eq!(quote_access("Order Date").unwrap(), "`Order Date`");
/// assert!(quote_access("bad`name").is_err());
/// ```
pub fn quote_access(name: &str) -> Result<String> {
    validate_identifier(name)?;
    Ok(format!("`{}`", name))
}

/// Quote a list of identifiers and join them with commas.
pub fn quote_list<'a, I>(names: I) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let quoted = names
        .into_iter()
        .map(quote_access)
        .collect::<Result<Vec<_>>>()?;
    Ok(quoted.join(", "))
}
