//! Column types, type and rename maps, and the delimiter token.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{ExportError, Result};
use crate::registry;

/// Type token meaning "auto-increment integer primary key".
pub const AUTO_INCREMENT_TOKEN: &str = "PRIMARY";

/// Column storage types supported by the Access engine, plus the
/// auto-increment sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessType {
    Bit,
    Byte,
    Short,
    Long,
    Currency,
    Single,
    Double,
    DateTime,
    Text,
    Memo,
    /// Engine-generated primary key. Never present in staged data.
    AutoIncrement,
}

impl AccessType {
    /// All supported types in declaration order.
    pub const ALL: [AccessType; 11] = [
        AccessType::Bit,
        AccessType::Byte,
        AccessType::Short,
        AccessType::Long,
        AccessType::Currency,
        AccessType::Single,
        AccessType::Double,
        AccessType::DateTime,
        AccessType::Text,
        AccessType::Memo,
        AccessType::AutoIncrement,
    ];

    /// Uppercase token as accepted on input.
    pub fn token(&self) -> &'static str {
        match self {
            AccessType::Bit => "BIT",
            AccessType::Byte => "BYTE",
            AccessType::Short => "SHORT",
            AccessType::Long => "LONG",
            AccessType::Currency => "CURRENCY",
            AccessType::Single => "SINGLE",
            AccessType::Double => "DOUBLE",
            AccessType::DateTime => "DATETIME",
            AccessType::Text => "TEXT",
            AccessType::Memo => "MEMO",
            AccessType::AutoIncrement => AUTO_INCREMENT_TOKEN,
        }
    }

    /// Type clause for `CREATE TABLE`.
    pub fn keyword(&self) -> &'static str {
        match self {
            AccessType::AutoIncrement => "AUTOINCREMENT PRIMARY KEY",
            other => other.token(),
        }
    }

    /// Title-cased type name for a `schema.ini` column declaration.
    ///
    /// The text driver has no auto-increment type, so the sentinel is read
    /// as text there; the destination table assigns the real values.
    pub fn descriptor_name(&self) -> &'static str {
        match self {
            AccessType::Bit => "Bit",
            AccessType::Byte => "Byte",
            AccessType::Short => "Short",
            AccessType::Long => "Long",
            AccessType::Currency => "Currency",
            AccessType::Single => "Single",
            AccessType::Double => "Double",
            AccessType::DateTime => "Datetime",
            AccessType::Text | AccessType::AutoIncrement => "Text",
            AccessType::Memo => "Memo",
        }
    }

    pub fn is_auto_increment(&self) -> bool {
        matches!(self, AccessType::AutoIncrement)
    }
}

impl Default for AccessType {
    fn default() -> Self {
        AccessType::Text
    }
}

impl FromStr for AccessType {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.to_uppercase();
        AccessType::ALL
            .iter()
            .find(|t| t.token() == normalized)
            .copied()
            .ok_or(ExportError::DataTypeNotFound(normalized))
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Declared type tokens keyed by source column name.
///
/// Tokens are kept as written and resolved on use, so an unsupported token
/// surfaces as [`ExportError::DataTypeNotFound`] at the point the column is
/// processed. Columns without an entry are text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeMap(HashMap<String, String>);

impl TypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, column: impl Into<String>, token: impl Into<String>) -> Self {
        self.insert(column, token);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, token: impl Into<String>) {
        self.0.insert(column.into(), token.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve the type of a source column.
    pub fn resolve(&self, column: &str) -> Result<AccessType> {
        match self.0.get(column) {
            Some(token) => token.parse(),
            None => Ok(AccessType::Text),
        }
    }

    /// Check every declared token without reference to any column list.
    pub fn validate(&self) -> Result<()> {
        for token in self.0.values() {
            token.parse::<AccessType>()?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TypeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Destination column names keyed by source column name.
///
/// When a non-empty map is in effect, source columns missing from it are
/// left out of the destination table entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMap(HashMap<String, String>);

impl ColumnMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: impl Into<String>, destination: impl Into<String>) -> Self {
        self.insert(source, destination);
        self
    }

    pub fn insert(&mut self, source: impl Into<String>, destination: impl Into<String>) {
        self.0.insert(source.into(), destination.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, source: &str) -> Option<&str> {
        self.0.get(source).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ColumnMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Field delimiter of a staging text file.
///
/// Holds the token as given. A tab may be spelled as a literal tab or as
/// the escape `\t`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Delimiter(String);

impl Delimiter {
    pub fn comma() -> Self {
        Self(",".to_string())
    }

    pub fn tab() -> Self {
        Self("\t".to_string())
    }

    /// The token as configured.
    pub fn token(&self) -> &str {
        &self.0
    }

    /// `Format=` keyword for the descriptor and the inline text reference.
    pub fn keyword(&self) -> String {
        registry::text_format(&self.0)
    }

    /// The characters that actually separate fields in the file.
    pub fn separator(&self) -> &str {
        if registry::is_tab(&self.0) {
            "\t"
        } else {
            &self.0
        }
    }

    /// Single-byte form needed to write a staging file.
    pub fn as_byte(&self) -> Result<u8> {
        match self.separator().as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(ExportError::Config(format!(
                "delimiter {:?} must be a single ASCII character to write a staging file",
                self.0
            ))),
        }
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::comma()
    }
}

impl FromStr for Delimiter {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(ExportError::Config("delimiter cannot be empty".to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
