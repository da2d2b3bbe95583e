//! A driver-neutral scan/bind contract.
//!
//! Database drivers disagree about how a column value is handed over: some return text, some
//! raw bytes. [`SqlValue`] covers the representations a driver can produce, and [`Scan`] and
//! [`Bind`] convert between it and application values.

use crate::error::Result;

/// A single column value as exchanged with a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl SqlValue {
    /// Short name of the representation, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Bool(_) => "bool",
            SqlValue::Int(_) => "int",
            SqlValue::Float(_) => "float",
            SqlValue::Text(_) => "text",
            SqlValue::Bytes(_) => "bytes",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(value: Vec<u8>) -> Self {
        SqlValue::Bytes(value)
    }
}

impl From<&[u8]> for SqlValue {
    fn from(value: &[u8]) -> Self {
        SqlValue::Bytes(value.to_vec())
    }
}

impl<V: Into<SqlValue>> From<Option<V>> for SqlValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(SqlValue::Null, Into::into)
    }
}

/// Load an application value from a column value.
pub trait Scan {
    /// Replace `self` with the decoded value.
    ///
    /// On error `self` is left untouched.
    fn scan(&mut self, value: SqlValue) -> Result<()>;
}

/// Convert an application value into a column value.
pub trait Bind {
    fn bind(&self) -> Result<SqlValue>;
}
