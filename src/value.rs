//! The [`Value`] sum type: a tagged tree of TOML values.

use crate::time::DateTime;
use std::fmt;

/// A toml array
pub use crate::array::Array;
/// An ordered sequence of tables created by `[[header]]` sections
pub use crate::array::TableArray;
/// A toml table: string keys mapped to values in insertion order
pub use crate::table::Table;

/// The concrete type of a scalar [`Value`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Kind {
    String,
    Integer,
    Float,
    Boolean,
    DateTime,
}

/// A parsed TOML value.
///
/// Scalars carry their data directly; [`Array`], [`Table`], and
/// [`TableArray`] own their children exclusively. A value array holds
/// scalars of a single [`Kind`] or nothing but arrays; tables never appear
/// inside an [`Array`].
#[derive(Clone, PartialEq)]
pub enum Value {
    /// A string
    String(String),
    /// An integer
    Integer(i64),
    /// A float
    Float(f64),
    /// A boolean
    Boolean(bool),
    /// A datetime
    DateTime(DateTime),
    /// An array
    Array(Array),
    /// A table
    Table(Table),
    /// An array of tables
    TableArray(TableArray),
}

impl Value {
    /// Returns `true` for the five scalar kinds.
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.scalar_kind().is_some()
    }

    /// Returns `true` if this value is an array.
    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if this value is a table.
    #[inline]
    pub fn is_table(&self) -> bool {
        matches!(self, Self::Table(..))
    }

    /// Returns `true` if this value is an array of tables.
    #[inline]
    pub fn is_table_array(&self) -> bool {
        matches!(self, Self::TableArray(..))
    }

    /// Returns the scalar [`Kind`], or `None` for arrays and tables.
    pub fn scalar_kind(&self) -> Option<Kind> {
        match self {
            Self::String(..) => Some(Kind::String),
            Self::Integer(..) => Some(Kind::Integer),
            Self::Float(..) => Some(Kind::Float),
            Self::Boolean(..) => Some(Kind::Boolean),
            Self::DateTime(..) => Some(Kind::DateTime),
            _ => None,
        }
    }

    /// Gets the type of the value as a string.
    pub fn type_str(&self) -> &'static str {
        match self {
            Self::String(..) => "string",
            Self::Integer(..) => "integer",
            Self::Float(..) => "float",
            Self::Boolean(..) => "boolean",
            Self::DateTime(..) => "datetime",
            Self::Array(..) => "array",
            Self::Table(..) => "table",
            Self::TableArray(..) => "table-array",
        }
    }
}

impl Value {
    /// Returns a borrowed string if this is a string value.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns an `i64` if this is an integer value.
    #[inline]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns an `f64` if this is a float value.
    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns a `bool` if this is a boolean value.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the datetime if this is a datetime value.
    #[inline]
    pub fn as_datetime(&self) -> Option<DateTime> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Returns a borrowed array if this is an array value.
    #[inline]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a borrowed table if this is a table value.
    #[inline]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Returns a borrowed table array if this is a table-array value.
    #[inline]
    pub fn as_table_array(&self) -> Option<&TableArray> {
        match self {
            Self::TableArray(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a mutable array reference.
    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a mutable table reference.
    #[inline]
    pub fn as_table_mut(&mut self) -> Option<&mut Table> {
        match self {
            Self::Table(t) => Some(t),
            _ => None,
        }
    }

    /// Returns a mutable table-array reference.
    #[inline]
    pub fn as_table_array_mut(&mut self) -> Option<&mut TableArray> {
        match self {
            Self::TableArray(a) => Some(a),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => s.fmt(f),
            Self::Integer(i) => i.fmt(f),
            Self::Float(v) => v.fmt(f),
            Self::Boolean(b) => b.fmt(f),
            Self::DateTime(dt) => dt.fmt(f),
            Self::Array(a) => a.fmt(f),
            Self::Table(t) => t.fmt(f),
            Self::TableArray(a) => a.fmt(f),
        }
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<DateTime> for Value {
    fn from(v: DateTime) -> Self {
        Self::DateTime(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Table> for Value {
    fn from(v: Table) -> Self {
        Self::Table(v)
    }
}

impl From<TableArray> for Value {
    fn from(v: TableArray) -> Self {
        Self::TableArray(v)
    }
}

/// Scalar extraction used by [`Table::get_as`](crate::Table::get_as) and
/// [`Array::values`](crate::Array::values).
pub trait FromValue: Sized {
    /// Extracts `Self` from a value of the matching scalar kind.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_integer()
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_float()
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FromValue for DateTime {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_datetime()
    }
}

#[cfg(test)]
#[path = "./value_tests.rs"]
mod tests;
