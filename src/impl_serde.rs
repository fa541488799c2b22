//! Serde serialization support for the value tree.
//!
//! Enabled by the `serde` feature flag. This provides [`serde::Serialize`]
//! implementations only; deserialization goes through the parser.

use crate::array::{Array, TableArray};
use crate::table::Table;
use crate::time::DateTime;
use crate::value::Value;
use serde::ser::{SerializeMap, SerializeSeq};

impl serde::Serialize for Value {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Value::String(s) => ser.serialize_str(s),
            Value::Integer(i) => ser.serialize_i64(*i),
            Value::Float(v) => ser.serialize_f64(*v),
            Value::Boolean(b) => ser.serialize_bool(*b),
            Value::DateTime(dt) => dt.serialize(ser),
            Value::Array(array) => array.serialize(ser),
            Value::Table(table) => table.serialize(ser),
            Value::TableArray(array) => array.serialize(ser),
        }
    }
}

impl serde::Serialize for Table {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = ser.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl serde::Serialize for Array {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = ser.serialize_seq(Some(self.len()))?;
        for value in self {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl serde::Serialize for TableArray {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut seq = ser.serialize_seq(Some(self.len()))?;
        for table in self {
            seq.serialize_element(table)?;
        }
        seq.end()
    }
}

impl serde::Serialize for DateTime {
    fn serialize<S>(&self, ser: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ser.collect_str(self)
    }
}
