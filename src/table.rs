#[cfg(test)]
#[path = "./table_tests.rs"]
mod tests;

use crate::array::{Array, TableArray};
use crate::value::{FromValue, Value};
use indexmap::IndexMap;

/// A TOML table: string keys mapped to values.
///
/// Entries iterate in insertion order. The parser enforces key uniqueness;
/// [`insert`](Self::insert) replaces an existing entry like a plain map.
#[derive(Clone, PartialEq, Default)]
pub struct Table {
    entries: IndexMap<String, Value>,
}

impl Table {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the table contains the key.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns `true` if the dotted path `a.b.c` resolves to an entry,
    /// walking tables only.
    pub fn contains_qualified(&self, key: &str) -> bool {
        self.get_qualified(key).is_some()
    }

    /// Returns a reference to the value for `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Resolves a dotted path like `grandparent.parent.child`.
    ///
    /// Every intermediate component must name a table; the lookup fails if
    /// one is missing or holds any other value shape. Components are split
    /// on `.` with no escaping.
    ///
    /// ```
    /// # fn main() -> Result<(), toml_tree::Error> {
    /// let root = toml_tree::parse_str("[owner.contact]\nname = \"Tom\"")?;
    /// let name = root.get_qualified("owner.contact.name");
    /// assert_eq!(name.and_then(|v| v.as_str()), Some("Tom"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_qualified(&self, key: &str) -> Option<&Value> {
        let (path, last) = match key.rfind('.') {
            Some(dot) => (&key[..dot], &key[dot + 1..]),
            None => return self.get(key),
        };
        let mut table = self;
        for part in path.split('.') {
            table = table.get_table(part)?;
        }
        table.get(last)
    }

    /// Returns the table stored under `key`, if any.
    pub fn get_table(&self, key: &str) -> Option<&Table> {
        self.get(key).and_then(Value::as_table)
    }

    /// Returns the array stored under `key`, if any.
    pub fn get_array(&self, key: &str) -> Option<&Array> {
        self.get(key).and_then(Value::as_array)
    }

    /// Returns the table array stored under `key`, if any.
    pub fn get_table_array(&self, key: &str) -> Option<&TableArray> {
        self.get(key).and_then(Value::as_table_array)
    }

    /// [`get_table`](Self::get_table) through a dotted path.
    pub fn get_table_qualified(&self, key: &str) -> Option<&Table> {
        self.get_qualified(key).and_then(Value::as_table)
    }

    /// [`get_array`](Self::get_array) through a dotted path.
    pub fn get_array_qualified(&self, key: &str) -> Option<&Array> {
        self.get_qualified(key).and_then(Value::as_array)
    }

    /// [`get_table_array`](Self::get_table_array) through a dotted path.
    pub fn get_table_array_qualified(&self, key: &str) -> Option<&TableArray> {
        self.get_qualified(key).and_then(Value::as_table_array)
    }

    /// Extracts the value for `key` as a concrete scalar type.
    ///
    /// Yields `None` when the key is absent or the value is of another kind.
    ///
    /// ```
    /// # fn main() -> Result<(), toml_tree::Error> {
    /// let root = toml_tree::parse_str("port = 80")?;
    /// assert_eq!(root.get_as::<i64>("port"), Some(80));
    /// assert_eq!(root.get_as::<bool>("port"), None);
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_as<T: FromValue>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(T::from_value)
    }

    /// [`get_as`](Self::get_as) through a dotted path.
    pub fn get_qualified_as<T: FromValue>(&self, key: &str) -> Option<T> {
        self.get_qualified(key).and_then(T::from_value)
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes the entry for `key`, preserving the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Returns an iterator over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.entries.keys()
    }

    /// Returns `true` if any entry is a scalar or an array, i.e. the table
    /// holds user-written assignments rather than only sub-tables.
    pub(crate) fn has_direct_values(&self) -> bool {
        self.entries
            .values()
            .any(|v| v.is_scalar() || v.is_array())
    }

    /// Returns the entry for `key`, inserting an empty table when vacant.
    pub(crate) fn entry_or_insert_table(&mut self, key: &str) -> &mut Value {
        self.entries
            .entry(key.to_string())
            .or_insert_with(|| Value::Table(Table::new()))
    }

    /// Returns the entry for `key`, inserting an empty table array when vacant.
    pub(crate) fn entry_or_insert_table_array(&mut self, key: &str) -> &mut Value {
        self.entries
            .entry(key.to_string())
            .or_insert_with(|| Value::TableArray(TableArray::new()))
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Table {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
