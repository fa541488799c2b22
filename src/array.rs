#[cfg(test)]
#[path = "./array_tests.rs"]
mod tests;

use crate::table::Table;
use crate::value::{FromValue, Kind, Value};

/// An array of TOML values.
///
/// A well-formed array is either a *value array* (every element a scalar of
/// one [`Kind`]) or a *nested array* (every element itself an [`Array`],
/// possibly of differing inner kinds). The parser enforces this shape while
/// appending elements; [`push`](Self::push) itself does not re-check it.
#[derive(Clone, PartialEq, Default)]
pub struct Array {
    items: Vec<Value>,
}

impl Array {
    /// Creates an empty array.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the array contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a reference to the element at the given index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Returns a mutable reference to the element at the given index.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Appends a value to the end of the array.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Returns the scalar kind shared by the elements of a value array,
    /// taken from the first element. `None` for empty and nested arrays.
    pub fn scalar_kind(&self) -> Option<Kind> {
        self.items.first().and_then(Value::scalar_kind)
    }

    /// Extracts every element as the scalar type `T`, one `Option` per
    /// element; elements of another kind yield `None`.
    ///
    /// ```
    /// # fn main() -> Result<(), toml_tree::Error> {
    /// let root = toml_tree::parse_str("ports = [ 80, 443 ]")?;
    /// let ports = root.get_array("ports").unwrap();
    /// assert_eq!(ports.values::<i64>(), [Some(80), Some(443)]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn values<T: FromValue>(&self) -> Vec<Option<T>> {
        self.items.iter().map(T::from_value).collect()
    }

    /// Views the elements as arrays, one `Option` per element; non-array
    /// elements yield `None`.
    pub fn nested_arrays(&self) -> Vec<Option<&Array>> {
        self.items.iter().map(Value::as_array).collect()
    }

    /// Returns the contents as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Returns an iterator over references to the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }
}

impl std::fmt::Debug for Array {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// An ordered sequence of tables sharing one path, created by `[[a.b]]`
/// headers or by arrays of inline tables.
#[derive(Clone, PartialEq, Default)]
pub struct TableArray {
    tables: Vec<Table>,
}

impl TableArray {
    /// Creates an empty table array.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Returns the number of tables.
    #[inline]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` if the table array contains no tables.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Returns a reference to the table at the given index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Table> {
        self.tables.get(index)
    }

    /// Returns a mutable reference to the table at the given index.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Table> {
        self.tables.get_mut(index)
    }

    /// Returns a reference to the last table.
    #[inline]
    pub fn last(&self) -> Option<&Table> {
        self.tables.last()
    }

    /// Returns a mutable reference to the last table.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut Table> {
        self.tables.last_mut()
    }

    /// Appends a table to the end of the sequence.
    pub fn push(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Returns an iterator over references to the tables.
    pub fn iter(&self) -> std::slice::Iter<'_, Table> {
        self.tables.iter()
    }
}

impl std::fmt::Debug for TableArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.tables.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a TableArray {
    type Item = &'a Table;
    type IntoIter = std::slice::Iter<'a, Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}

impl IntoIterator for TableArray {
    type Item = Table;
    type IntoIter = std::vec::IntoIter<Table>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.into_iter()
    }
}
