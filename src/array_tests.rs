use super::*;
use crate::value::{Kind, Value};

#[test]
fn array_basics() {
    let mut array = Array::new();
    assert!(array.is_empty());
    array.push(1i64);
    array.push(2i64);
    array.push(3i64);
    assert_eq!(array.len(), 3);
    assert_eq!(array.get(0).unwrap().as_integer(), Some(1));
    assert_eq!(array.get(2).unwrap().as_integer(), Some(3));
    assert!(array.get(3).is_none());
    assert_eq!(array.scalar_kind(), Some(Kind::Integer));

    let collected: Vec<i64> = array.iter().filter_map(Value::as_integer).collect();
    assert_eq!(collected, [1, 2, 3]);
}

#[test]
fn bulk_typed_views() {
    let root = crate::parse_str("a = [1, 2, 3]").unwrap();
    let array = root.get_array("a").unwrap();
    assert_eq!(array.values::<i64>(), [Some(1), Some(2), Some(3)]);
    // the wrong kind yields one None per element
    assert_eq!(array.values::<String>(), [None, None, None]);

    // a hand-built mixed array reports absence element-wise
    let mut mixed = Array::new();
    mixed.push(1i64);
    mixed.push("x");
    assert_eq!(mixed.values::<i64>(), [Some(1), None]);
    assert_eq!(mixed.values::<String>(), [None, Some("x".to_string())]);
}

#[test]
fn nested_array_views() {
    let root = crate::parse_str("a = [[1, 2], [\"x\"]]").unwrap();
    let array = root.get_array("a").unwrap();
    let nested = array.nested_arrays();
    assert_eq!(nested.len(), 2);
    assert_eq!(nested[0].unwrap().len(), 2);
    assert_eq!(nested[1].unwrap().scalar_kind(), Some(Kind::String));

    let root = crate::parse_str("a = [1, 2]").unwrap();
    let flat = root.get_array("a").unwrap();
    assert_eq!(flat.nested_arrays(), [None, None]);
}

#[test]
fn table_array_basics() {
    let mut tables = TableArray::new();
    assert!(tables.is_empty());
    assert!(tables.last().is_none());

    let mut first = Table::new();
    first.insert("x", 1i64);
    tables.push(first);
    tables.push(Table::new());
    assert_eq!(tables.len(), 2);
    assert_eq!(tables.get(0).unwrap().get_as::<i64>("x"), Some(1));

    tables.last_mut().unwrap().insert("x", 2i64);
    assert_eq!(tables.get(1).unwrap().get_as::<i64>("x"), Some(2));

    let lens: Vec<usize> = tables.iter().map(Table::len).collect();
    assert_eq!(lens, [1, 1]);
}
