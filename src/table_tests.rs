use super::*;
use crate::value::Value;

fn sample() -> Table {
    crate::parse_str(
        "title = \"demo\"\nports = [ 80, 443 ]\n[server]\nhost = \"localhost\"\n\
         [server.limits]\nmax = 10\n[[points]]\nx = 1\n[[points]]\nx = 2",
    )
    .unwrap()
}

#[test]
fn direct_access() {
    let root = sample();
    assert_eq!(root.len(), 4);
    assert!(root.contains_key("title"));
    assert!(!root.contains_key("missing"));
    assert_eq!(root.get("title").unwrap().as_str(), Some("demo"));
    assert!(root.get("missing").is_none());
}

#[test]
fn qualified_access_is_consistent_with_chained_gets() {
    let root = sample();
    let chained = root
        .get("server")
        .and_then(Value::as_table)
        .and_then(|t| t.get("limits"))
        .and_then(Value::as_table)
        .and_then(|t| t.get("max"));
    assert_eq!(root.get_qualified("server.limits.max"), chained);
    assert_eq!(root.get_qualified_as::<i64>("server.limits.max"), Some(10));

    assert!(root.contains_qualified("server.host"));
    assert!(!root.contains_qualified("server.nope"));
    assert!(!root.contains_qualified("nope.host"));

    // intermediates must be tables
    assert!(root.get_qualified("title.x").is_none());
    // the public dotted get never walks through table arrays
    assert!(root.get_qualified("points.x").is_none());
}

#[test]
fn typed_getters() {
    let root = sample();
    assert!(root.get_table("server").is_some());
    assert!(root.get_table("title").is_none());
    assert!(root.get_array("ports").is_some());
    assert!(root.get_array("server").is_none());
    assert!(root.get_table_array("points").is_some());
    assert!(root.get_table_array("ports").is_none());

    assert!(root.get_table_qualified("server.limits").is_some());
    assert!(root.get_array_qualified("ports").is_some());
    assert!(root.get_table_array_qualified("points").is_some());
}

#[test]
fn typed_extraction() {
    let root = sample();
    assert_eq!(root.get_as::<String>("title").as_deref(), Some("demo"));
    assert_eq!(root.get_as::<i64>("title"), None);
    assert_eq!(root.get_as::<i64>("missing"), None);
    assert_eq!(
        root.get_qualified_as::<String>("server.host").as_deref(),
        Some("localhost")
    );
}

#[test]
fn insertion_and_removal() {
    let mut table = Table::new();
    assert!(table.insert("a", 1i64).is_none());
    assert!(table.insert("b", "two").is_none());
    assert_eq!(table.insert("a", 3i64), Some(Value::Integer(1)));
    assert_eq!(table.get_as::<i64>("a"), Some(3));

    assert_eq!(table.remove("b"), Some(Value::String("two".to_string())));
    assert_eq!(table.remove("b"), None);
    assert_eq!(table.len(), 1);
}

#[test]
fn iteration_follows_insertion_order() {
    let mut table = Table::new();
    table.insert("z", 1i64);
    table.insert("a", 2i64);
    table.insert("m", 3i64);
    let keys: Vec<&String> = table.keys().collect();
    assert_eq!(keys, ["z", "a", "m"]);

    let pairs: Vec<(&String, i64)> = table
        .iter()
        .map(|(k, v)| (k, v.as_integer().unwrap()))
        .collect();
    assert_eq!(pairs.len(), 3);
    assert_eq!(*pairs[0].0, "z");
    assert_eq!(pairs[2].1, 3);
}
