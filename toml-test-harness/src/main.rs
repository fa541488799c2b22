//! Conformance driver: reads TOML on stdin and prints a JSON document where
//! every scalar leaf is tagged with its TOML type. Exits 1 with a one-line
//! diagnostic on stderr when the parse fails.

use serde_json::{json, Map, Value as Json};
use std::io::Read;
use toml_tree::{Table, Value};

fn scalar_to_json(kind: &str, value: String) -> Json {
    json!({ "type": kind, "value": value })
}

fn value_to_json(value: &Value) -> Json {
    match value {
        Value::String(s) => scalar_to_json("string", s.clone()),
        Value::Integer(i) => scalar_to_json("integer", i.to_string()),
        Value::Float(v) => scalar_to_json("float", v.to_string()),
        Value::Boolean(b) => scalar_to_json("bool", b.to_string()),
        Value::DateTime(dt) => scalar_to_json("datetime", dt.to_string()),
        Value::Array(array) => json!({
            "type": "array",
            "value": array.iter().map(value_to_json).collect::<Vec<_>>(),
        }),
        Value::Table(table) => table_to_json(table),
        Value::TableArray(array) => Json::Array(array.iter().map(table_to_json).collect()),
    }
}

fn table_to_json(table: &Table) -> Json {
    let mut map = Map::new();
    for (key, value) in table {
        map.insert(key.clone(), value_to_json(value));
    }
    Json::Object(map)
}

fn main() {
    let mut input = String::new();
    if std::io::stdin().read_to_string(&mut input).is_err() {
        std::process::exit(1);
    }
    match toml_tree::parse_str(&input) {
        Ok(root) => println!("{}", table_to_json(&root)),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
