//! Emits a value tree back as TOML text.
//!
//! Direct scalar and array entries of a table print first, one `key = value`
//! assignment per line indented one tab per depth, followed by `[path]`
//! sections for sub-tables and `[[path]]` sections for table arrays. The
//! output re-parses to a structurally equal tree.

#[cfg(test)]
#[path = "./write_tests.rs"]
mod tests;

use crate::array::Array;
use crate::table::Table;
use crate::value::Value;
use std::fmt::{self, Write as _};

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_table(f, self, 0, &mut String::new())
    }
}

fn indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_char('\t')?;
    }
    Ok(())
}

fn write_table(
    f: &mut fmt::Formatter<'_>,
    table: &Table,
    depth: usize,
    path: &mut String,
) -> fmt::Result {
    for (key, value) in table {
        if value.is_table() || value.is_table_array() {
            continue;
        }
        indent(f, depth)?;
        write!(f, "{key} = ")?;
        write_value(f, value)?;
        f.write_char('\n')?;
    }
    for (key, value) in table {
        let Value::Table(sub) = value else { continue };
        let parent_len = path.len();
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(key);
        indent(f, depth)?;
        writeln!(f, "[{path}]")?;
        write_table(f, sub, depth + 1, path)?;
        path.truncate(parent_len);
    }
    for (key, value) in table {
        let Value::TableArray(array) = value else { continue };
        let parent_len = path.len();
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(key);
        for sub in array {
            indent(f, depth)?;
            writeln!(f, "[[{path}]]")?;
            write_table(f, sub, depth + 1, path)?;
        }
        path.truncate(parent_len);
    }
    Ok(())
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::String(s) => write_string(f, s),
        Value::Integer(i) => write!(f, "{i}"),
        Value::Float(v) => write_float(f, *v),
        Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
        Value::DateTime(dt) => write!(f, "{dt}"),
        Value::Array(array) => write_array(f, array),
        // never direct entries; both print as header sections
        Value::Table(..) | Value::TableArray(..) => Ok(()),
    }
}

fn write_array(f: &mut fmt::Formatter<'_>, array: &Array) -> fmt::Result {
    f.write_str("[ ")?;
    let mut first = true;
    for value in array {
        if !first {
            f.write_str(", ")?;
        }
        first = false;
        write_value(f, value)?;
    }
    f.write_str(" ]")
}

fn write_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            '\n' => f.write_str("\\n")?,
            _ => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

/// Floats print in shortest round-trip form, with a `.0` appended when the
/// digits alone would re-parse as an integer.
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let text = value.to_string();
    if text.bytes().any(|b| matches!(b, b'.' | b'e' | b'E')) {
        f.write_str(&text)
    } else {
        write!(f, "{text}.0")
    }
}
