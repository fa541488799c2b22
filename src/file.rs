//! File front end: load documents from disk and layer an override document
//! on top of a base.

#[cfg(test)]
#[path = "./file_tests.rs"]
mod tests;

use crate::error::{Error, ErrorKind};
use crate::parser;
use crate::table::Table;
use crate::value::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Opens `path` and parses it as a TOML document.
///
/// A failure to open the file surfaces as the `io` error kind with the file
/// name prefixed to the message.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Table, Error> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            return Err(Error::without_position(ErrorKind::Io(format!(
                "{}: {e}",
                path.display()
            ))));
        }
    };
    parser::parse(BufReader::new(file))
}

/// Parses `base_path` and `override_path` and merges the override on top of
/// the base. See [`merge`] for the merge rules.
pub fn parse_base_and_override<P: AsRef<Path>>(
    base_path: P,
    override_path: P,
    allow_additions: bool,
) -> Result<Table, Error> {
    let mut base = parse_file(base_path)?;
    let overlay = parse_file(override_path)?;
    merge(&mut base, overlay, allow_additions)?;
    Ok(base)
}

/// Recursively merges `overlay` into `base`.
///
/// Tables merge key by key; scalars, arrays, and table arrays replace their
/// counterpart wholesale (arrays are never merged element-wise). A key whose
/// two sides have different shapes fails with *merge-conflict*, as does an
/// overlay-only key when `allow_additions` is `false`: the override may then
/// only refine what the base already declares.
pub fn merge(base: &mut Table, overlay: Table, allow_additions: bool) -> Result<(), Error> {
    for (key, value) in overlay {
        match base.get_mut(&key) {
            None => {
                if !allow_additions {
                    return Err(Error::without_position(ErrorKind::MergeConflict(key)));
                }
                base.insert(key, value);
            }
            Some(slot) => match value {
                Value::Table(overlay_sub) => match slot {
                    Value::Table(base_sub) => merge(base_sub, overlay_sub, allow_additions)?,
                    _ => {
                        return Err(Error::without_position(ErrorKind::MergeConflict(key)));
                    }
                },
                value => {
                    let compatible = match (&*slot, &value) {
                        (Value::Array(..), Value::Array(..)) => true,
                        (Value::TableArray(..), Value::TableArray(..)) => true,
                        (base_value, overlay_value) => {
                            base_value.is_scalar() && overlay_value.is_scalar()
                        }
                    };
                    if !compatible {
                        return Err(Error::without_position(ErrorKind::MergeConflict(key)));
                    }
                    *slot = value;
                }
            },
        }
    }
    Ok(())
}
