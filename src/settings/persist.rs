//! Merging generated settings into files on disk

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Overwrite `base`'s top-level keys with those of `overlay`.
///
/// Nested objects are replaced whole, never merged.
pub fn shallow_merge(base: &mut Map<String, Value>, overlay: &Map<String, Value>) {
    for (key, value) in overlay {
        base.insert(key.clone(), value.clone());
    }
}

/// Merge `generated` into the JSON object stored at `target` and write it back.
///
/// A missing file is treated as an empty object, so the result is exactly
/// `generated`. Keys only present on disk survive unchanged. Returns the
/// mapping that was written.
pub fn merge_and_persist(target: &Path, generated: &Map<String, Value>) -> Result<Map<String, Value>> {
    let mut merged = match read_object(target)? {
        Some(existing) => {
            tracing::debug!("Merging into existing {}", target.display());
            existing
        }
        None => Map::new(),
    };
    shallow_merge(&mut merged, generated);

    write_json_atomic(target, &merged)?;
    Ok(merged)
}

/// Read a JSON object from `path`, `None` if the file does not exist
fn read_object(path: &Path) -> Result<Option<Map<String, Value>>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let value: Value = serde_json::from_str(&content)?;
    match value {
        Value::Object(map) => Ok(Some(map)),
        _ => Err(Error::SettingsNotObject(path.to_path_buf())),
    }
}

/// Serialize with four-space indentation
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `value` as indented JSON to `path`, replacing it atomically.
///
/// The document is written to a sibling `.tmp` file and renamed over the
/// target, so readers never observe a half-written file.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let serialized = to_pretty_json(value)?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, &serialized)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
