//! JSON persistence for metrics, scores and other small mappings.

use std::fs;

use camino::Utf8Path;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use crate::config::into_box;
use crate::error::{Error, Result};
use crate::fsops::read_text;
use crate::mapping::ConfigBox;

const INDENT: &[u8] = b"    ";

/// Write `data` to `path` as JSON indented with four spaces.
pub fn save_json<T>(path: impl AsRef<Utf8Path>, data: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let path = path.as_ref();
    let rendered = to_pretty_json(data)?;
    fs::write(path, rendered)?;
    info!("JSON file saved at: {}", path);
    Ok(())
}

/// Read a JSON object from `path`.
pub fn load_json(path: impl AsRef<Utf8Path>) -> Result<ConfigBox> {
    let path = path.as_ref();
    let value = parse_file(path)?;
    let config = into_box(path, value)?;
    info!("JSON file loaded successfully from: {}", path);
    Ok(config)
}

/// Read any JSON document from `path` into `T`.
pub fn load_json_as<T: DeserializeOwned>(path: impl AsRef<Utf8Path>) -> Result<T> {
    let path = path.as_ref();
    let value = parse_file(path)?;
    let data = serde_json::from_value(value)?;
    info!("JSON file loaded successfully from: {}", path);
    Ok(data)
}

fn parse_file(path: &Utf8Path) -> Result<Value> {
    let raw = read_text(path)?;
    if raw.trim().is_empty() {
        return Err(Error::format(path, "file is empty"));
    }
    serde_json::from_str(&raw).map_err(|err| Error::format(path, err.to_string()))
}

/// Render `data` as JSON indented with four spaces.
pub fn to_pretty_json<T>(data: &T) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    data.serialize(&mut ser)?;
    Ok(out)
}
