//! One-shot catalog loading: read the source JSON, pick out the row list,
//! normalize every row. Failures come back as typed errors; callers decide
//! whether to fall back to an empty catalog and keep serving.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::data::normalize::normalize_record;
use crate::data::record::DatasetRecord;

pub const DEFAULT_DATA_PATH: &str = "data/datasets.json";
pub const DATA_PATH_ENV: &str = "DATASHELF_DATA";

/// Source path from DATASHELF_DATA, else the repo default.
pub fn data_path_from_env() -> PathBuf {
    std::env::var(DATA_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH))
}

#[derive(Debug)]
pub enum LoadError {
    Missing(PathBuf),
    Io(io::Error),
    Parse(serde_json::Error),
    Shape(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(path) => write!(f, "data file not found: {}", path.display()),
            Self::Io(err) => write!(f, "failed to read data file: {err}"),
            Self::Parse(err) => write!(f, "invalid JSON in data file: {err}"),
            Self::Shape(detail) => write!(f, "unexpected data layout: {detail}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Raw rows from the source document. Accepts either a bare top-level array
/// or an object carrying the array under "rows".
pub fn read_rows(path: &Path) -> Result<Vec<Value>, LoadError> {
    if !path.exists() {
        return Err(LoadError::Missing(path.to_path_buf()));
    }
    let data = fs::read_to_string(path).map_err(LoadError::Io)?;
    let document: Value = serde_json::from_str(&data).map_err(LoadError::Parse)?;
    match document {
        Value::Array(rows) => Ok(rows),
        Value::Object(mut map) => match map.remove("rows") {
            Some(Value::Array(rows)) => Ok(rows),
            Some(_) => Err(LoadError::Shape("'rows' is not an array".to_string())),
            None => Err(LoadError::Shape(
                "top-level object has no 'rows' array".to_string(),
            )),
        },
        _ => Err(LoadError::Shape(
            "top-level value is neither an array nor an object".to_string(),
        )),
    }
}

/// Load and normalize the full catalog, preserving source order.
/// Re-callable at any time to force a fresh read from disk.
pub fn load_catalog(path: &Path) -> Result<Vec<DatasetRecord>, LoadError> {
    let rows = read_rows(path)?;
    let mut records = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        match row {
            Value::Object(raw) => records.push(normalize_record(&raw)),
            _ => return Err(LoadError::Shape(format!("row {index} is not an object"))),
        }
    }
    Ok(records)
}

/// Degraded-mode wrapper: any load failure is logged to stderr and served as
/// an empty catalog, so the process keeps answering health checks.
pub fn load_catalog_or_empty(path: &Path) -> Vec<DatasetRecord> {
    match load_catalog(path) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("catalog load failed, serving empty catalog: {err}");
            Vec::new()
        }
    }
}
