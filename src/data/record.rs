//! Normalized dataset record (DATASHELF schema). Canonical fields are always
//! present with stable types; every other raw field passes through unchanged,
//! so a serialized record is a superset of the raw row it came from.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw fields rewritten during normalization. Fallback sources
/// (`homepage_url`, `release_date`) stay in the pass-through map untouched.
pub const CANONICAL_FIELDS: [&str; 10] = [
    "name",
    "organization",
    "organ",
    "license",
    "link",
    "dimension",
    "modality",
    "task",
    "data_volume_total",
    "year",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub organ: String,
    #[serde(default)]
    pub license: String,
    /// Validated http(s) URL, or empty when the source link was unusable.
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub dimension: Vec<String>,
    #[serde(default)]
    pub modality: Vec<String>,
    #[serde(default)]
    pub task: Vec<String>,
    #[serde(default)]
    pub data_volume_total: i64,
    /// 4-digit year as a string, or empty when none could be extracted.
    #[serde(default)]
    pub year: String,
    /// Source fields outside the canonical schema, carried through as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
