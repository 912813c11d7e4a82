//! JSON payload builders for the read-only catalog API.

use crate::server::AppState;

/// The whole normalized catalog as a JSON array. Shipped in full; filtering
/// and search happen client-side.
pub fn datasets_payload(state: &AppState) -> Result<String, serde_json::Error> {
    serde_json::to_string(&state.records)
}

pub fn health_payload(state: &AppState) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "ok": true,
        "count": state.records.len(),
        "source": state.source.display().to_string(),
        "version": env!("CARGO_PKG_VERSION"),
        "loaded_at": state.loaded_at,
    }))
}
