//! Serve bundled assets from the static/ directory, when one exists next to
//! the process working directory.

use std::fs;

use super::routes::HttpResponse;

/// Try to serve a static asset for GET /static/* paths. Returns None when
/// the path is not a static path or the file is unavailable.
pub fn try_serve_static(method: &str, path: &str) -> Option<HttpResponse> {
    if method != "GET" {
        return None;
    }

    let path = path.split('?').next().unwrap_or(path);
    let rel = path.strip_prefix("/static/")?;
    if rel.is_empty() || rel.contains("..") {
        return None;
    }

    let base = std::env::current_dir().ok()?;
    let dir = base.join("static").canonicalize().ok()?;
    let file_path = dir.join(rel);
    if !file_path.starts_with(&dir) || !file_path.is_file() {
        return None;
    }

    let content_type = content_type_for_path(rel);
    if !is_text_content_type(content_type) {
        return None;
    }
    let body = fs::read_to_string(&file_path).ok()?;

    Some(HttpResponse {
        status_code: 200,
        status_text: "OK",
        content_type,
        body,
    })
}

fn content_type_for_path(path: &str) -> &'static str {
    if path.ends_with(".html") {
        "text/html; charset=utf-8"
    } else if path.ends_with(".js") {
        "application/javascript; charset=utf-8"
    } else if path.ends_with(".css") {
        "text/css; charset=utf-8"
    } else if path.ends_with(".json") {
        "application/json; charset=utf-8"
    } else {
        "application/octet-stream"
    }
}

fn is_text_content_type(ct: &str) -> bool {
    ct.starts_with("text/")
        || ct.starts_with("application/javascript")
        || ct.starts_with("application/json")
}
