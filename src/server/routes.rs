use crate::server::api;
use crate::server::static_files;
use crate::server::AppState;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

pub fn route_request(state: &AppState, method: &str, path: &str) -> HttpResponse {
    if let Some(response) = static_files::try_serve_static(method, path) {
        return response;
    }
    match (method, path) {
        ("GET", "/") => HttpResponse {
            status_code: 200,
            status_text: "OK",
            content_type: "text/html; charset=utf-8",
            body: index_html(),
        },
        ("GET", "/api/datasets") => match api::datasets_payload(state) {
            Ok(payload) => HttpResponse {
                status_code: 200,
                status_text: "OK",
                content_type: "application/json",
                body: payload,
            },
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("GET", "/api/health") => match api::health_payload(state) {
            Ok(payload) => HttpResponse {
                status_code: 200,
                status_text: "OK",
                content_type: "application/json",
                body: payload,
            },
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        _ => error_response(404, "Not Found", "Route not found"),
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}

fn index_html() -> String {
    r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Dataset Catalog</title>
  <style>
    body { font-family: Arial, sans-serif; max-width: 900px; margin: 24px auto; padding: 0 12px; }
    h1 { margin-bottom: 8px; }
    .card { border: 1px solid #ddd; border-radius: 8px; padding: 14px; margin: 14px 0; }
    button { padding: 8px 14px; }
    pre { background: #111; color: #aef2ae; padding: 12px; overflow: auto; border-radius: 6px; min-height: 180px; }
  </style>
</head>
<body>
  <h1>Dataset Catalog</h1>
  <p>Read-only catalog of normalized dataset records.</p>

  <div class="card">
    <strong>Health</strong>
    <div><button id="health-btn">GET /api/health</button></div>
  </div>

  <div class="card">
    <strong>Datasets</strong>
    <div><button id="datasets-btn">GET /api/datasets</button></div>
  </div>

  <pre id="output">Ready.</pre>

  <script>
    const output = document.getElementById('output');

    async function request(path) {
      output.textContent = 'Loading…';
      const response = await fetch(path);
      const text = await response.text();
      output.textContent = 'HTTP ' + response.status + '\n' + text;
    }

    document.getElementById('health-btn').addEventListener('click', () => {
      request('/api/health');
    });

    document.getElementById('datasets-btn').addEventListener('click', () => {
      request('/api/datasets');
    });
  </script>
</body>
</html>
"#
    .to_string()
}
