use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;

use chrono::Utc;

use crate::data::record::DatasetRecord;

pub mod api;
pub mod routes;
pub mod static_files;

/// Read-only state handed to the request path. Built once before the accept
/// loop starts; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    pub records: Vec<DatasetRecord>,
    pub source: PathBuf,
    pub loaded_at: String,
}

impl AppState {
    pub fn new(records: Vec<DatasetRecord>, source: PathBuf) -> Self {
        Self {
            records,
            source,
            loaded_at: Utc::now().to_rfc3339(),
        }
    }
}

pub fn run_server(bind_addr: &str, state: &AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_addr)?;
    println!(
        "datashelf serving {} records on http://{bind_addr}",
        state.records.len()
    );

    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                if let Err(err) = handle_connection(&mut stream, state) {
                    eprintln!("request error: {err}");
                }
            }
            Err(err) => eprintln!("connection failed: {err}"),
        }
    }

    Ok(())
}

fn handle_connection(stream: &mut TcpStream, state: &AppState) -> std::io::Result<()> {
    let mut buffer = [0_u8; 8192];
    let bytes_read = stream.read(&mut buffer)?;
    if bytes_read == 0 {
        return Ok(());
    }

    let request = String::from_utf8_lossy(&buffer[..bytes_read]);
    let request_line = request.lines().next().unwrap_or_default();
    let mut request_parts = request_line.split_whitespace();
    let method = request_parts.next().unwrap_or("GET");
    let path = request_parts.next().unwrap_or("/");

    let response = routes::route_request(state, method, path).to_http_string();
    stream.write_all(response.as_bytes())?;
    stream.flush()?;
    Ok(())
}
