use std::env;

use crate::data::loader::{data_path_from_env, load_catalog, load_catalog_or_empty};
use crate::data::validate::{validate_catalog_file, ValidationSeverity};
use crate::server::{self, AppState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Serve,
    Check,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("serve") => Some(Command::Serve),
        Some("check") => Some(Command::Check),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Serve) => handle_serve(),
        Some(Command::Check) => handle_check(),
        Some(Command::Validate) => handle_validate(),
        None => {
            eprintln!("usage: datashelf <serve|check|validate>");
            2
        }
    }
}

/// Bind address from DATASHELF_BIND, else PORT on all interfaces, else the
/// default port on all interfaces.
fn bind_addr_from_env() -> String {
    if let Ok(addr) = env::var("DATASHELF_BIND") {
        return addr;
    }
    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    format!("0.0.0.0:{port}")
}

fn handle_serve() -> i32 {
    let source = data_path_from_env();
    let records = load_catalog_or_empty(&source);
    println!("loaded {} records from {}", records.len(), source.display());

    let state = AppState::new(records, source);
    let bind_addr = bind_addr_from_env();
    match server::run_server(&bind_addr, &state) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_check() -> i32 {
    let source = data_path_from_env();
    match load_catalog(&source) {
        Ok(records) => {
            println!("{}: {} records", source.display(), records.len());
            0
        }
        Err(err) => {
            eprintln!("check failed: {err}");
            1
        }
    }
}

fn handle_validate() -> i32 {
    let source = data_path_from_env();
    let report = match validate_catalog_file(&source) {
        Ok(report) => report,
        Err(message) => {
            eprintln!("validate failed: {message}");
            return 1;
        }
    };

    for diag in &report.diagnostics {
        println!("[{}] {}: {}", diag.severity, diag.context, diag.message);
    }
    println!(
        "{} diagnostics ({} errors, {} warnings)",
        report.diagnostics.len(),
        report.count(ValidationSeverity::Error),
        report.count(ValidationSeverity::Warning),
    );

    if report.has_errors() {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn known_subcommands_parse() {
        assert_eq!(
            parse_command(&args(&["datashelf", "serve"])),
            Some(Command::Serve)
        );
        assert_eq!(
            parse_command(&args(&["datashelf", "check"])),
            Some(Command::Check)
        );
        assert_eq!(
            parse_command(&args(&["datashelf", "validate"])),
            Some(Command::Validate)
        );
    }

    #[test]
    fn unknown_or_missing_subcommand_is_rejected() {
        assert_eq!(parse_command(&args(&["datashelf"])), None);
        assert_eq!(parse_command(&args(&["datashelf", "optimize"])), None);
    }
}
