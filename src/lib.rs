//! DATASHELF: a static dataset catalog served over HTTP.
//!
//! Reads a JSON catalog of dataset records once at startup, normalizes the
//! inconsistent field shapes (strings vs arrays, dirty numeric strings,
//! partial dates, unsafe URLs) into a stable schema, and serves the result
//! through read-only endpoints plus a health probe.

pub mod cli;
pub mod data;
pub mod server;
