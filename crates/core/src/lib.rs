//! rewire-core
//!
//! Core library for finding hardcoded local-network IPv4 addresses in a
//! project tree and rewriting them to a new address.
//!
//! This crate defines address syntax rules, the heuristic scanner, the two
//! replacement strategies (heuristic and location-list driven), and the
//! project layout/configuration they read.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends.

pub mod address;
pub mod locations;
pub mod precise;
pub mod project;
pub mod replace;
pub mod scanner;

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
