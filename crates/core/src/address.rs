//! IPv4 address syntax.
//!
//! Addresses are matched by shape only: four dot-separated groups of one to
//! three digits. No numeric range check is applied, so `999.999.999.999` is
//! syntactically valid.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Matches IPv4-shaped tokens embedded in arbitrary text.
pub static ADDRESS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:[0-9]{1,3}\.){3}[0-9]{1,3}\b").unwrap());

static ADDRESS_EXACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$").unwrap());

/// Matches addresses in the `192.168.x.x` range, used for auto-detection.
pub static PRIVATE_192_168: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"192\.168\.\d{1,3}\.\d{1,3}").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid IP address '{0}'. Use the format: 192.168.1.100")]
    InvalidSyntax(String),
}

/// True when `input` (already trimmed) has the `A.B.C.D` shape.
pub fn is_valid_syntax(input: &str) -> bool {
    ADDRESS_EXACT.is_match(input)
}

/// Trim and validate an operator-supplied address.
pub fn parse_operator_address(input: &str) -> Result<String, AddressError> {
    let trimmed = input.trim();
    if is_valid_syntax(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(AddressError::InvalidSyntax(trimmed.to_string()))
    }
}

/// Every IPv4-shaped token in `text`, in order of appearance (duplicates kept).
pub fn find_tokens(text: &str) -> Vec<&str> {
    ADDRESS_TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}

/// First `192.168.x.x` address in `text`, if any.
pub fn first_private_192_168(text: &str) -> Option<&str> {
    PRIVATE_192_168.find(text).map(|m| m.as_str())
}
