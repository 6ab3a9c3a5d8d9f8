//! EVM account address rules
//!
//! Addresses are 20 bytes written as 40 hex digits, optionally prefixed
//! with `0x`. Mixed-case input carries an EIP-55 checksum and must match it.

use sha3::{Digest, Keccak256};

use crate::error::{CoreError, Result};

const ADDRESS_HEX_LEN: usize = 40;

fn strip_hex_prefix(text: &str) -> &str {
    text.strip_prefix("0x").unwrap_or(text)
}

fn is_hex_body(body: &str) -> bool {
    body.len() == ADDRESS_HEX_LEN && body.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Checksum the 40 lowercase hex digits of an address
fn checksum_body(lower: &str) -> String {
    let hash = Keccak256::digest(lower.as_bytes());

    lower
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let byte = hash[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            if nibble >= 8 {
                ch.to_ascii_uppercase()
            } else {
                ch
            }
        })
        .collect()
}

/// Return the `0x`-prefixed EIP-55 checksummed form of `text`
pub fn to_checksum_address(text: &str) -> Result<String> {
    let body = strip_hex_prefix(text);
    if !is_hex_body(body) {
        return Err(CoreError::InvalidAddress(text.to_string()));
    }

    let checksummed = checksum_body(&body.to_ascii_lowercase());

    let has_upper = body.bytes().any(|b| b.is_ascii_uppercase());
    let has_lower = body.bytes().any(|b| b.is_ascii_lowercase());
    if has_upper && has_lower && checksummed != body {
        log::debug!("address {} fails its checksum", text);
        return Err(CoreError::InvalidAddress(text.to_string()));
    }

    Ok(format!("0x{}", checksummed))
}

/// Whether `text` is a well-formed account address
pub fn is_address(text: &str) -> bool {
    to_checksum_address(text).is_ok()
}

/// Abbreviate an address to its first 6 and last 4 characters
pub fn shorten(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let head: String = chars.iter().take(6).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{}...{}", head, tail)
}
