//! Password hashing.
//!
//! Salted, iterated SHA-256 with the encoded form
//! `sha256$<iterations>$<salt_hex>$<hash_hex>`. The iteration count is
//! stored per hash so it can be raised without invalidating old hashes.

use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};
use thiserror::Error;

const SALT_BYTES: usize = 16;
const ITERATIONS: u32 = 50_000;
const ALGORITHM: &str = "sha256";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PasswordHashError {
    #[error("stored password hash is malformed")]
    MalformedHash,

    #[error("stored password hash uses an unsupported algorithm")]
    UnsupportedAlgorithm,
}

/// Hash a raw password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0_u8; SALT_BYTES];
    OsRng.fill_bytes(&mut salt);

    let digest = iterate(password.as_bytes(), &salt, ITERATIONS);
    format!(
        "{ALGORITHM}${ITERATIONS}${}${}",
        hex_encode(&salt),
        hex_encode(&digest)
    )
}

/// Verify a raw password against a stored encoded hash.
pub fn verify_password(password: &str, encoded: &str) -> Result<bool, PasswordHashError> {
    let mut parts = encoded.splitn(4, '$');

    let algorithm = parts.next().ok_or(PasswordHashError::MalformedHash)?;
    let iterations = parts.next().ok_or(PasswordHashError::MalformedHash)?;
    let salt_hex = parts.next().ok_or(PasswordHashError::MalformedHash)?;
    let hash_hex = parts.next().ok_or(PasswordHashError::MalformedHash)?;

    if algorithm != ALGORITHM {
        return Err(PasswordHashError::UnsupportedAlgorithm);
    }

    let iterations: u32 = iterations
        .parse()
        .map_err(|_| PasswordHashError::MalformedHash)?;
    let salt = hex_decode(salt_hex).ok_or(PasswordHashError::MalformedHash)?;
    let expected = hex_decode(hash_hex).ok_or(PasswordHashError::MalformedHash)?;

    let actual = iterate(password.as_bytes(), &salt, iterations);
    Ok(constant_time_eq(&actual, &expected))
}

fn iterate(password: &[u8], salt: &[u8], iterations: u32) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password);
    let mut digest = hasher.finalize();

    for _ in 1..iterations {
        digest = Sha256::digest(&digest);
    }

    digest.to_vec()
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0_u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

pub(crate) fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    let mut encoded = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        encoded.push(HEX[(byte >> 4) as usize] as char);
        encoded.push(HEX[(byte & 0x0f) as usize] as char);
    }
    encoded
}

pub(crate) fn hex_decode(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 {
        return None;
    }

    let bytes = hex.as_bytes();
    let mut decoded = Vec::with_capacity(hex.len() / 2);
    for pair in bytes.chunks_exact(2) {
        let hi = decode_hex_nibble(pair[0])?;
        let lo = decode_hex_nibble(pair[1])?;
        decoded.push((hi << 4) | lo);
    }
    Some(decoded)
}

fn decode_hex_nibble(value: u8) -> Option<u8> {
    match value {
        b'0'..=b'9' => Some(value - b'0'),
        b'a'..=b'f' => Some(value - b'a' + 10),
        b'A'..=b'F' => Some(value - b'A' + 10),
        _ => None,
    }
}
