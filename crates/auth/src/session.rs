//! Session token minting and hashing.
//!
//! A session token is an opaque bearer secret handed to the client once
//! at login. Only its SHA-256 hash is stored server-side; resolving a
//! request means hashing the presented token and looking the hash up.

use rand::{rngs::OsRng, RngCore};
use sha2::{Digest, Sha256};

use crate::password::{hex_decode, hex_encode};

/// Token prefix, useful for secret scanning and log redaction.
pub const SESSION_TOKEN_PREFIX: &str = "mms";

/// Number of random bytes behind each token.
pub const SESSION_SECRET_BYTES: usize = 32;

/// A raw session token as handed to the client.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Mint a fresh token from OS randomness.
    pub fn generate() -> Self {
        let mut secret = [0_u8; SESSION_SECRET_BYTES];
        OsRng.fill_bytes(&mut secret);
        Self(format!("{SESSION_TOKEN_PREFIX}_{}", hex_encode(&secret)))
    }

    /// Wrap a token presented by a client. Returns `None` when the shape
    /// is not even plausible, saving a storage lookup.
    pub fn parse(raw: &str) -> Option<Self> {
        let secret_hex = raw.strip_prefix(SESSION_TOKEN_PREFIX)?.strip_prefix('_')?;
        if secret_hex.len() != SESSION_SECRET_BYTES * 2 {
            return None;
        }
        hex_decode(secret_hex)?;
        Some(Self(raw.to_string()))
    }

    /// The raw token string (send to the client exactly once).
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// SHA-256 hex digest of the token, the only form ever persisted.
    pub fn hash(&self) -> String {
        hex_encode(&Sha256::digest(self.0.as_bytes()))
    }
}

impl core::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SessionToken(**redacted**)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_parse() {
        let token = SessionToken::generate();
        let parsed = SessionToken::parse(token.expose()).expect("token should parse");
        assert_eq!(parsed.hash(), token.hash());
    }

    #[test]
    fn generated_tokens_are_unique() {
        assert_ne!(
            SessionToken::generate().expose(),
            SessionToken::generate().expose()
        );
    }

    #[test]
    fn parse_rejects_malformed_tokens() {
        assert!(SessionToken::parse("").is_none());
        assert!(SessionToken::parse("mms_short").is_none());
        assert!(SessionToken::parse("other_prefix").is_none());
        // Right length, bad encoding.
        let bad = format!("mms_{}", "zz".repeat(SESSION_SECRET_BYTES));
        assert!(SessionToken::parse(&bad).is_none());
    }

    #[test]
    fn debug_does_not_leak_the_secret() {
        let token = SessionToken::generate();
        let debug = format!("{token:?}");
        assert!(!debug.contains(&token.expose()[4..]));
    }
}
