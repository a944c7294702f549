//! Symmetric-key request authentication for the relayer API.
//!
//! Each request carries an expiration timestamp and an HMAC-SHA256 over the
//! request path, every `x-renegade-*` header in lexicographic order, and the
//! body. The MAC is sent base64-encoded without padding.

use std::time::Duration;

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{Error, Result};

type HmacSha256 = Hmac<Sha256>;

pub const AUTH_HEADER: &str = "x-renegade-auth";
pub const EXPIRATION_HEADER: &str = "x-renegade-auth-expiration";
const SIGNED_HEADER_PREFIX: &str = "x-renegade";

/// Lifetime of a request signature.
pub const SIGNATURE_TTL: Duration = Duration::from_secs(10);

/// Decoded wallet symmetric key.
#[derive(Clone)]
pub struct HmacKey(Vec<u8>);

impl HmacKey {
    /// Decode a hex key, with or without a `0x` prefix.
    pub fn from_hex(encoded: &str) -> Result<Self> {
        let trimmed = encoded.strip_prefix("0x").unwrap_or(encoded);
        let bytes = hex::decode(trimmed)
            .map_err(|e| Error::sdk_with("symmetric_key is not valid hex", e))?;
        if bytes.is_empty() {
            return Err(Error::sdk("symmetric_key is empty"));
        }
        Ok(Self(bytes))
    }

    /// MAC over `path`, the signed headers, and `body`.
    pub fn sign(&self, path: &str, headers: &[(&str, String)], body: &[u8]) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(&self.0)
            .map_err(|e| Error::sdk(format!("invalid HMAC key: {e}")))?;
        mac.update(path.as_bytes());

        let mut signed: Vec<_> = headers
            .iter()
            .filter(|(name, _)| {
                let name = name.to_ascii_lowercase();
                name.starts_with(SIGNED_HEADER_PREFIX) && name != AUTH_HEADER
            })
            .collect();
        signed.sort_by(|a, b| a.0.cmp(&b.0));
        for (name, value) in signed {
            mac.update(name.as_bytes());
            mac.update(value.as_bytes());
        }

        mac.update(body);
        Ok(STANDARD_NO_PAD.encode(mac.finalize().into_bytes()))
    }

    /// Headers authenticating a request issued at `now_ms`.
    pub fn auth_headers(
        &self,
        path: &str,
        body: &[u8],
        now_ms: u64,
    ) -> Result<Vec<(&'static str, String)>> {
        let expiration = now_ms + SIGNATURE_TTL.as_millis() as u64;
        let mut headers = vec![(EXPIRATION_HEADER, expiration.to_string())];
        let signature = self.sign(path, &headers, body)?;
        headers.push((AUTH_HEADER, signature));
        Ok(headers)
    }
}
