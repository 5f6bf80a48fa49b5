//! URL signing with HMAC-SHA1
//!
//! The signature is computed as:
//! ```text
//! signature = base64url_nopad(HMAC-SHA1(secret, segment + "/" + original))
//! ```
//!
//! The proxy recomputes the same value to authorize a request, so the
//! message must be byte-identical to the path that follows the signature.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Sign a URL payload (`segment/original`) with the given secret
pub fn sign(secret: &[u8], payload: &str) -> String {
    let digest = compute_hmac_signature(secret, payload);
    base64_url_encode(&digest)
}

/// Check a signature against a payload
///
/// Returns `false` for an empty secret: unsigned URLs have nothing to
/// verify.
pub fn verify(signature: &str, secret: &[u8], payload: &str) -> bool {
    if secret.is_empty() {
        return false;
    }

    let expected = sign(secret, payload);
    constant_time_compare(signature, &expected)
}

fn compute_hmac_signature(key: &[u8], payload: &str) -> Vec<u8> {
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

/// Base64url encode (URL-safe, no padding)
fn base64_url_encode(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Constant-time string comparison to prevent timing attacks
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
