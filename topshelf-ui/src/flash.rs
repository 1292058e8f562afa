//! Signed flash messages
//!
//! One-shot confirmation banners ("… added!", "… deleted!") carried
//! across a redirect in a cookie. The value is signed with the service
//! secret so a tampered cookie is dropped instead of rendered.
//!
//! Format: `topshelf_flash=<base64(message)>.<hex sha256(secret:message)>`

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sha2::{Digest, Sha256};

const COOKIE_NAME: &str = "topshelf_flash";

/// Build the Set-Cookie value carrying a flash message
pub fn set_cookie(secret: &str, message: &str) -> String {
    let payload = URL_SAFE_NO_PAD.encode(message.as_bytes());
    let signature = sign(secret, message);
    format!(
        "{}={}.{}; Path=/; HttpOnly; SameSite=Lax",
        COOKIE_NAME, payload, signature
    )
}

/// Build the Set-Cookie value that clears the flash cookie
pub fn clear_cookie() -> String {
    format!("{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax", COOKIE_NAME)
}

/// Extract and verify the flash message from request headers.
///
/// Returns None when the cookie is absent, malformed, or fails
/// signature verification.
pub fn take(headers: &HeaderMap, secret: &str) -> Option<String> {
    let cookies = headers.get(COOKIE)?.to_str().ok()?;

    let raw = cookies.split(';').find_map(|part| {
        let (name, value) = part.trim().split_once('=')?;
        (name == COOKIE_NAME).then(|| value.to_string())
    })?;

    let (payload, signature) = raw.split_once('.')?;
    let message_bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let message = String::from_utf8(message_bytes).ok()?;

    if sign(secret, &message) != signature {
        tracing::warn!("flash cookie failed signature verification");
        return None;
    }

    Some(message)
}

fn sign(secret: &str, message: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(b":");
    hasher.update(message.as_bytes());
    format!("{:x}", hasher.finalize())
}
