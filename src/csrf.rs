//! Anti-forgery Token
//!
//! Reads the CSRF token the server sets as a cookie.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;

use crate::config::CSRF_COOKIE;

/// Find `name` in a `document.cookie` string and percent-decode its value
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}

/// Token for state-changing requests, if the cookie is present
pub fn csrf_token() -> Option<String> {
    let doc = web_sys::window()?.document()?;
    let cookies = doc.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
    let token = cookie_value(&cookies, CSRF_COOKIE);
    if token.is_none() {
        log::warn!("[CSRF] No {} cookie, sending request without token", CSRF_COOKIE);
    }
    token
}
