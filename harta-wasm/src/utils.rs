use wasm_bindgen::JsValue;
use web_sys::Window;

/// Log a message to the browser console.
pub fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

pub fn warn(s: &str) {
    web_sys::console::warn_1(&JsValue::from_str(s));
}

/// Path prefix the site is served under, from the optional
/// `window.__BASE_URL` set by the host page. Always ends with `/`.
pub fn base_url(window: &Window) -> String {
    let base = js_sys::Reflect::get(window, &JsValue::from_str("__BASE_URL"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| "/".to_string());
    if base.ends_with('/') {
        base
    } else {
        format!("{}/", base)
    }
}

/// Drop the base prefix from `location.pathname`.
pub fn strip_base<'a>(pathname: &'a str, base: &str) -> &'a str {
    let prefix = base.trim_end_matches('/');
    if prefix.is_empty() {
        return pathname;
    }
    match pathname.strip_prefix(prefix) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => pathname,
    }
}

/// Absolute link for a site path under the base prefix.
pub fn link(base: &str, path: &str) -> String {
    let base = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    };
    format!("{}{}", base, path.trim_start_matches('/'))
}

pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}
