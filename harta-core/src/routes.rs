//! Display name to path table, path parsing and route-parameter decoding.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters `encodeURIComponent` escapes.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Home map label -> topic page path.
pub const ROUTES: [(&str, &str); 10] = [
    ("Algoritmi și structuri de date", "/ASD"),
    ("Limbaje de programare", "/LIMBAJE"),
    ("Arhitectură", "/ARH"),
    ("Sisteme de operare și rețele", "/SO"),
    ("Baze de date și regăsire de informații", "/BAZEDATE"),
    ("AI și robotică", "/AI"),
    ("Grafică", "/GRAFICA"),
    ("Interacțiune om-computer", "/IOC"),
    ("Știința computațională", "/SC"),
    ("Informatica organizațională", "/IOR"),
];

pub const AUTHORS_PATH: &str = "/AUTORI";
pub const SUBJECT_PREFIX: &str = "/subject/";

/// Path for a display name: exact table match, else the generic subject page.
pub fn route_for(name: &str) -> String {
    ROUTES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, path)| path.to_string())
        .unwrap_or_else(|| format!("{}{}", SUBJECT_PREFIX, encode_component(name)))
}

pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT).to_string()
}

/// Strict percent-decoding: a `%` without two hex digits after it, or bytes
/// that are not UTF-8, fail instead of passing through.
pub fn decode_param(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            if !hex.iter().all(u8::is_ascii_hexdigit) {
                return None;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

/// Page title from a route parameter. `None` when it does not decode or
/// decodes to blank text; callers pick the fallback.
pub fn title_from_param(raw: &str) -> Option<String> {
    decode_param(raw).filter(|s| !s.trim().is_empty())
}

/// Page a path resolves to, after any base prefix has been removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Authors,
    /// Authored topic, by path code (`ASD`, `AI`, ...).
    Topic(String),
    /// Generic subject page; the parameter is still percent-encoded.
    Subject(String),
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Route::Home;
        }
        let with_slash = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        };
        if with_slash == AUTHORS_PATH {
            return Route::Authors;
        }
        if let Some(raw) = with_slash.strip_prefix(SUBJECT_PREFIX)
            && !raw.is_empty()
            && !raw.contains('/')
        {
            return Route::Subject(raw.to_string());
        }
        if ROUTES.iter().any(|(_, p)| *p == with_slash) {
            return Route::Topic(with_slash[1..].to_string());
        }
        Route::NotFound(path.to_string())
    }
}
