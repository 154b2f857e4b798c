//! URL-fragment route codec.
//!
//! The whole navigation state fits in a query-string-shaped fragment:
//! `#s=<sessionId>&v=<docs|code>&p=<path>`. The `p` key is omitted when no
//! document is selected, and reading substitutes the manifest's default
//! session when `s` is missing. Values use `application/x-www-form-urlencoded`
//! escaping so paths with spaces or non-ASCII segments round-trip.

use serde::Serialize;

use crate::types::View;

/// Navigation state decoded from a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub session_id: String,
    /// `None` when the fragment carries no (or an unrecognized) view.
    pub view: Option<View>,
    pub path: Option<String>,
}

/// Decode a fragment (with or without the leading `#`).
pub fn read_fragment(fragment: &str, default_session: &str) -> Route {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);

    let mut session_id = None;
    let mut view = None;
    let mut path = None;
    for pair in raw.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (decode_component(k), decode_component(v)),
            None => (decode_component(pair), String::new()),
        };
        match key.as_str() {
            "s" => session_id = Some(value),
            "v" => view = View::parse(&value),
            "p" => path = Some(value),
            _ => {}
        }
    }

    Route {
        session_id: session_id
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| default_session.to_string()),
        view,
        path: path.filter(|p| !p.is_empty()),
    }
}

/// Encode navigation state into a fragment, leading `#` included.
pub fn write_fragment(session_id: &str, view: View, path: Option<&str>) -> String {
    let mut out = String::from("#s=");
    encode_component(&mut out, session_id);
    out.push_str("&v=");
    encode_component(&mut out, view.as_str());
    if let Some(path) = path.filter(|p| !p.is_empty()) {
        out.push_str("&p=");
        encode_component(&mut out, path);
    }
    out
}

fn encode_component(out: &mut String, value: &str) {
    for &byte in value.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'*' | b'-' | b'.' | b'_' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push(HEX[(byte >> 4) as usize] as char);
                out.push(HEX[(byte & 0x0f) as usize] as char);
            }
        }
    }
}

const HEX: &[u8; 16] = b"0123456789ABCDEF";

fn decode_component(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                match (hex_val(bytes.get(i + 1)), hex_val(bytes.get(i + 2))) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 3;
                    }
                    _ => {
                        // Malformed escape, keep it verbatim.
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_val(byte: Option<&u8>) -> Option<u8> {
    match byte? {
        b @ b'0'..=b'9' => Some(b - b'0'),
        b @ b'a'..=b'f' => Some(b - b'a' + 10),
        b @ b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
