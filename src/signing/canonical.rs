//! String-to-sign construction.

use super::Timestamp;

/// Build the string-to-sign for a request.
///
/// `body` is the JSON text exactly as it will be transmitted. A missing or
/// empty body is left out, so a GET signs `uri || timestamp`. Note that the
/// text of an empty JSON object, `{}`, is not empty and is signed.
pub fn string_to_sign(uri: &str, timestamp: Timestamp, body: Option<&str>) -> String {
    match body {
        Some(body) if !body.is_empty() => format!("{}{}{}", uri, body, timestamp),
        _ => format!("{}{}", uri, timestamp),
    }
}
