//! Query parameter handling for parameter tests.

use crate::types::{Params, Result};
use encoding_rs::{Encoding, UTF_8};
use url::Url;

/// Number of characters kept in a body preview.
pub const PREVIEW_CHARS: usize = 500;

/// Insert a parameter, replacing an existing key in place.
pub fn insert_param(params: &mut Params, key: &str, value: &str) {
    match params.iter_mut().find(|(k, _)| k == key) {
        Some(slot) => slot.1 = value.to_string(),
        None => params.push((key.to_string(), value.to_string())),
    }
}

/// Parse one `name=value` entry. Both sides are trimmed; the value may
/// itself contain `=`.
pub fn parse_param(entry: &str) -> Option<(String, String)> {
    let (key, value) = entry.split_once('=')?;
    Some((key.trim().to_string(), value.trim().to_string()))
}

/// Parse a comma-separated list such as `id=123,name=test`. Entries
/// without `=` are skipped.
pub fn parse_param_list(input: &str) -> Params {
    let mut params = Params::new();
    for (key, value) in input.split(',').filter_map(parse_param) {
        insert_param(&mut params, &key, &value);
    }
    params
}

/// Append the parameters to the URL as a form-encoded query string.
pub fn build_query_url(base: &str, params: &Params) -> Result<Url> {
    let mut url = Url::parse(base)?;
    if !params.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    Ok(url)
}

/// Decode a body with the charset named in its Content-Type, falling back
/// to UTF-8 for missing or unknown labels. Invalid sequences are replaced.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_label)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8);

    let (text, _, _) = encoding.decode(body);
    text.into_owned()
}

fn charset_label(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"'))
        } else {
            None
        }
    })
}

/// First [`PREVIEW_CHARS`] characters of a body.
pub fn preview(body: &str) -> String {
    body.chars().take(PREVIEW_CHARS).collect()
}
