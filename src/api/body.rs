//! Request body decoding for create and update.

use axum::body::Bytes;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;

use super::error::ApiError;
use crate::item::ItemInput;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Decode an [`ItemInput`] from a request body.
///
/// Form-encoded bodies are recognised by their content type; every other body
/// is read as JSON. A blank body is an input with no fields present.
pub fn decode_input(headers: &HeaderMap, body: &Bytes) -> Result<ItemInput, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ItemInput::default());
    }

    if is_form(headers) {
        Ok(serde_urlencoded::from_bytes(body)?)
    } else {
        Ok(serde_json::from_slice(body)?)
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            value
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .eq_ignore_ascii_case(FORM_CONTENT_TYPE)
        })
        .unwrap_or(false)
}
