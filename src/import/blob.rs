// src/import/blob.rs

//! Decoding of browser-delivered export blobs
//!
//! When the export is downloaded inside a web page, the browser bridge
//! hands it over as a `data:` URI
//! (`data:text/csv;charset=utf-8;base64,bmFtZSx1cmws...`).

use crate::error::{Error, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Decode a `data:` URI into UTF-8 text
///
/// Base64 payloads may contain whitespace; other payloads are
/// percent-decoded. Only UTF-8 (or ASCII) charsets are accepted.
pub fn decode_data_uri(uri: &str) -> Result<String> {
    let uri = uri.trim();
    let rest = match uri.get(..5) {
        Some(scheme) if scheme.eq_ignore_ascii_case("data:") => &uri[5..],
        _ => return Err(Error::BlobDecode("not a data URI".to_string())),
    };

    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::BlobDecode("data URI has no payload separator".to_string()))?;

    let mut is_base64 = false;
    for param in meta.split(';').skip(1).map(str::trim) {
        if param.eq_ignore_ascii_case("base64") {
            is_base64 = true;
        } else if let Some((key, value)) = param.split_once('=')
            && key.trim().eq_ignore_ascii_case("charset")
        {
            let charset = value.trim().trim_matches('"');
            if !charset.eq_ignore_ascii_case("utf-8")
                && !charset.eq_ignore_ascii_case("utf8")
                && !charset.eq_ignore_ascii_case("us-ascii")
            {
                return Err(Error::BlobDecode(format!(
                    "unsupported charset: {}",
                    charset
                )));
            }
        }
    }

    let bytes = if is_base64 {
        let cleaned: String = payload
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        STANDARD
            .decode(cleaned.as_bytes())
            .map_err(|e| Error::BlobDecode(format!("invalid base64 payload: {}", e)))?
    } else {
        urlencoding::decode_binary(payload.as_bytes()).into_owned()
    };

    let text = String::from_utf8(bytes)
        .map_err(|_| Error::BlobDecode("payload is not valid UTF-8".to_string()))?;

    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}
