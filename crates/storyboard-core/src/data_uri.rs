//! Self-contained `data:` URIs for image bytes
//!
//! Thumbnails are rendered straight from the encoded string, so an entry
//! never needs a file handle or blob store once it has been read.

use std::fmt;

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{UploadError, UploadResult};

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// A base64 data URI: `data:<mime>;base64,<payload>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DataUri(String);

impl DataUri {
    /// Encode raw bytes under the given MIME type
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        let payload = base64::engine::general_purpose::STANDARD.encode(bytes);
        Self(format!("{SCHEME}{mime}{BASE64_MARKER}{payload}"))
    }

    /// Validate an existing data URI string
    pub fn parse(uri: impl Into<String>) -> UploadResult<Self> {
        let uri = uri.into();
        let (mime, payload) = split(&uri)?;
        if mime.is_empty() || !mime.contains('/') {
            return Err(UploadError::MalformedDataUri(format!("missing MIME type: {}", preview(&uri))));
        }
        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| UploadError::MalformedDataUri(e.to_string()))?;
        Ok(Self(uri))
    }

    /// MIME type between the scheme and the base64 marker
    pub fn mime(&self) -> &str {
        split(&self.0).map(|(mime, _)| mime).unwrap_or_default()
    }

    /// Decode the payload back into bytes
    pub fn decode_bytes(&self) -> UploadResult<Vec<u8>> {
        let (_, payload) = split(&self.0)?;
        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| UploadError::MalformedDataUri(e.to_string()))
    }

    /// Size of the decoded payload, computed from the base64 length
    pub fn byte_len(&self) -> usize {
        let payload = split(&self.0).map(|(_, p)| p).unwrap_or_default();
        let padding = payload.bytes().rev().take_while(|b| *b == b'=').count();
        (payload.len() / 4) * 3 - padding.min(2)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn split(uri: &str) -> UploadResult<(&str, &str)> {
    let rest = uri
        .strip_prefix(SCHEME)
        .ok_or_else(|| UploadError::MalformedDataUri(format!("missing data: scheme: {}", preview(uri))))?;
    rest.split_once(BASE64_MARKER)
        .ok_or_else(|| UploadError::MalformedDataUri(format!("not base64 encoded: {}", preview(uri))))
}

fn preview(uri: &str) -> String {
    uri.chars().take(32).collect()
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DataUri {
    type Error = UploadError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<DataUri> for String {
    fn from(uri: DataUri) -> Self {
        uri.0
    }
}

/// Detect an image MIME type from the leading bytes.
///
/// Raster formats are recognised by their magic numbers. SVG is text, so it
/// is recognised by an `<svg` root element near the start of the document.
pub fn sniff_image_mime(bytes: &[u8]) -> Option<&'static str> {
    if let Ok(format) = image::guess_format(bytes) {
        return Some(format.to_mime_type());
    }
    looks_like_svg(bytes).then_some("image/svg+xml")
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    // The cut may split a multi-byte character; only the tail is lost.
    let head = &bytes[..bytes.len().min(1024)];
    let text = match std::str::from_utf8(head) {
        Ok(text) => text,
        Err(e) if e.error_len().is_none() => {
            std::str::from_utf8(&head[..e.valid_up_to()]).unwrap_or_default()
        }
        Err(_) => return false,
    };
    let text = text.trim_start_matches('\u{feff}').trim_start();
    let opener = ["<svg", "<?xml", "<!--", "<!DOCTYPE svg"]
        .iter()
        .any(|prefix| text.starts_with(prefix));
    opener && text.contains("<svg")
}
