use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::{DecodeError, Engine as _};

/// Encode raw bytes as unpadded base64url.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode a base64url string back to raw bytes.
///
/// Trailing `=` padding is accepted and stripped so both padded and
/// unpadded producers round-trip through here.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    URL_SAFE_NO_PAD.decode(input.trim_end_matches('='))
}
