//! URL-safe base64 payload codec.
//!
//! Diagram text is encoded as padded base64 over the RFC 4648 §5 alphabet
//! (`-` and `_` instead of `+` and `/`), so the payload can be dropped into a
//! URL path segment without percent-escaping.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;

use crate::error::LinkError;

/// Encode the UTF-8 bytes of `text` as a padded URL-safe base64 string.
pub fn encode(text: &str) -> String {
    let encoded = URL_SAFE.encode(text.as_bytes());
    debug_assert!(is_url_safe(&encoded));
    tracing::debug!(
        text_len = text.len(),
        payload_len = encoded.len(),
        "encoded diagram payload"
    );
    encoded
}

/// Decode a payload produced by [`encode`] back into text.
///
/// Standard-alphabet input (`+`, `/`) is rejected rather than silently accepted.
pub fn decode(encoded: &str) -> Result<String, LinkError> {
    let bytes = URL_SAFE.decode(encoded.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

/// True when every byte of `payload` is in the URL-safe alphabet or `=`.
pub fn is_url_safe(payload: &str) -> bool {
    payload
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'='))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::CLASS_DIAGRAM;

    #[test]
    fn empty_text_encodes_to_empty_payload() {
        assert_eq!(encode(""), "");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn known_answers() {
        assert_eq!(encode("\n"), "Cg==");
        assert_eq!(encode("classDiagram"), "Y2xhc3NEaWFncmFt");
        assert_eq!(encode("é"), "w6k=");
    }

    #[test]
    fn uses_url_safe_alphabet() {
        assert_eq!(encode("~~~"), "fn5-");
        assert_eq!(encode("???"), "Pz8_");
    }

    #[test]
    fn class_diagram_payload() {
        let payload = encode(CLASS_DIAGRAM);
        assert_eq!(payload.len(), 3584);
        assert!(payload.starts_with("CmNsYXNzRGlhZ3JhbQogICAgZGlyZWN0aW9uIFRC"));
        assert!(payload.ends_with("NpdG9yeQo="));
        assert!(is_url_safe(&payload));
        assert!(!payload.contains('+') && !payload.contains('/'));
    }

    #[test]
    fn class_diagram_round_trips() {
        let decoded = decode(&encode(CLASS_DIAGRAM)).unwrap();
        assert_eq!(decoded.as_bytes(), CLASS_DIAGRAM.as_bytes());
    }

    #[test]
    fn encoding_is_deterministic() {
        assert_eq!(encode(CLASS_DIAGRAM), encode(CLASS_DIAGRAM));
    }

    #[test]
    fn decode_rejects_standard_alphabet() {
        assert!(matches!(decode("fn5+"), Err(LinkError::Base64(_))));
        assert!(matches!(decode("Pz8/"), Err(LinkError::Base64(_))));
    }

    #[test]
    fn decode_rejects_bad_padding() {
        assert!(matches!(decode("Cg="), Err(LinkError::Base64(_))));
    }

    #[test]
    fn decode_rejects_non_utf8() {
        // 0xfb 0xff
        assert!(matches!(decode("-_8="), Err(LinkError::Utf8(_))));
    }

    #[test]
    fn is_url_safe_flags_reserved_chars() {
        assert!(is_url_safe("abc-_="));
        assert!(!is_url_safe("a+b"));
        assert!(!is_url_safe("a/b"));
        assert!(!is_url_safe("a b"));
    }
}
