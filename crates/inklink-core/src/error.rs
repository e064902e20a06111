//! Error type shared by the payload codec and the render URL template.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LinkError {
    /// Payload is not valid URL-safe base64 (wrong alphabet or padding).
    #[error("invalid url-safe base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Payload decoded to bytes that are not UTF-8 text.
    #[error("decoded payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// URL does not start with the render template prefix.
    #[error("url does not start with {prefix}")]
    ForeignUrl { prefix: String },

    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("invalid endpoint {0:?}: expected a non-empty path segment of [A-Za-z0-9._~-]")]
    InvalidEndpoint(String),
}
