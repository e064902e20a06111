//! Render URL template: `<base_url>/<endpoint>/<payload>`.
//!
//! The rendering service is never contacted; this only builds the URL a
//! browser or another tool would fetch.

use url::Url;

use crate::diagram::CLASS_DIAGRAM;
use crate::error::LinkError;
use crate::payload;

/// Default rendering host.
pub const DEFAULT_BASE_URL: &str = "https://mermaid.ink";

/// Default endpoint; `img` returns a raster image of the diagram.
pub const DEFAULT_ENDPOINT: &str = "img";

/// Base URL and endpoint of a rendering service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTemplate {
    base_url: String,
    endpoint: String,
}

impl Default for RenderTemplate {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl RenderTemplate {
    /// Validated template. `base_url` is stored in the url crate's serialized
    /// form (lower-case scheme and host, IDNA host, percent-escaped path) without
    /// a trailing `/`; surrounding `/` on `endpoint` are trimmed.
    pub fn new(base_url: &str, endpoint: &str) -> Result<Self, LinkError> {
        let base_url = base_url.trim();
        let parsed = Url::parse(base_url).map_err(|e| LinkError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(LinkError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme {:?}", parsed.scheme()),
            });
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(LinkError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "query and fragment are not allowed".to_string(),
            });
        }

        let endpoint = endpoint.trim().trim_matches('/');
        let endpoint_ok = !endpoint.is_empty()
            && endpoint
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~'));
        if !endpoint_ok {
            return Err(LinkError::InvalidEndpoint(endpoint.to_string()));
        }

        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            endpoint: endpoint.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Everything before the payload, e.g. `https://mermaid.ink/img/`.
    pub fn prefix(&self) -> String {
        format!("{}/{}/", self.base_url, self.endpoint)
    }

    /// Render URL for `text`. Empty text yields the bare prefix.
    pub fn url_for(&self, text: &str) -> String {
        let url = format!("{}{}", self.prefix(), payload::encode(text));
        tracing::debug!(
            base_url = self.base_url(),
            endpoint = self.endpoint(),
            url_len = url.len(),
            "built render url"
        );
        url
    }

    /// Strip the prefix from `url` and decode the payload back to text.
    ///
    /// `url` is compared in serialized form, so `HTTPS://Mermaid.INK/img/...`
    /// matches the default template.
    pub fn payload_of(&self, url: &str) -> Result<String, LinkError> {
        let prefix = self.prefix();
        let url = url.trim();
        let normalized = Url::parse(url)
            .map(String::from)
            .unwrap_or_else(|_| url.to_string());
        let encoded = normalized
            .strip_prefix(prefix.as_str())
            .ok_or(LinkError::ForeignUrl { prefix })?;
        payload::decode(encoded)
    }
}

/// True when `input` starts with an `http://` or `https://` scheme, in any case.
pub fn has_http_scheme(input: &str) -> bool {
    let input = input.trim_start().as_bytes();
    ["http://", "https://"].iter().any(|scheme| {
        input
            .get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme.as_bytes()))
    })
}

/// Render URL of the embedded class diagram under the default template.
pub fn class_diagram_url() -> String {
    RenderTemplate::default().url_for(CLASS_DIAGRAM)
}
