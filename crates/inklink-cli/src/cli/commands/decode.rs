//! `inklink decode` – recover diagram text from a render URL or payload.

use anyhow::{Context, Result};
use inklink_core::config::InklinkConfig;
use inklink_core::payload;
use inklink_core::render_url::has_http_scheme;
use std::io::{self, Write};

/// `http`/`https` URLs (scheme in any case) are matched against the configured
/// template; anything else is treated as a bare payload. Output is the decoded
/// text, unmodified.
pub fn run_decode(cfg: &InklinkConfig, input: &str) -> Result<()> {
    let input = input.trim();
    let text = if has_http_scheme(input) {
        cfg.template()?.payload_of(input)?
    } else {
        payload::decode(input).context("decode payload")?
    };
    tracing::debug!(text_len = text.len(), "decoded payload");

    let mut out = io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
