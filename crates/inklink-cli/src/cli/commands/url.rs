//! `inklink url` – print the render URL of the class diagram.

use anyhow::Result;
use inklink_core::config::InklinkConfig;
use inklink_core::diagram;
use std::io::{self, Write};

pub fn run_url(cfg: &InklinkConfig) -> Result<()> {
    let template = cfg.template()?;
    tracing::debug!(
        base_url = template.base_url(),
        endpoint = template.endpoint(),
        "render template"
    );
    let url = template.url_for(diagram::class_diagram());
    let mut out = io::stdout().lock();
    writeln!(out, "{}", url)?;
    out.flush()?;
    Ok(())
}
