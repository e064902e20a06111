//! `inklink diagram` – print the embedded Mermaid source.

use anyhow::Result;
use inklink_core::diagram;
use std::io::{self, Write};

pub fn run_diagram() -> Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(diagram::class_diagram().as_bytes())?;
    out.flush()?;
    Ok(())
}
