use std::io::{self, Write};

use anyhow::{Context, Result};
use design_patterns::structural::adapter;
use design_patterns::telemetry;

fn main() -> Result<()> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "=== Adapter ===")?;
    adapter::run(&mut out).context("adapter demo failed")?;
    out.flush()?;
    Ok(())
}
