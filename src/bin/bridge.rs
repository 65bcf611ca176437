use std::io::{self, Write};

use anyhow::{Context, Result};
use design_patterns::structural::bridge;
use design_patterns::telemetry;

fn main() -> Result<()> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "=== Bridge ===")?;
    bridge::run(&mut out).context("bridge demo failed")?;
    out.flush()?;
    Ok(())
}
