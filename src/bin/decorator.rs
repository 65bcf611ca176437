use std::io::{self, Write};

use anyhow::{Context, Result};
use design_patterns::structural::decorator;
use design_patterns::telemetry;

fn main() -> Result<()> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "=== Decorator ===")?;
    decorator::run(&mut out).context("decorator demo failed")?;
    out.flush()?;
    Ok(())
}
