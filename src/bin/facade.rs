use std::io::{self, Write};

use anyhow::{Context, Result};
use design_patterns::structural::facade;
use design_patterns::telemetry;

fn main() -> Result<()> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "=== Facade ===")?;
    facade::run(&mut out).context("facade demo failed")?;
    out.flush()?;
    Ok(())
}
