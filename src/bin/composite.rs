use std::io::{self, Write};

use anyhow::{Context, Result};
use design_patterns::structural::composite;
use design_patterns::telemetry;

fn main() -> Result<()> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "=== Composite ===")?;
    composite::run(&mut out).context("composite demo failed")?;
    out.flush()?;
    Ok(())
}
