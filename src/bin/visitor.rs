use std::io::{self, Write};

use anyhow::{Context, Result};
use design_patterns::behavioural::visitor;
use design_patterns::telemetry;

fn main() -> Result<()> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "=== Visitor ===")?;
    visitor::run(&mut out).context("visitor demo failed")?;
    out.flush()?;
    Ok(())
}
