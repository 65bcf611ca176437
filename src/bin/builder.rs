use std::io::{self, Write};

use anyhow::{Context, Result};
use design_patterns::creational::builder;
use design_patterns::telemetry;

fn main() -> Result<()> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "=== Builder ===")?;
    builder::run(&mut out).context("builder demo failed")?;
    out.flush()?;
    Ok(())
}
