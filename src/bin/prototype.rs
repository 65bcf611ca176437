use std::io::{self, Write};

use anyhow::{Context, Result};
use design_patterns::creational::prototype;
use design_patterns::telemetry;

fn main() -> Result<()> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "=== Prototype ===")?;
    prototype::run(&mut out).context("prototype demo failed")?;
    out.flush()?;
    Ok(())
}
