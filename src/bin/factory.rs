use std::io::{self, Write};

use anyhow::{Context, Result};
use design_patterns::creational::factory;
use design_patterns::telemetry;

fn main() -> Result<()> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "=== Factory ===")?;
    factory::run(&mut out).context("factory demo failed")?;
    out.flush()?;
    Ok(())
}
