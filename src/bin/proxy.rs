use std::io::{self, Write};

use anyhow::{Context, Result};
use design_patterns::structural::proxy;
use design_patterns::telemetry;

fn main() -> Result<()> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "=== Proxy ===")?;
    proxy::run(&mut out).context("proxy demo failed")?;
    out.flush()?;
    Ok(())
}
