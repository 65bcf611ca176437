use std::io::{self, Write};

use anyhow::{Context, Result};
use design_patterns::structural::flyweight::{self, BulletKind, SharedBulletFactory};
use design_patterns::telemetry;

fn main() -> Result<()> {
    telemetry::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "=== Flyweight: one sprite per bullet kind ===")?;
    flyweight::run(&mut out).context("flyweight demo failed")?;

    writeln!(out, "\n=== Flyweight: shared factory across threads ===")?;
    let factory = SharedBulletFactory::new();
    let fired = factory
        .fire_parallel(&BulletKind::ALL, 100)
        .context("threaded flyweight demo failed")?;
    writeln!(
        out,
        "{} bullets fired from {} threads, {} sprites built",
        fired.len(),
        BulletKind::ALL.len(),
        factory.registry().stats().misses
    )?;

    out.flush()?;
    Ok(())
}
