//! Flyweight: many bullets, few sprites.
//!
//! Every bullet carries its own position and velocity but the large sprite
//! image is built once per [`BulletKind`] and shared through an `Arc`.
//! [`BulletFactory`] owns the [`SpriteRegistry`] that memoizes sprites;
//! [`SharedBulletFactory`] does the same behind `&self` for threaded callers.

mod bullet;
mod concurrent;
mod factory;
mod kind;
mod registry;
mod scenario;
mod sprite;

use std::io::Write;

pub use bullet::Bullet;
pub use concurrent::{SharedBulletFactory, SharedSpriteRegistry};
pub use factory::BulletFactory;
pub use kind::BulletKind;
pub use registry::{Lookup, RegistryStats, SpriteRegistry};
pub use scenario::{Scenario, Volley, BUILTIN_SCENARIO};
pub use sprite::{Sprite, SPRITE_BUFFER_SIZE};

use crate::error::Result;

/// Fire every volley of `scenario`, drawing each bullet as it is created.
pub fn fire(
    factory: &mut BulletFactory,
    scenario: &Scenario,
    out: &mut dyn Write,
) -> Result<Vec<Bullet>> {
    let mut bullets = Vec::with_capacity(scenario.total_bullets());
    for volley in &scenario.volleys {
        for _ in 0..volley.count {
            let (bullet, created) = factory.acquire_traced(volley.kind);
            if created {
                writeln!(out, "Creating {} sprite", volley.kind)?;
            }
            writeln!(out, "Creating {} bullet object", volley.kind)?;
            bullet.draw(out)?;
            bullets.push(bullet);
        }
    }
    Ok(bullets)
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let scenario = Scenario::builtin()?;
    let mut factory = BulletFactory::new();
    let mut bullets = fire(&mut factory, &scenario, out)?;

    writeln!(out)?;
    writeln!(out, "Advancing every bullet one tick")?;
    for bullet in &mut bullets {
        bullet.advance();
        bullet.draw(out)?;
    }

    writeln!(out)?;
    match factory.acquire_code(7) {
        Ok(_) => writeln!(out, "Unexpected bullet for code 7")?,
        Err(err) => writeln!(out, "Rejected: {err}")?,
    }

    let stats = factory.stats();
    writeln!(
        out,
        "{} bullets share {} sprites ({} lookups, {} constructions)",
        bullets.len(),
        factory.registry().len(),
        stats.lookups(),
        stats.misses
    )?;
    Ok(())
}
