use super::bullet::Bullet;
use super::kind::BulletKind;
use super::registry::{Lookup, RegistryStats, SpriteRegistry};
use crate::error::Result;

/// Hands out bullets, building each kind's sprite on first request.
#[derive(Debug, Default)]
pub struct BulletFactory {
    registry: SpriteRegistry,
}

impl BulletFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: SpriteRegistry) -> Self {
        BulletFactory { registry }
    }

    pub fn acquire(&mut self, kind: BulletKind) -> Bullet {
        self.acquire_traced(kind).0
    }

    /// Like [`acquire`](Self::acquire), also reporting whether the sprite was
    /// built by this call.
    pub fn acquire_traced(&mut self, kind: BulletKind) -> (Bullet, bool) {
        let Lookup { sprite, created } = self.registry.get_or_create(kind);
        tracing::debug!(%kind, created, "creating bullet object");
        (Bullet::new(sprite), created)
    }

    /// Acquire by numeric code. Unknown codes fail before the registry is touched.
    pub fn acquire_code(&mut self, code: u8) -> Result<Bullet> {
        let kind = BulletKind::try_from(code)?;
        Ok(self.acquire(kind))
    }

    /// Acquire by name (`gun`, `LASER_BULLET`, ...).
    pub fn acquire_named(&mut self, name: &str) -> Result<Bullet> {
        let kind = name.parse::<BulletKind>()?;
        Ok(self.acquire(kind))
    }

    pub fn registry(&self) -> &SpriteRegistry {
        &self.registry
    }

    pub fn stats(&self) -> RegistryStats {
        self.registry.stats()
    }
}
