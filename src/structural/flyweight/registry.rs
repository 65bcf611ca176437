use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::kind::BulletKind;
use super::sprite::Sprite;

/// Hit/miss counters. Every miss is one sprite construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    pub hits: usize,
    pub misses: usize,
}

impl RegistryStats {
    pub fn lookups(&self) -> usize {
        self.hits + self.misses
    }
}

/// Result of a registry lookup: the sprite, and whether this call built it.
#[derive(Debug, Clone)]
pub struct Lookup {
    pub sprite: Arc<Sprite>,
    pub created: bool,
}

/// Append-only cache holding at most one sprite per bullet kind.
#[derive(Debug, Default)]
pub struct SpriteRegistry {
    sprites: FxHashMap<BulletKind, Arc<Sprite>>,
    stats: RegistryStats,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(&mut self, kind: BulletKind) -> Lookup {
        if let Some(sprite) = self.sprites.get(&kind) {
            self.stats.hits += 1;
            tracing::debug!(%kind, "sprite cache hit");
            return Lookup {
                sprite: Arc::clone(sprite),
                created: false,
            };
        }

        tracing::info!(%kind, "creating sprite");
        let sprite = Arc::new(Sprite::new(kind));
        self.sprites.insert(kind, Arc::clone(&sprite));
        self.stats.misses += 1;
        Lookup {
            sprite,
            created: true,
        }
    }

    pub fn get(&self, kind: BulletKind) -> Option<&Arc<Sprite>> {
        self.sprites.get(&kind)
    }

    pub fn contains(&self, kind: BulletKind) -> bool {
        self.sprites.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn stats(&self) -> RegistryStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_lookup_creates() {
        let mut registry = SpriteRegistry::new();
        assert!(registry.is_empty());

        let lookup = registry.get_or_create(BulletKind::Gun);
        assert!(lookup.created);
        assert!(registry.contains(BulletKind::Gun));
        assert_eq!(registry.stats(), RegistryStats { hits: 0, misses: 1 });
    }

    #[test]
    fn test_second_lookup_reuses_same_instance() {
        let mut registry = SpriteRegistry::new();
        let first = registry.get_or_create(BulletKind::Gun);
        let second = registry.get_or_create(BulletKind::Gun);

        assert!(!second.created);
        assert!(Arc::ptr_eq(&first.sprite, &second.sprite));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.stats().lookups(), 2);
    }

    #[test]
    fn test_kinds_get_distinct_sprites() {
        let mut registry = SpriteRegistry::new();
        let gun = registry.get_or_create(BulletKind::Gun).sprite;
        let laser = registry.get_or_create(BulletKind::Laser).sprite;

        assert!(!Arc::ptr_eq(&gun, &laser));
        assert_eq!(laser.kind(), BulletKind::Laser);
        assert!(registry.get(BulletKind::Rocket).is_none());
    }

    #[test]
    fn test_sprite_outlives_registry() {
        let sprite = {
            let mut registry = SpriteRegistry::new();
            registry.get_or_create(BulletKind::Rocket).sprite
        };
        assert_eq!(Arc::strong_count(&sprite), 1);
        assert_eq!(sprite.kind(), BulletKind::Rocket);
    }
}
