//! Thread-safe registry and factory.
//!
//! The lookup-or-insert runs under the shard lock held by the `DashMap`
//! entry, so two threads racing on the same kind still build one sprite.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, ScopedJoinHandle};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use super::bullet::Bullet;
use super::kind::BulletKind;
use super::registry::{Lookup, RegistryStats};
use super::sprite::Sprite;
use crate::error::{PatternError, Result};

#[derive(Debug, Default)]
pub struct SharedSpriteRegistry {
    sprites: DashMap<BulletKind, Arc<Sprite>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl SharedSpriteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(&self, kind: BulletKind) -> Lookup {
        match self.sprites.entry(kind) {
            Entry::Occupied(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Lookup {
                    sprite: Arc::clone(entry.get()),
                    created: false,
                }
            }
            Entry::Vacant(entry) => {
                tracing::info!(%kind, "creating sprite");
                let sprite = Arc::new(Sprite::new(kind));
                entry.insert(Arc::clone(&sprite));
                self.misses.fetch_add(1, Ordering::Relaxed);
                Lookup {
                    sprite,
                    created: true,
                }
            }
        }
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
        RegistryStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

/// [`BulletFactory`](super::BulletFactory) variant usable through `&self`
/// from many threads.
#[derive(Debug, Default)]
pub struct SharedBulletFactory {
    registry: SharedSpriteRegistry,
}

impl SharedBulletFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self, kind: BulletKind) -> Bullet {
        Bullet::new(self.registry.get_or_create(kind).sprite)
    }

    pub fn acquire_code(&self, code: u8) -> Result<Bullet> {
        Ok(self.acquire(BulletKind::try_from(code)?))
    }

    pub fn acquire_named(&self, name: &str) -> Result<Bullet> {
        Ok(self.acquire(name.parse()?))
    }

    pub fn registry(&self) -> &SharedSpriteRegistry {
        &self.registry
    }

    /// Fire `per_worker` bullets of each kind, one scoped thread per entry
    /// in `kinds`. Bullets come back grouped in `kinds` order.
    pub fn fire_parallel(&self, kinds: &[BulletKind], per_worker: usize) -> Result<Vec<Bullet>> {
        thread::scope(|s| {
            let workers: Vec<_> = kinds
                .iter()
                .map(|&kind| {
                    s.spawn(move || {
                        (0..per_worker)
                            .map(|_| self.acquire(kind))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            let batches = join_workers(workers)?;
            Ok(batches.into_iter().flatten().collect())
        })
    }
}

/// Join every worker before reporting, so a panic in one never leaves the
/// others running unobserved.
fn join_workers<T>(workers: Vec<ScopedJoinHandle<'_, T>>) -> Result<Vec<T>> {
    let joined: Vec<_> = workers.into_iter().map(|w| w.join()).collect();
    joined
        .into_iter()
        .map(|r| r.map_err(|_| PatternError::WorkerPanicked))
        .collect()
}
