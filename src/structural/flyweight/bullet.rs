use std::io::Write;
use std::sync::Arc;

use super::kind::BulletKind;
use super::sprite::Sprite;

/// One in-flight bullet: its own position and velocity, plus the shared sprite.
#[derive(Debug, Clone)]
pub struct Bullet {
    position: (i32, i32),
    velocity: (i32, i32),
    sprite: Arc<Sprite>,
}

impl Bullet {
    pub(crate) fn new(sprite: Arc<Sprite>) -> Self {
        Bullet {
            position: (0, 0),
            velocity: sprite.kind().muzzle_velocity(),
            sprite,
        }
    }

    pub fn kind(&self) -> BulletKind {
        self.sprite.kind()
    }

    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    pub fn velocity(&self) -> (i32, i32) {
        self.velocity
    }

    pub fn sprite(&self) -> &Arc<Sprite> {
        &self.sprite
    }

    pub fn move_to(&mut self, x: i32, y: i32) {
        self.position = (x, y);
    }

    /// Step one tick along the velocity. Positions clamp at the `i32` bounds.
    pub fn advance(&mut self) {
        self.position.0 = self.position.0.saturating_add(self.velocity.0);
        self.position.1 = self.position.1.saturating_add(self.velocity.1);
    }

    pub fn draw(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(
            out,
            "{}::Draw() is calling Sprite::Draw() at ({}, {})",
            self.kind().type_name(),
            self.position.0,
            self.position.1
        )?;
        self.sprite.draw(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gun_bullet() -> Bullet {
        Bullet::new(Arc::new(Sprite::new(BulletKind::Gun)))
    }

    #[test]
    fn test_new_bullet_starts_at_origin() {
        let bullet = gun_bullet();
        assert_eq!(bullet.position(), (0, 0));
        assert_eq!(bullet.velocity(), BulletKind::Gun.muzzle_velocity());
    }

    #[test]
    fn test_advance_and_move() {
        let mut bullet = gun_bullet();
        bullet.advance();
        bullet.advance();
        assert_eq!(bullet.position(), (8, 0));

        bullet.move_to(-3, 5);
        assert_eq!(bullet.position(), (-3, 5));
    }

    #[test]
    fn test_advance_clamps_at_edge() {
        let mut bullet = Bullet::new(Arc::new(Sprite::new(BulletKind::Rocket)));
        bullet.move_to(i32::MAX, i32::MAX);
        bullet.advance();
        assert_eq!(bullet.position(), (i32::MAX, i32::MAX));

        let mut gun = gun_bullet();
        gun.move_to(i32::MAX - 1, i32::MIN);
        gun.advance();
        assert_eq!(gun.position(), (i32::MAX, i32::MIN));
    }

    #[test]
    fn test_cloned_bullet_moves_independently() {
        let first = gun_bullet();
        let mut second = first.clone();
        second.advance();

        assert_eq!(first.position(), (0, 0));
        assert!(Arc::ptr_eq(first.sprite(), second.sprite()));
    }

    #[test]
    fn test_draw_delegates_to_sprite_once() {
        let mut out = Vec::new();
        gun_bullet().draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "GunBullet::Draw() is calling Sprite::Draw() at (0, 0)");
        assert_eq!(lines[1], "GunBulletSprite::Draw()");
    }
}
