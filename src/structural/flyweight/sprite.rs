use std::io::Write;

use super::kind::BulletKind;

/// Bytes of pixel data behind every sprite.
pub const SPRITE_BUFFER_SIZE: usize = 1000;

/// Heavyweight image data shared by every bullet of one kind.
///
/// Immutable once built; the registry and each bullet hold it through an
/// `Arc`, so it lives as long as the longest holder.
#[derive(Debug)]
pub struct Sprite {
    kind: BulletKind,
    pixels: Box<[u8]>,
}

impl Sprite {
    pub(crate) fn new(kind: BulletKind) -> Self {
        Sprite {
            kind,
            pixels: vec![0u8; SPRITE_BUFFER_SIZE].into_boxed_slice(),
        }
    }

    pub fn kind(&self) -> BulletKind {
        self.kind
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn draw(&self, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "{}Sprite::Draw()", self.kind.type_name())
    }
}
