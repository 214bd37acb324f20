use macroquad::math::Rect;

use crate::game::bear::BEAR_SIZE;
use crate::game::{Bear, Berry};

/// Bear sheet layout: idle + two leg frames per facing, one row per facing.
pub const BEAR_SHEET_COLUMNS: usize = 3;
pub const BEAR_SHEET_ROWS: usize = 4;

/// Which sheet a drawable's current frame comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteRef {
    /// Costume index into the 3x4 bear sheet.
    Bear(usize),
    /// The single-frame berry sprite.
    Berry,
}

/// Anything the renderer can draw: a world-space footprint plus the sprite
/// frame to blit there. The renderer consumes every entity through this one
/// capability instead of per-type draw methods.
pub trait Drawable {
    fn world_rect(&self) -> Rect;
    fn sprite(&self) -> SpriteRef;
}

impl Drawable for Bear {
    fn world_rect(&self) -> Rect {
        self.bounding_rect()
    }

    fn sprite(&self) -> SpriteRef {
        SpriteRef::Bear(self.costume())
    }
}

impl Drawable for Berry {
    fn world_rect(&self) -> Rect {
        self.bounding_rect()
    }

    fn sprite(&self) -> SpriteRef {
        SpriteRef::Berry
    }
}

/// Source rectangle in the bear sheet for a costume index.
pub fn bear_source_rect(costume: usize) -> Rect {
    let row = costume / BEAR_SHEET_COLUMNS;
    let col = costume % BEAR_SHEET_COLUMNS;
    Rect::new(
        col as f32 * BEAR_SIZE,
        row as f32 * BEAR_SIZE,
        BEAR_SIZE,
        BEAR_SIZE,
    )
}
