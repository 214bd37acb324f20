use macroquad::math::{Rect, Vec2};

use crate::error::GameError;
use crate::geom;

/// A world-anchored view rectangle of fixed size (the screen dimensions).
/// Follows a target each tick, then gets clamped to the world, so the view
/// never shows anything outside the play area.
#[derive(Debug, Clone)]
pub struct Camera {
    center: Vec2,
    size: Vec2,
    top_left: Vec2,
}

impl Camera {
    pub fn new(center: Vec2, size: Vec2) -> Result<Self, GameError> {
        if size.x <= 0.0 || size.y <= 0.0 {
            return Err(GameError::InvalidBounds(size.x, size.y));
        }
        Ok(Self {
            center,
            size,
            top_left: center - size / 2.0,
        })
    }

    /// Re-center the view on a world position.
    pub fn move_to(&mut self, center: Vec2) {
        self.center = center;
        self.top_left = center - self.size / 2.0;
    }

    /// Push the view rect back inside `bounds`; center and top-left are
    /// recomputed from the clamped rect.
    pub fn clamp(&mut self, bounds: Rect) {
        let clamped = geom::clamp_into(self.view_rect(), bounds);
        self.top_left = clamped.point();
        self.center = clamped.center();
    }

    /// World -> view-space conversion. Callers use this only after the
    /// current frame's move_to + clamp, or the offset is stale.
    pub fn to_view(&self, world_point: Vec2) -> Vec2 {
        world_point - self.top_left
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn top_left(&self) -> Vec2 {
        self.top_left
    }

    pub fn view_rect(&self) -> Rect {
        Rect::new(self.top_left.x, self.top_left.y, self.size.x, self.size.y)
    }
}
