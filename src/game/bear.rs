use macroquad::math::{vec2, Rect, Vec2};

use crate::error::GameError;
use crate::geom;

/// Bear sprite size in world pixels (one sheet cell).
pub const BEAR_SIZE: f32 = 50.0;

/// Walking speed in world pixels per second.
pub const WALK_SPEED: f32 = 250.0;

/// Seconds each walking leg frame stays on screen.
pub const WALK_FRAME_SECS: f64 = 0.25;

/// Costumes per facing in the sheet: one idle pose plus two leg frames.
const COSTUMES_PER_FACING: usize = 3;

/// The 4 cardinal facings. Ordered to match the sprite sheet rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Up
    }
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    pub fn to_unit_vector(self) -> Vec2 {
        match self {
            Direction::Up => vec2(0.0, -1.0),
            Direction::Left => vec2(-1.0, 0.0),
            Direction::Right => vec2(1.0, 0.0),
            Direction::Down => vec2(0.0, 1.0),
        }
    }

    /// Row of this facing's costumes in the bear sheet.
    pub fn sheet_row(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Left => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }

    /// Map a unit vector back onto a facing. Anything that is not exactly
    /// one of the 4 cardinal unit vectors is rejected.
    pub fn try_from_vector(v: Vec2) -> Result<Direction, GameError> {
        Direction::ALL
            .into_iter()
            .find(|d| d.to_unit_vector() == v)
            .ok_or(GameError::InvalidDirection(v.x, v.y))
    }
}

/// The player character. Position is the center of its bounding rect, in
/// world pixels. Movement is dt-scaled so displacement is frame-rate
/// independent.
#[derive(Debug, Clone)]
pub struct Bear {
    position: Vec2,
    direction: Direction,
    walking: bool,
    walk_started: f64,
    last_tick: f64,
    costume: usize,
}

impl Bear {
    pub fn new(position: Vec2, now: f64) -> Self {
        Self {
            position,
            direction: Direction::default(),
            walking: false,
            walk_started: now,
            last_tick: now,
            costume: 0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_walking(&self) -> bool {
        self.walking
    }

    /// Index of the current pose in the 3x4 bear sheet.
    pub fn costume(&self) -> usize {
        self.costume
    }

    /// Face a direction without moving. Takes effect on the next update,
    /// even mid-walk.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Start or stop walking. Starting re-arms the leg animation clock so
    /// the walk cycle always begins at frame 0.
    pub fn set_walking(&mut self, walking: bool) {
        if walking && !self.walking {
            self.walk_started = self.last_tick;
        }
        self.walking = walking;
    }

    /// Advance one tick. `now` comes from the shared monotonic clock; there
    /// is no upper bound on the tick delta, a stalled frame simply produces
    /// one large displacement.
    pub fn update(&mut self, now: f64) {
        let row = self.direction.sheet_row();
        if self.walking {
            let dt = (now - self.last_tick) as f32;
            self.position += self.direction.to_unit_vector() * WALK_SPEED * dt;
            let frame = ((now - self.walk_started) / WALK_FRAME_SECS) as u64;
            self.costume = row * COSTUMES_PER_FACING + 1 + (frame % 2) as usize;
        } else {
            // keep re-arming so a later walk starts its cycle fresh
            self.walk_started = now;
            self.costume = row * COSTUMES_PER_FACING;
        }
        self.last_tick = now;
    }

    /// Push the bounding rect back inside `bounds` and resync the position
    /// to the clamped rect's center. No-op when already inside.
    pub fn clamp_to(&mut self, bounds: Rect) {
        let clamped = geom::clamp_into(self.bounding_rect(), bounds);
        self.position = clamped.center();
    }

    pub fn bounding_rect(&self) -> Rect {
        Rect::new(
            self.position.x - BEAR_SIZE / 2.0,
            self.position.y - BEAR_SIZE / 2.0,
            BEAR_SIZE,
            BEAR_SIZE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_vector_roundtrip() {
        for dir in Direction::ALL {
            assert_eq!(Direction::try_from_vector(dir.to_unit_vector()), Ok(dir));
        }
    }

    #[test]
    fn test_diagonal_vector_is_rejected() {
        let err = Direction::try_from_vector(vec2(1.0, 1.0));
        assert_eq!(err, Err(GameError::InvalidDirection(1.0, 1.0)));
        assert!(Direction::try_from_vector(vec2(0.0, 0.0)).is_err());
    }

    #[test]
    fn test_walk_displacement_is_exact() {
        for dir in Direction::ALL {
            let mut bear = Bear::new(vec2(320.0, 180.0), 0.0);
            bear.set_direction(dir);
            bear.set_walking(true);
            bear.update(0.1);
            let expected = vec2(320.0, 180.0) + dir.to_unit_vector() * WALK_SPEED * 0.1;
            assert_eq!(bear.position(), expected);
        }
    }

    #[test]
    fn test_idle_bear_does_not_move() {
        let mut bear = Bear::new(vec2(100.0, 100.0), 0.0);
        bear.set_direction(Direction::Right);
        bear.update(5.0);
        assert_eq!(bear.position(), vec2(100.0, 100.0));
        assert_eq!(bear.costume(), Direction::Right.sheet_row() * 3);
    }

    #[test]
    fn test_facing_change_does_not_move_until_update() {
        let mut bear = Bear::new(vec2(100.0, 100.0), 0.0);
        bear.set_direction(Direction::Down);
        assert_eq!(bear.position(), vec2(100.0, 100.0));
    }

    #[test]
    fn test_walk_frames_alternate() {
        let mut bear = Bear::new(vec2(500.0, 500.0), 0.0);
        bear.set_direction(Direction::Down);
        bear.set_walking(true);

        let row = Direction::Down.sheet_row();
        bear.update(0.1);
        assert_eq!(bear.costume(), row * 3 + 1); // frame 0
        bear.update(0.3);
        assert_eq!(bear.costume(), row * 3 + 2); // frame 1
        bear.update(0.6);
        assert_eq!(bear.costume(), row * 3 + 1); // frame 2 wraps back
    }

    #[test]
    fn test_walk_restart_resets_animation_phase() {
        let mut bear = Bear::new(vec2(500.0, 500.0), 0.0);
        bear.set_walking(true);
        bear.update(0.3); // mid-cycle, on the second leg frame
        assert_eq!(bear.costume(), 2);

        bear.set_walking(false);
        bear.update(10.0); // idle re-arms the clock
        bear.set_walking(true);
        bear.update(10.1);
        // back on the first leg frame regardless of prior walking history
        assert_eq!(bear.costume(), 1);
    }

    #[test]
    fn test_clamp_inside_is_noop() {
        let bounds = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let mut bear = Bear::new(vec2(320.0, 180.0), 0.0);
        bear.clamp_to(bounds);
        assert_eq!(bear.position(), vec2(320.0, 180.0));
    }

    #[test]
    fn test_walking_into_edge_stays_clamped_but_keeps_animating() {
        let bounds = Rect::new(0.0, 0.0, 1000.0, 1000.0);
        let mut bear = Bear::new(vec2(30.0, 500.0), 0.0);
        bear.set_direction(Direction::Left);
        bear.set_walking(true);

        let mut costumes = Vec::new();
        for tick in 1..=8 {
            bear.update(tick as f64 * 0.25);
            bear.clamp_to(bounds);
            costumes.push(bear.costume());
        }

        // pinned to the edge, still walking
        assert_eq!(bear.position().x, BEAR_SIZE / 2.0);
        assert!(bear.is_walking());
        // leg frames kept alternating the whole time
        assert!(costumes.windows(2).all(|w| w[0] != w[1]));
    }
}
