use macroquad::prelude::*;

use crate::game::{Direction, Session};

/// Keys that map onto the 4 cardinal directions (arrows and WASD).
const DIRECTION_KEYS: [(KeyCode, Direction); 8] = [
    (KeyCode::Up, Direction::Up),
    (KeyCode::Left, Direction::Left),
    (KeyCode::Down, Direction::Down),
    (KeyCode::Right, Direction::Right),
    (KeyCode::W, Direction::Up),
    (KeyCode::A, Direction::Left),
    (KeyCode::S, Direction::Down),
    (KeyCode::D, Direction::Right),
];

/// Translates macroquad key state into session commands, once per frame.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Apply this frame's key transitions to the session. Returns true when
    /// the player asked to quit.
    pub fn process(&mut self, session: &mut Session) -> bool {
        if is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q) {
            return true;
        }

        let any_pressed = DIRECTION_KEYS.iter().any(|(key, _)| is_key_pressed(*key));
        if any_pressed {
            let dir = resolve_direction(
                direction_held(Direction::Up),
                direction_held(Direction::Left),
                direction_held(Direction::Down),
                direction_held(Direction::Right),
            );
            if let Some(dir) = dir {
                session.set_direction(dir);
                session.set_walking(true);
            }
        }

        // Any release stops walking, without inspecting which key went up.
        // No per-key state tracking, matching the one-direction-at-a-time
        // movement model.
        if DIRECTION_KEYS.iter().any(|(key, _)| is_key_released(*key)) {
            session.set_walking(false);
        }

        false
    }
}

fn direction_held(direction: Direction) -> bool {
    DIRECTION_KEYS
        .iter()
        .any(|(key, d)| *d == direction && is_key_down(*key))
}

/// Pick exactly one direction from the held set. Precedence is fixed: Up,
/// Left, Down, Right. Holding several directions honors the first match
/// only, so there is no diagonal movement.
pub fn resolve_direction(up: bool, left: bool, down: bool, right: bool) -> Option<Direction> {
    if up {
        Some(Direction::Up)
    } else if left {
        Some(Direction::Left)
    } else if down {
        Some(Direction::Down)
    } else if right {
        Some(Direction::Right)
    } else {
        None
    }
}
