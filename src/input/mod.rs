mod handler;

pub use handler::{resolve_direction, InputHandler};
