pub mod sprite;
mod renderer;

pub use renderer::Renderer;
pub use sprite::{Drawable, SpriteRef};
