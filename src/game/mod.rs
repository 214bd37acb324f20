pub mod bear;
pub mod berry;
pub mod camera;
pub mod session;
pub mod world;

pub use bear::{Bear, Direction};
pub use berry::Berry;
pub use camera::Camera;
pub use session::Session;
pub use world::World;
