//! Decorative canvas animations: scene generation, drawing and the frame loop.

mod component;
mod driver;
mod error;
mod layout;
mod painter;
mod render;
mod scene;
mod surface;
mod typewriter;
mod types;

pub use component::AnimatedCanvas;
pub use surface::SurfaceHeight;
pub use types::SceneKind;
