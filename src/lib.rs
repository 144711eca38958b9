pub mod camera;
pub mod config;
pub mod geometry;
pub mod map;
pub mod mover;
pub mod projection;
pub mod raycast;
pub mod renderer;
pub mod slider;

pub use camera::{RayCamera, Viewport};
pub use config::{Config, ConfigError};
pub use geometry::{Point, Wall};
pub use map::Map;
pub use mover::{Intents, Mover};
pub use projection::Projection;
pub use raycast::{RayResult, render};
pub use slider::Slider;
