pub mod commands;
mod coordinate;
pub mod events;
mod motion;
pub mod route;
mod viewport;

pub use coordinate::GeoCoordinate;
pub use motion::{Direction, DriveMode, MotionState};
pub use viewport::{PixelPoint, ViewportExtent};
