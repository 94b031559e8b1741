mod control;
mod grid;
mod noise;
mod point;
mod scene;

pub use control::{ControlEvent, ControlState};
pub use grid::PointGrid;
pub use noise::NoiseField;
pub use point::Point;
pub use scene::Scene;
