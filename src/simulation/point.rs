/// A single animated grid point.
///
/// Coordinates are normalized to the unit square at creation and drift freely
/// under alteration; nothing clamps or wraps them. Hue is a color-wheel angle
/// in degrees, unbounded; the paint color wraps it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Color-wheel angle in degrees, incremented every frame.
    pub hue: f64,
    /// Normalized horizontal position, nominally in [0, 1].
    pub x: f64,
    /// Normalized vertical position, nominally in [0, 1].
    pub y: f64,
    /// Rotation accumulator; advances only while carnage mode is active.
    pub rotation: f64,
}
