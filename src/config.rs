/// Grid resolution: points are seeded on a GRID_COUNT x GRID_COUNT lattice.
/// Raising this far beyond the default is a known way to make the host
/// unresponsive; it is an operational caveat, not a guarded error.
pub const GRID_COUNT: u32 = 125;

/// Probability that a lattice cell survives the stochastic thinning pass.
pub const KEEP_PROBABILITY: f64 = 0.2;

/// Fraction of the surface *width* reserved as margin on every edge.
/// Both axes use the width-derived margin.
pub const MARGIN_FRACTION: f64 = 0.1;

/// Alpha of the translucent white overlay painted each frame. Prior frames
/// fade through it instead of disappearing, producing the trail effect.
pub const FADE_STRENGTH: f64 = 0.1;

/// Painted size of a single point, in pixels.
pub const POINT_WIDTH: f64 = 20.0;
pub const POINT_HEIGHT: f64 = 20.0;

/// Saturation and lightness of every point fill, in percent.
pub const POINT_SATURATION: f64 = 75.0;
pub const POINT_LIGHTNESS: f64 = 80.0;

/// Hue spread between adjacent lattice rows, in degrees.
pub const HUE_ROW_STEP: f64 = 3.6;

/// Magnitude the increase/decrease controls assign to the alteration value.
pub const ALTERATION_STEP: f64 = 0.5;

/// Divisor turning the alteration value into a per-frame displacement.
pub const ALTERATION_SCALE: f64 = 20000.0;

/// Per-frame increment of the global fade-in alpha, which ramps from 0 to 1
/// after startup and never resets.
pub const ALPHA_STEP: f64 = 0.01;

/// Alpha of the one-time black backdrop fill painted before the first frame.
pub const BACKDROP_ALPHA: f64 = 0.1;

/// Default window size; the paint viewport is captured from the actual
/// surface once at startup and stays fixed afterwards.
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 800;

/// Window title prefix; runtime state indicators are appended.
pub const WINDOW_TITLE: &str = "Noise Grid";
