//! The 2D paint surface seam.
//!
//! The renderer only speaks this vocabulary; the wgpu backend and the test
//! doubles both implement it. The contract mirrors an immediate-mode canvas:
//! a current fill style, a current transform with a save/restore stack, and
//! axis-aligned rect fills that go through that transform.

/// Fill color accepted by a paint surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fill {
    /// Hue/saturation/lightness/alpha. Hue is a color-wheel angle in degrees
    /// and may be any real value; it wraps modulo 360 at conversion time.
    /// Saturation and lightness are percentages in [0, 100].
    Hsla { h: f64, s: f64, l: f64, a: f64 },
    /// 8-bit RGB plus fractional alpha in [0, 1].
    Rgba { r: u8, g: u8, b: u8, a: f64 },
}

impl Fill {
    pub fn hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self::Hsla { h, s, l, a }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self::Rgba { r, g, b, a }
    }

    /// Convert to non-premultiplied sRGB components in [0, 1].
    pub fn to_rgba(self) -> [f32; 4] {
        match self {
            Self::Hsla { h, s, l, a } => {
                let [r, g, b] = hsl_to_rgb(h, s / 100.0, l / 100.0);
                [r as f32, g as f32, b as f32, a as f32]
            }
            Self::Rgba { r, g, b, a } => [
                f32::from(r) / 255.0,
                f32::from(g) / 255.0,
                f32::from(b) / 255.0,
                a as f32,
            ],
        }
    }
}

/// HSL to RGB with `s` and `l` already normalized to [0, 1].
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [f64; 3] {
    let h = h.rem_euclid(360.0);
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [r + m, g + m, b + m]
}

/// Minimal 2D paint surface: fill-rect, save/restore and rotate on a shared
/// transform, plus a current fill style. Rotation is about the surface
/// origin, so successive `rotate` calls compound.
pub trait PaintSurface {
    /// Push the current transform onto the save stack.
    fn save(&mut self);
    /// Pop the save stack into the current transform. No-op when empty.
    fn restore(&mut self);
    /// Compound a rotation (radians) onto the current transform.
    fn rotate(&mut self, radians: f64);
    /// Set the fill style used by subsequent `fill_rect` calls.
    fn set_fill(&mut self, fill: Fill);
    /// Fill the axis-aligned rect `(x, y, w, h)` through the current
    /// transform with the current fill style.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
}
