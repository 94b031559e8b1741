//! Translates the point grid into paint operations on a [`PaintSurface`].
//!
//! Pure over the data model: the same scene state painted onto any surface
//! implementation yields the same operation sequence.

use crate::config::{
    BACKDROP_ALPHA, FADE_STRENGTH, MARGIN_FRACTION, POINT_HEIGHT, POINT_LIGHTNESS,
    POINT_SATURATION, POINT_WIDTH,
};
use crate::paint::{Fill, PaintSurface};
use crate::simulation::{ControlState, PointGrid};

/// Paint geometry captured once at startup. Later window resizes do not
/// re-derive it; the animation keeps its startup coordinate space.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    /// Margin on every edge. Derived from the width on both axes.
    pub fn margin(&self) -> f64 {
        self.width * MARGIN_FRACTION
    }
}

fn lerp(v0: f64, v1: f64, t: f64) -> f64 {
    v0 * (1.0 - t) + v1 * t
}

/// One-time translucent black fill painted before the first frame.
pub fn paint_backdrop(viewport: Viewport, surface: &mut dyn PaintSurface) {
    surface.set_fill(Fill::rgba(0, 0, 0, BACKDROP_ALPHA));
    surface.fill_rect(0.0, 0.0, viewport.width, viewport.height);
}

/// Paint one frame: the fade overlay, then every point in grid order.
pub fn paint_frame(
    grid: &PointGrid,
    controls: &ControlState,
    viewport: Viewport,
    surface: &mut dyn PaintSurface,
) {
    paint_fade(controls, viewport, surface);
    paint_grid(grid, controls, viewport, surface);
}

/// Translucent white overlay that fades prior frames. A paused animation
/// changes less per frame, so it fades twice as hard.
fn paint_fade(controls: &ControlState, viewport: Viewport, surface: &mut dyn PaintSurface) {
    let mut fade = FADE_STRENGTH;
    if controls.alteration == 0.0 {
        fade *= 2.0;
    }
    surface.set_fill(Fill::rgba(255, 255, 255, fade));
    surface.fill_rect(0.0, 0.0, viewport.width, viewport.height);
}

fn paint_grid(
    grid: &PointGrid,
    controls: &ControlState,
    viewport: Viewport,
    surface: &mut dyn PaintSurface,
) {
    let margin = viewport.margin();
    surface.save();

    for point in &grid.points {
        // Each point's rotation compounds onto the transform left by the
        // previous one; the save/restore pair scopes the drift to this frame.
        surface.rotate(point.rotation * point.rotation);

        surface.set_fill(Fill::hsla(
            point.hue,
            POINT_SATURATION,
            POINT_LIGHTNESS,
            controls.alpha,
        ));
        surface.fill_rect(
            lerp(margin, viewport.width - margin, point.x),
            lerp(margin, viewport.height - margin, point.y),
            POINT_WIDTH,
            POINT_HEIGHT,
        );
    }

    surface.restore();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Point;

    #[derive(Debug, PartialEq)]
    enum Op {
        Save,
        Restore,
        Rotate(f64),
        SetFill(Fill),
        FillRect(f64, f64, f64, f64),
    }

    #[derive(Default)]
    struct RecordingSurface {
        ops: Vec<Op>,
    }

    impl PaintSurface for RecordingSurface {
        fn save(&mut self) {
            self.ops.push(Op::Save);
        }
        fn restore(&mut self) {
            self.ops.push(Op::Restore);
        }
        fn rotate(&mut self, radians: f64) {
            self.ops.push(Op::Rotate(radians));
        }
        fn set_fill(&mut self, fill: Fill) {
            self.ops.push(Op::SetFill(fill));
        }
        fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
            self.ops.push(Op::FillRect(x, y, w, h));
        }
    }

    fn grid_of(points: Vec<Point>) -> PointGrid {
        PointGrid {
            rotation: 0.0,
            points,
        }
    }

    fn point(x: f64, y: f64, hue: f64, rotation: f64) -> Point {
        Point {
            hue,
            x,
            y,
            rotation,
        }
    }

    #[test]
    fn backdrop_is_translucent_black() {
        let mut surface = RecordingSurface::default();
        paint_backdrop(Viewport::new(100, 50), &mut surface);
        assert_eq!(
            surface.ops,
            vec![
                Op::SetFill(Fill::rgba(0, 0, 0, BACKDROP_ALPHA)),
                Op::FillRect(0.0, 0.0, 100.0, 50.0),
            ]
        );
    }

    #[test]
    fn fade_overlay_comes_first_and_covers_surface() {
        let mut surface = RecordingSurface::default();
        let mut controls = ControlState::new();
        controls.alteration = 0.5;
        paint_frame(&grid_of(vec![]), &controls, Viewport::new(800, 600), &mut surface);

        assert_eq!(surface.ops[0], Op::SetFill(Fill::rgba(255, 255, 255, FADE_STRENGTH)));
        assert_eq!(surface.ops[1], Op::FillRect(0.0, 0.0, 800.0, 600.0));
    }

    #[test]
    fn fade_doubles_when_paused() {
        let mut surface = RecordingSurface::default();
        let controls = ControlState::new();
        paint_frame(&grid_of(vec![]), &controls, Viewport::new(800, 600), &mut surface);

        assert_eq!(
            surface.ops[0],
            Op::SetFill(Fill::rgba(255, 255, 255, FADE_STRENGTH * 2.0))
        );
    }

    #[test]
    fn grid_pass_is_bracketed_by_save_restore() {
        let mut surface = RecordingSurface::default();
        let controls = ControlState::new();
        let grid = grid_of(vec![point(0.5, 0.5, 90.0, 0.0)]);
        paint_frame(&grid, &controls, Viewport::new(800, 600), &mut surface);

        assert_eq!(surface.ops[2], Op::Save);
        assert_eq!(*surface.ops.last().unwrap(), Op::Restore);
    }

    #[test]
    fn each_point_rotates_by_accumulator_squared() {
        let mut surface = RecordingSurface::default();
        let controls = ControlState::new();
        let grid = grid_of(vec![
            point(0.0, 0.0, 0.0, 2.0),
            point(1.0, 1.0, 0.0, -3.0),
        ]);
        paint_frame(&grid, &controls, Viewport::new(800, 600), &mut surface);

        let rotations: Vec<f64> = surface
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Rotate(r) => Some(*r),
                _ => None,
            })
            .collect();
        assert_eq!(rotations, vec![4.0, 9.0]);
    }

    #[test]
    fn points_paint_inside_width_derived_margins() {
        let mut surface = RecordingSurface::default();
        let mut controls = ControlState::new();
        controls.alpha = 0.75;
        let viewport = Viewport::new(1000, 500);
        let grid = grid_of(vec![point(0.0, 0.0, 42.0, 0.0), point(1.0, 1.0, 42.0, 0.0)]);
        paint_frame(&grid, &controls, viewport, &mut surface);

        // Margin is 10% of the width (100 px) on both axes.
        let rects: Vec<&Op> = surface
            .ops
            .iter()
            .filter(|op| matches!(op, Op::FillRect(..)))
            .collect();
        assert_eq!(rects[1], &Op::FillRect(100.0, 100.0, POINT_WIDTH, POINT_HEIGHT));
        assert_eq!(rects[2], &Op::FillRect(900.0, 400.0, POINT_WIDTH, POINT_HEIGHT));
    }

    #[test]
    fn point_fill_carries_global_alpha_and_hue() {
        let mut surface = RecordingSurface::default();
        let mut controls = ControlState::new();
        controls.alpha = 0.3;
        let grid = grid_of(vec![point(0.5, 0.5, 450.0, 0.0)]);
        paint_frame(&grid, &controls, Viewport::new(800, 600), &mut surface);

        let fill = surface.ops.iter().rev().find_map(|op| match op {
            Op::SetFill(fill) => Some(*fill),
            _ => None,
        });
        assert_eq!(
            fill,
            Some(Fill::hsla(450.0, POINT_SATURATION, POINT_LIGHTNESS, 0.3))
        );
    }
}
