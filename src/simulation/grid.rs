use rand::Rng;

use crate::config::{ALTERATION_SCALE, HUE_ROW_STEP, KEEP_PROBABILITY};
use crate::simulation::control::ControlState;
use crate::simulation::noise::NoiseField;
use crate::simulation::point::Point;

/// The animated point collection.
///
/// Populated once per (re)start and then only mutated in place; the point
/// count never changes between restarts.
pub struct PointGrid {
    /// Aggregate rotation, set at creation and never advanced. Per-point
    /// rotation lives on [`Point::rotation`].
    #[allow(dead_code)]
    pub rotation: f64,
    pub points: Vec<Point>,
}

impl PointGrid {
    /// Seed a dense `count x count` lattice of normalized coordinates, then
    /// keep each candidate with [`KEEP_PROBABILITY`]. The filter preserves
    /// relative order, so retained points stay in lattice order (later points
    /// paint over earlier ones where they overlap).
    pub fn populate<R: Rng>(count: u32, rng: &mut R) -> Self {
        let mut points = Vec::with_capacity((count * count) as usize);
        for col in 0..count {
            for row in 0..count {
                points.push(Point {
                    hue: f64::from(count - row) * HUE_ROW_STEP,
                    x: f64::from(col) / f64::from(count),
                    y: f64::from(row) / f64::from(count),
                    rotation: 0.0,
                });
            }
        }
        points.retain(|_| rng.gen::<f64>() < KEEP_PROBABILITY);

        Self {
            rotation: 0.0,
            points,
        }
    }

    /// Advance every point by one frame.
    ///
    /// The noise is sampled at the *squared* coordinates, giving the field a
    /// non-uniform spatial frequency across the grid, and one sample drives
    /// both axes so a point always moves along the diagonal of its noise
    /// value. Nothing clamps x, y or hue; long runs drift unbounded.
    pub fn update(&mut self, noise: &NoiseField, controls: &ControlState) {
        let displacement = controls.alteration / ALTERATION_SCALE;
        for point in &mut self.points {
            let n = noise.sample(point.x * point.x, point.y * point.y);

            point.hue += 1.0;
            if displacement != 0.0 {
                point.x += n * displacement;
                point.y += n * displacement;
            }
            if controls.carnage && displacement != 0.0 {
                point.rotation += n;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ALTERATION_STEP;
    use crate::simulation::control::ControlEvent;
    use rand::rngs::mock::StepRng;

    /// RNG whose every draw is zero, so every candidate survives thinning.
    fn keep_all() -> StepRng {
        StepRng::new(0, 0)
    }

    fn single_point_grid(x: f64, y: f64) -> PointGrid {
        PointGrid {
            rotation: 0.0,
            points: vec![Point {
                hue: 10.0,
                x,
                y,
                rotation: 0.0,
            }],
        }
    }

    #[test]
    fn lattice_has_count_squared_candidates() {
        let grid = PointGrid::populate(20, &mut keep_all());
        assert_eq!(grid.points.len(), 400);
    }

    #[test]
    fn lattice_layout_and_hue_by_row() {
        let count = 10;
        let grid = PointGrid::populate(count, &mut keep_all());
        assert_eq!(grid.rotation, 0.0);
        for col in 0..count {
            for row in 0..count {
                let point = &grid.points[(col * count + row) as usize];
                assert_eq!(point.x, f64::from(col) / f64::from(count));
                assert_eq!(point.y, f64::from(row) / f64::from(count));
                assert_eq!(point.hue, f64::from(count - row) * HUE_ROW_STEP);
                assert_eq!(point.rotation, 0.0);
            }
        }
    }

    #[test]
    fn thinning_retains_about_one_fifth() {
        let count = 100;
        let grid = PointGrid::populate(count, &mut rand::thread_rng());
        let fraction = grid.points.len() as f64 / f64::from(count * count);
        // 10000 candidates, sigma = 0.004; 0.02 is a 5-sigma band.
        assert!(
            (fraction - KEEP_PROBABILITY).abs() < 0.02,
            "retained fraction {} too far from {}",
            fraction,
            KEEP_PROBABILITY
        );
    }

    #[test]
    fn paused_update_only_cycles_hue() {
        let noise = NoiseField::new(3);
        let controls = ControlState::new();
        let mut grid = single_point_grid(0.4, 0.7);

        grid.update(&noise, &controls);
        let point = grid.points[0];
        assert_eq!(point.x, 0.4);
        assert_eq!(point.y, 0.7);
        assert_eq!(point.hue, 11.0);
        assert_eq!(point.rotation, 0.0);
    }

    #[test]
    fn update_samples_squared_coordinates() {
        let noise = NoiseField::new(9);
        let mut controls = ControlState::new();
        controls.apply(ControlEvent::Increase);
        let mut grid = single_point_grid(0.4, 0.7);

        let displacement = ALTERATION_STEP / ALTERATION_SCALE;
        let expected = noise.sample(0.4 * 0.4, 0.7 * 0.7) * displacement;
        grid.update(&noise, &controls);

        let point = grid.points[0];
        assert_eq!(point.x, 0.4 + expected);
        assert_eq!(point.y, 0.7 + expected);
    }

    #[test]
    fn one_sample_drives_both_axes() {
        let noise = NoiseField::new(11);
        let mut controls = ControlState::new();
        controls.apply(ControlEvent::Decrease);
        let mut grid = single_point_grid(0.25, 0.9);

        let displacement = -ALTERATION_STEP / ALTERATION_SCALE;
        let shift = noise.sample(0.25 * 0.25, 0.9 * 0.9) * displacement;
        grid.update(&noise, &controls);

        let point = grid.points[0];
        assert_eq!(point.x, 0.25 + shift);
        assert_eq!(point.y, 0.9 + shift);
    }

    #[test]
    fn rotation_untouched_without_carnage() {
        let noise = NoiseField::new(5);
        let mut controls = ControlState::new();
        controls.apply(ControlEvent::Increase);
        let mut grid = single_point_grid(0.1, 0.2);

        for _ in 0..10 {
            grid.update(&noise, &controls);
        }
        assert_eq!(grid.points[0].rotation, 0.0);
    }

    #[test]
    fn carnage_accumulates_raw_noise_only_while_moving() {
        let noise = NoiseField::new(5);
        let mut controls = ControlState::new();
        controls.apply(ControlEvent::Carnage);

        // Carnage alone does nothing while paused.
        let mut grid = single_point_grid(0.3, 0.6);
        grid.update(&noise, &controls);
        assert_eq!(grid.points[0].rotation, 0.0);

        // With alteration active the raw sample accumulates.
        controls.apply(ControlEvent::Increase);
        let expected = noise.sample(0.3 * 0.3, 0.6 * 0.6);
        let mut grid = single_point_grid(0.3, 0.6);
        grid.update(&noise, &controls);
        assert_eq!(grid.points[0].rotation, expected);
    }
}
