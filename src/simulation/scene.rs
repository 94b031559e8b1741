use crate::simulation::control::{ControlEvent, ControlState};
use crate::simulation::grid::PointGrid;
use crate::simulation::noise::NoiseField;

/// Owns the whole animation state and advances it one frame at a time.
///
/// The windowing layer drives `advance_frame` from its redraw callback and
/// `dispatch` from input callbacks; tests call both directly, no display
/// loop required.
pub struct Scene {
    noise: NoiseField,
    grid: PointGrid,
    controls: ControlState,
    count: u32,
}

impl Scene {
    /// New scene with a freshly seeded noise field and a freshly populated
    /// grid at the given lattice resolution.
    pub fn new(count: u32) -> Self {
        Self {
            noise: NoiseField::from_entropy(),
            grid: PointGrid::populate(count, &mut rand::thread_rng()),
            controls: ControlState::new(),
            count,
        }
    }

    /// One frame of the state machine: fade-in ramp, then the grid pass.
    pub fn advance_frame(&mut self) {
        self.controls.advance_alpha();
        self.grid.update(&self.noise, &self.controls);
    }

    /// Apply a control event delivered between frames. Restart swaps the
    /// grid wholesale and reseeds the noise; everything else is a parameter
    /// change on the control record.
    pub fn dispatch(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Restart => {
                self.noise.reseed();
                self.grid = PointGrid::populate(self.count, &mut rand::thread_rng());
                self.controls.apply(ControlEvent::Restart);
            }
            other => self.controls.apply(other),
        }
    }

    pub fn grid(&self) -> &PointGrid {
        &self.grid
    }

    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    /// Seed of the current noise field; changes on restart.
    pub fn noise_seed(&self) -> u32 {
        self.noise.seed()
    }
}
