use crate::config::{ALPHA_STEP, ALTERATION_STEP};

/// Animation parameters shared between the update and paint passes.
///
/// Mutated only between frames: by the per-frame alpha ramp and by discrete
/// control events. The paint pass reads it, never writes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlState {
    /// Global paint alpha; ramps from 0 to 1 after startup and stays there.
    /// Not reset by restart, so the fade-in does not replay.
    pub alpha: f64,
    /// Signed strength of the per-frame noise displacement. Zero means
    /// paused: points keep cycling hue but stop moving.
    pub alteration: f64,
    /// One-way latch enabling rotation drift; cleared only by restart.
    pub carnage: bool,
}

/// Discrete control events, delivered between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    /// Set the alteration to +step.
    Increase,
    /// Set the alteration to -step.
    Decrease,
    /// Flip the alteration's sign, keeping its magnitude.
    Reverse,
    /// Toggle between zero and +step. Resuming always comes back at the
    /// default step, dropping whatever magnitude and direction were set
    /// before the pause.
    TogglePause,
    /// Latch carnage mode on.
    Carnage,
    /// Reset everything except the fade-in alpha. Handled by the scene,
    /// which also reseeds the noise and repopulates the grid.
    Restart,
}

impl ControlState {
    pub fn new() -> Self {
        Self {
            alpha: 0.0,
            alteration: 0.0,
            carnage: false,
        }
    }

    /// Advance the fade-in ramp by one frame, capping at exactly 1.
    pub fn advance_alpha(&mut self) {
        if self.alpha < 1.0 {
            self.alpha = (self.alpha + ALPHA_STEP).min(1.0);
        }
    }

    /// Apply a control event to the parameter record. `Restart` only clears
    /// the parameters it owns; grid and noise recreation live in the scene.
    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Increase => self.alteration = ALTERATION_STEP,
            ControlEvent::Decrease => self.alteration = -ALTERATION_STEP,
            ControlEvent::Reverse => self.alteration = -self.alteration,
            ControlEvent::TogglePause => {
                self.alteration = if self.alteration == 0.0 {
                    ALTERATION_STEP
                } else {
                    0.0
                };
            }
            ControlEvent::Carnage => self.carnage = true,
            ControlEvent::Restart => {
                self.carnage = false;
                self.alteration = 0.0;
            }
        }
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_reaches_exactly_one_after_100_frames() {
        let mut state = ControlState::new();
        for _ in 0..100 {
            state.advance_alpha();
        }
        assert_eq!(state.alpha, 1.0);
    }

    #[test]
    fn alpha_stays_at_one() {
        let mut state = ControlState::new();
        for _ in 0..500 {
            state.advance_alpha();
        }
        assert_eq!(state.alpha, 1.0);
    }

    #[test]
    fn pause_toggle_round_trip() {
        let mut state = ControlState::new();
        state.apply(ControlEvent::TogglePause);
        assert_eq!(state.alteration, ALTERATION_STEP);
        state.apply(ControlEvent::TogglePause);
        assert_eq!(state.alteration, 0.0);
    }

    #[test]
    fn resume_forgets_prior_direction() {
        let mut state = ControlState::new();
        state.apply(ControlEvent::Decrease);
        state.apply(ControlEvent::TogglePause);
        assert_eq!(state.alteration, 0.0);
        state.apply(ControlEvent::TogglePause);
        // Comes back positive, not at the prior -step.
        assert_eq!(state.alteration, ALTERATION_STEP);
    }

    #[test]
    fn reverse_flips_sign_twice() {
        let mut state = ControlState::new();
        state.apply(ControlEvent::Increase);
        assert_eq!(state.alteration, 0.5);
        state.apply(ControlEvent::Reverse);
        assert_eq!(state.alteration, -0.5);
        state.apply(ControlEvent::Reverse);
        assert_eq!(state.alteration, 0.5);
    }

    #[test]
    fn carnage_is_a_one_way_latch() {
        let mut state = ControlState::new();
        state.apply(ControlEvent::Carnage);
        assert!(state.carnage);
        state.apply(ControlEvent::TogglePause);
        state.apply(ControlEvent::Reverse);
        state.apply(ControlEvent::Increase);
        assert!(state.carnage);
    }

    #[test]
    fn restart_clears_controls_but_not_alpha() {
        let mut state = ControlState::new();
        for _ in 0..30 {
            state.advance_alpha();
        }
        let alpha = state.alpha;
        state.apply(ControlEvent::Carnage);
        state.apply(ControlEvent::Increase);
        state.apply(ControlEvent::Restart);
        assert!(!state.carnage);
        assert_eq!(state.alteration, 0.0);
        assert_eq!(state.alpha, alpha);
    }
}
