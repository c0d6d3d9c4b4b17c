//! Frame drivers and the concrete animators.
//!
//! The [`Driver`] is the shared frame-advance state machine: two states,
//! `Running` and `Paused`, a progress scalar, and a fixed step. The owner
//! (a windowing shell, a headless loop, a test) calls [`Driver::tick`] at
//! whatever cadence it likes; the original programs ticked every ~16 ms for
//! roughly 60 frames per second. While paused, ticks are ignored and
//! progress does not move.

/// Butterfly curve animator.
pub mod butterfly;

/// Lissajous grid animator.
pub mod lissajous;

/// Run state of a frame driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    /// Ticks advance progress and fire the frame step.
    Running,
    /// Ticks are ignored.
    Paused,
}

/// Fixed-step frame driver.
///
/// Progress strictly increases by `step` on every running tick and is
/// untouched while paused. The only state transition is the pause/resume
/// toggle; resetting progress never changes the run state.
#[derive(Debug, Clone)]
pub struct Driver {
    state: DriverState,
    progress: f64,
    initial: f64,
    step: f64,
}

impl Driver {
    /// Create a running driver starting at `initial` progress.
    #[must_use]
    pub fn new(initial: f64, step: f64) -> Self {
        Self {
            state: DriverState::Running,
            progress: initial,
            initial,
            step,
        }
    }

    /// Current run state.
    #[must_use]
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Whether the driver is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Flip between `Running` and `Paused`.
    pub fn toggle(&mut self) {
        self.state = match self.state {
            DriverState::Running => DriverState::Paused,
            DriverState::Paused => DriverState::Running,
        };
    }

    /// Current progress value.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Fixed progress increment per running tick.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Fire one tick.
    ///
    /// While running, returns the progress value the frame should sample at
    /// and advances by the fixed step. While paused, returns `None` and
    /// leaves progress untouched.
    pub fn tick(&mut self) -> Option<f64> {
        match self.state {
            DriverState::Running => {
                let t = self.progress;
                self.progress += self.step;
                Some(t)
            }
            DriverState::Paused => None,
        }
    }

    /// Reset progress to the initial value. Run state is unchanged.
    pub fn reset_progress(&mut self) {
        self.progress = self.initial;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_state_is_running() {
        let d = Driver::new(0.0, 0.02);
        assert_eq!(d.state(), DriverState::Running);
        assert!(d.is_running());
    }

    #[test]
    fn test_tick_samples_then_advances() {
        let mut d = Driver::new(0.0, 0.02);
        assert_eq!(d.tick(), Some(0.0));
        assert_relative_eq!(d.progress(), 0.02);
        assert_eq!(d.tick(), Some(0.02));
        assert_relative_eq!(d.progress(), 0.04);
    }

    #[test]
    fn test_paused_ticks_do_nothing() {
        let mut d = Driver::new(0.0, 0.01);
        d.tick();
        d.toggle();
        assert!(!d.is_running());

        for _ in 0..10 {
            assert_eq!(d.tick(), None);
        }
        assert_relative_eq!(d.progress(), 0.01);

        d.toggle();
        assert_eq!(d.tick(), Some(0.01));
    }

    #[test]
    fn test_progress_monotonic_per_running_tick() {
        let mut d = Driver::new(0.0, 0.01);
        for i in 1..=100 {
            d.tick();
            assert_relative_eq!(d.progress(), f64::from(i) * 0.01, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_reset_keeps_run_state() {
        let mut d = Driver::new(0.5, 0.02);
        d.tick();
        d.toggle();
        d.reset_progress();
        assert_relative_eq!(d.progress(), 0.5);
        assert!(!d.is_running());
    }
}
