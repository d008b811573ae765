//! Thread-safe handle for hosts that drive the simulation from more than one
//! thread, e.g. a timer thread stepping while an input thread edits.

use super::Simulation;
use std::sync::{Arc, Mutex, MutexGuard};

/// One lock guards the cells and the viewport together. Every operation
/// holds it from start to finish, so callers see whole commands only.
#[derive(Clone)]
pub struct SharedSimulation {
    inner: Arc<Mutex<Simulation>>,
}

impl SharedSimulation {
    pub fn new(sim: Simulation) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sim)),
        }
    }

    // Commands swap in complete cell sets, so a poisoned lock still guards a
    // consistent simulation.
    fn lock(&self) -> MutexGuard<'_, Simulation> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Run `f` with exclusive access
    pub fn with<R>(&self, f: impl FnOnce(&mut Simulation) -> R) -> R {
        f(&mut self.lock())
    }

    /// Timer-thread entry point: step once if running
    pub fn tick(&self, delta_time: f32) -> bool {
        self.lock().tick(delta_time)
    }
}
