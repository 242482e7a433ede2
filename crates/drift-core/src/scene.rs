//! Per-frame driver composing the scheduler, dot field, and label.
//!
//! The platform owns the actual frame loop (requestAnimationFrame or a test
//! harness) and calls [`Scene::frame`] once per display refresh with the
//! current clock and pointer position.

use glam::DVec2;
use rand::prelude::*;

use crate::constants::POINTER_OFFSCREEN;
use crate::field::DotField;
use crate::label::LoadingLabel;
use crate::scheduler::{Phase, PhaseScheduler};
use crate::surface::Surface;

/// Surface dimensions in device-independent pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Per-frame external inputs, passed down to every dot and the label.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    /// Monotonic clock in milliseconds.
    pub now_ms: f64,
    /// Pointer position in surface space; a far off-screen sentinel when
    /// there is no pointer.
    pub pointer: DVec2,
    pub phase: Phase,
}

pub struct SceneParams {
    pub viewport: Viewport,
    pub seed: u64,
    /// Keep the historical draw pass that stops before slot 0, leaving that
    /// dot frozen. Disable for a full sweep.
    pub skip_first_slot: bool,
}

impl SceneParams {
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        Self {
            viewport,
            seed,
            skip_first_slot: true,
        }
    }
}

pub struct Scene {
    pub field: DotField,
    pub label: LoadingLabel,
    pub scheduler: PhaseScheduler,
    viewport: Viewport,
    rng: StdRng,
    skip_first_slot: bool,
    /// Slot at which the draw pass emits the label, keyed to half the
    /// *initial* batch; once the live count falls below it the label simply
    /// stops drawing for those frames.
    label_slot: usize,
}

impl Scene {
    /// Spawn the initial batch and start the Visible period.
    pub fn new(params: SceneParams, now_ms: f64) -> Self {
        let mut rng = StdRng::seed_from_u64(params.seed);
        let mut field = DotField::new();
        let initial_batch = field.spawn_batch(now_ms, params.viewport, &mut rng);
        Self {
            field,
            label: LoadingLabel::new(params.viewport),
            scheduler: PhaseScheduler::new(now_ms),
            viewport: params.viewport,
            rng,
            skip_first_slot: params.skip_first_slot,
            label_slot: initial_batch / 2,
        }
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.scheduler.phase()
    }

    /// Far off-screen pointer sentinel for frames without pointer input.
    pub fn pointer_away() -> DVec2 {
        DVec2::from(POINTER_OFFSCREEN)
    }

    /// Adopt new surface dimensions and re-center the label.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.label.reposition(viewport);
    }

    /// One animation frame: poll the phase timer (a transition into Visible
    /// spawns a fresh batch), clear the surface, then run the dot pass with
    /// the label interleaved at its slot.
    pub fn frame<S: Surface>(&mut self, surface: &mut S, now_ms: f64, pointer: DVec2) {
        if let Some(phase) = self.scheduler.poll(now_ms) {
            if phase == Phase::Visible {
                self.field.spawn_batch(now_ms, self.viewport, &mut self.rng);
            }
        }

        surface.clear(self.viewport.width, self.viewport.height);

        let input = FrameInput {
            now_ms,
            pointer,
            phase: self.scheduler.phase(),
        };
        self.field.run_frame(
            surface,
            &input,
            self.viewport,
            &mut self.rng,
            self.skip_first_slot,
            self.label_slot,
            &mut self.label,
        );
    }
}
