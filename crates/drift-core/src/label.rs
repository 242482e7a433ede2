//! Centered "Loading" / "Finished" text overlay.

use glam::DVec2;

use crate::constants::{LABEL_COLOR, LABEL_FADE_IN_STEP, LABEL_FADE_OUT_STEP, LABEL_FONT};
use crate::scene::Viewport;
use crate::scheduler::Phase;
use crate::surface::Surface;

pub struct LoadingLabel {
    opacity: f64,
    pos: DVec2,
}

impl LoadingLabel {
    pub fn new(viewport: Viewport) -> Self {
        let mut label = Self {
            opacity: 0.0,
            pos: DVec2::ZERO,
        };
        label.reposition(viewport);
        label
    }

    #[inline]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Re-center on the surface; called when the viewport changes.
    pub fn reposition(&mut self, viewport: Viewport) {
        self.pos = DVec2::new(viewport.width / 2.0, viewport.height / 2.0);
    }

    /// Draw at the current opacity, then step the fade: out quickly while
    /// the screen clears, back in slowly while loading.
    pub fn draw<S: Surface>(&mut self, surface: &mut S, phase: Phase) {
        let text = if phase.is_clear() { "Finished" } else { "Loading" };
        surface.text(text, self.pos, LABEL_COLOR, self.opacity, LABEL_FONT);

        if phase.is_clear() && self.opacity > 0.0 {
            self.opacity = (self.opacity - LABEL_FADE_OUT_STEP).max(0.0);
        }
        if !phase.is_clear() && self.opacity < 1.0 {
            self.opacity = (self.opacity + LABEL_FADE_IN_STEP).min(1.0);
        }
    }
}
