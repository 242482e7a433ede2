//! A single oscillating dot.
//!
//! A dot's `x` is a monotonically increasing sequence value, not a literal
//! pixel column: the tangent in the vertical-position mapping makes motion
//! mostly vertical, clustering dots into wave bands at the tangent's
//! asymptotes. The horizontal draw position is `x * 2 * section`.

use glam::DVec2;
use rand::prelude::*;

use crate::constants::*;
use crate::easing::ease_in_out_cubic;
use crate::scene::{FrameInput, Viewport};
use crate::surface::{Rgb, Surface};

/// What the field should do with a dot after its frame step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotFate {
    Live,
    /// Exited the top of the surface while the screen is clearing; the field
    /// compacts it out after the draw pass.
    Remove,
}

/// Construction options; anything absent falls back to the defaults below.
#[derive(Clone, Debug)]
pub struct DotParams {
    pub start_time_ms: f64,
    pub frequency: f64,
    pub amplitude: f64,
    pub filled: bool,
    pub color: Rgb,
    pub max_size: f64,
    pub max_speed: f64,
    /// Initial sequence value; `None` picks a random column across the
    /// surface width plus a small jitter.
    pub x: Option<f64>,
    /// Horizontal scaling divisor for the draw position.
    pub section: f64,
}

impl Default for DotParams {
    fn default() -> Self {
        Self {
            start_time_ms: 0.0,
            frequency: 5.0,
            amplitude: 400.0,
            filled: false,
            color: DOT_COLOR,
            max_size: 20.0,
            max_speed: 1.0,
            x: None,
            section: 1.0,
        }
    }
}

pub struct Dot {
    pub x: f64,
    pub speed: f64,
    pub size: f64,
    pub opacity: f64,
    pub start_time_ms: f64,
    pub frequency: f64,
    pub amplitude: f64,
    pub filled: bool,
    pub color: Rgb,
    pub max_size: f64,
    pub max_speed: f64,
    pub section: f64,
}

impl Dot {
    pub fn new(params: DotParams, surface_width: f64, rng: &mut StdRng) -> Self {
        let x = params.x.unwrap_or_else(|| {
            rng.gen::<f64>() * surface_width + (rng.gen::<f64>() * SPAWN_X_JITTER - SPAWN_X_JITTER)
        });
        Self {
            x,
            speed: 0.0,
            size: 1.0,
            opacity: 0.0,
            start_time_ms: params.start_time_ms,
            frequency: params.frequency,
            amplitude: params.amplitude,
            filled: params.filled,
            color: params.color,
            max_size: params.max_size,
            max_speed: params.max_speed,
            section: params.section,
        }
    }

    /// One frame: advance kinematics and draw.
    ///
    /// The draw position is the one computed on entry; after a right-edge
    /// recycle the dot still draws at its pre-recycle position this frame and
    /// reappears on the left on the next.
    pub fn advance_and_draw<S: Surface>(
        &mut self,
        surface: &mut S,
        input: &FrameInput,
        viewport: Viewport,
        rng: &mut StdRng,
    ) -> DotFate {
        let y = self.y_pos(viewport);
        let draw_x = self.x * 2.0 * self.section;
        let off_right = self.x >= viewport.width + self.size / 2.0;
        let off_top = y <= self.size / 2.0;

        if off_top && input.phase.is_clear() {
            // no further mutation or draw this frame
            return DotFate::Remove;
        }
        if off_right {
            // restart just left of the surface so the sweep is continuous
            self.x = rng.gen::<f64>() * self.size - self.size * 2.0;
        }

        // dots accelerate toward the exit while the screen clears; this ramp
        // is allowed past max_speed
        if input.phase.is_clear() {
            self.speed += CLEAR_ACCEL_STEP;
        }
        if self.speed < self.max_speed {
            self.speed = (self.speed + SPEED_GROWTH_STEP).min(self.max_speed);
        }
        if self.opacity < 1.0 {
            self.opacity = (self.opacity + OPACITY_GROWTH_STEP).min(1.0);
        }

        let resting = self.max_size / RESTING_SIZE_DIVISOR;
        if self.size < self.max_size && self.near_pointer(draw_x, y, input.pointer) {
            self.size += POINTER_GROW_STEP;
        } else if self.size < resting {
            // smooth ramp-in after a short delay from spawn
            let t = (input.now_ms - (self.start_time_ms + SIZE_RAMP_DELAY_MS)).max(0.0);
            self.size = resting * ease_in_out_cubic(t, 0.0, 1.0, SIZE_RAMP_DURATION_MS) + 1.0;
        } else if self.size > resting + 1.0 {
            self.size -= SIZE_RELAX_STEP;
        }

        self.x += self.speed;

        surface.circle(
            DVec2::new(draw_x, y),
            self.size,
            self.color,
            self.opacity,
            self.filled,
        );
        DotFate::Live
    }

    /// Vertical position for the current sequence value. The tangent's
    /// asymptotes are the seams between wave bands; values there are left
    /// unclamped on purpose.
    pub fn y_pos(&self, viewport: Viewport) -> f64 {
        self.amplitude
            * (std::f64::consts::PI * (self.x / viewport.width) * self.frequency - self.x / 10.0)
                .tan()
            + viewport.height / 2.0
    }

    fn near_pointer(&self, x: f64, y: f64, pointer: DVec2) -> bool {
        (x - pointer.x).abs() < POINTER_NEAR_PX && (y - pointer.y).abs() < POINTER_NEAR_PX
    }
}
