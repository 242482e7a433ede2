//! The collection of live dots: batch spawning and the per-frame draw pass.

use rand::prelude::*;
use smallvec::SmallVec;

use crate::constants::*;
use crate::dot::{Dot, DotFate, DotParams};
use crate::label::LoadingLabel;
use crate::scene::{FrameInput, Viewport};
use crate::surface::Surface;

/// Dots a viewport gets per batch; narrow screens get fewer.
pub fn batch_size(viewport: Viewport) -> usize {
    if viewport.width > NARROW_VIEWPORT_WIDTH {
        BATCH_SIZE_WIDE
    } else {
        BATCH_SIZE_NARROW
    }
}

#[derive(Default)]
pub struct DotField {
    pub dots: Vec<Dot>,
}

impl DotField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of dots not yet removed.
    #[inline]
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Append one batch of randomized dots. Called at startup and on every
    /// transition into the Visible phase.
    pub fn spawn_batch(&mut self, now_ms: f64, viewport: Viewport, rng: &mut StdRng) -> usize {
        let narrow = viewport.width <= NARROW_VIEWPORT_WIDTH;
        let count = batch_size(viewport);
        let speed_divisor = if narrow {
            SPEED_DIVISOR_NARROW
        } else {
            SPEED_DIVISOR_WIDE
        };
        for _ in 0..count {
            let color = if rng.gen_range(0..ACCENT_WEIGHT) == 0 {
                ACCENT_COLOR
            } else {
                DOT_COLOR
            };
            let params = DotParams {
                start_time_ms: now_ms,
                frequency: WAVE_FREQUENCY,
                amplitude: WAVE_AMPLITUDE,
                filled: true,
                color,
                max_size: rng.gen::<f64>() * MAX_SIZE_RANGE,
                max_speed: rng.gen::<f64>() * MAX_SPEED_RANGE / speed_divisor,
                x: None,
                section: rng.gen::<f64>() * SECTION_RANGE + SECTION_MIN,
            };
            self.dots.push(Dot::new(params, viewport.width, rng));
        }
        log::info!("[field] spawned {count} dots ({} live)", self.dots.len());
        count
    }

    /// The draw pass: walk dots from the last slot downward, advance and draw
    /// each, and draw the label when the pass reaches `label_slot`.
    ///
    /// The historical pass stops before slot 0, so that dot never advances;
    /// `skip_first_slot` keeps the quirk by default. Removals are collected
    /// during the walk and compacted afterwards, preserving draw order, so
    /// the collection is never mutated mid-iteration.
    pub fn run_frame<S: Surface>(
        &mut self,
        surface: &mut S,
        input: &FrameInput,
        viewport: Viewport,
        rng: &mut StdRng,
        skip_first_slot: bool,
        label_slot: usize,
        label: &mut LoadingLabel,
    ) {
        let first = usize::from(skip_first_slot);
        let mut removed: SmallVec<[usize; 16]> = SmallVec::new();
        for i in (first..self.dots.len()).rev() {
            if self.dots[i].advance_and_draw(surface, input, viewport, rng) == DotFate::Remove {
                removed.push(i);
            }
            if i == label_slot {
                label.draw(surface, input.phase);
            }
        }
        // indices were collected in descending order
        for &i in &removed {
            self.dots.remove(i);
        }
    }
}
