//! Fixed tuning constants for the loading-screen animation.
//!
//! These express intended behavior (timings, growth steps, palette) and keep
//! magic numbers out of the update code.

use crate::surface::Rgb;

// Wave shape shared by every dot in a batch
pub const WAVE_AMPLITUDE: f64 = 400.0;
pub const WAVE_FREQUENCY: f64 = 0.075;

// Phase timings (ms); the clear period is deliberately shorter
pub const VISIBLE_DURATION_MS: f64 = 6000.0;
pub const INVISIBLE_DURATION_MS: f64 = 3000.0;

// Batch sizing; narrow viewports get fewer, slower dots
pub const NARROW_VIEWPORT_WIDTH: f64 = 640.0;
pub const BATCH_SIZE_WIDE: usize = 300;
pub const BATCH_SIZE_NARROW: usize = 200;
pub const SPEED_DIVISOR_WIDE: f64 = 3.0;
pub const SPEED_DIVISOR_NARROW: f64 = 4.0;

// Per-dot randomized parameter ranges
pub const MAX_SIZE_RANGE: f64 = 30.0; // max_size in [0, 30)
pub const MAX_SPEED_RANGE: f64 = 0.45; // before the viewport divisor
pub const SECTION_MIN: f64 = 1.0; // section in [1, 3.5)
pub const SECTION_RANGE: f64 = 2.5;
pub const SPAWN_X_JITTER: f64 = 8.0; // added to the random spawn column

// Palette: mostly dark dots with a 1-in-ACCENT_WEIGHT accent
pub const DOT_COLOR: Rgb = [0, 0, 0];
pub const ACCENT_COLOR: Rgb = [255, 255, 0];
pub const ACCENT_WEIGHT: u32 = 4;

// Per-frame growth steps
pub const SPEED_GROWTH_STEP: f64 = 0.01; // toward max_speed
pub const CLEAR_ACCEL_STEP: f64 = 0.005; // extra, unbounded, while clearing
pub const OPACITY_GROWTH_STEP: f64 = 0.025;

// Size behavior around the pointer
pub const POINTER_NEAR_PX: f64 = 50.0; // axis-aligned proximity box
pub const POINTER_GROW_STEP: f64 = 2.0;
pub const SIZE_RELAX_STEP: f64 = 1.0; // shrink back toward resting size
pub const RESTING_SIZE_DIVISOR: f64 = 4.0; // resting size = max_size / 4

// Eased size ramp after spawn
pub const SIZE_RAMP_DELAY_MS: f64 = 1000.0;
pub const SIZE_RAMP_DURATION_MS: f64 = 2000.0;

// Label styling and fades (fade-out is faster than fade-in)
pub const LABEL_COLOR: Rgb = [230, 230, 230];
pub const LABEL_FONT: &str = "16px Roboto Mono";
pub const LABEL_FADE_OUT_STEP: f64 = 0.075;
pub const LABEL_FADE_IN_STEP: f64 = 0.01;

// Pointer sentinel used until real input arrives (far off-screen)
pub const POINTER_OFFSCREEN: [f64; 2] = [-500.0, -500.0];
