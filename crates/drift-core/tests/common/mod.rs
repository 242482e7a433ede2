//! Shared drawing-surface double for the engine tests.
#![allow(dead_code)]

use drift_core::{Rgb, Surface};
use glam::DVec2;

/// Records every drawing command issued during a frame.
#[derive(Default)]
pub struct RecordingSurface {
    pub clears: usize,
    pub circles: Vec<CircleCall>,
    pub texts: Vec<TextCall>,
}

pub struct CircleCall {
    pub center: DVec2,
    pub radius: f64,
    pub color: Rgb,
    pub opacity: f64,
    pub filled: bool,
}

pub struct TextCall {
    pub text: String,
    pub pos: DVec2,
    pub opacity: f64,
}

impl RecordingSurface {
    pub fn reset(&mut self) {
        self.clears = 0;
        self.circles.clear();
        self.texts.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.clears += 1;
    }

    fn circle(&mut self, center: DVec2, radius: f64, color: Rgb, opacity: f64, filled: bool) {
        self.circles.push(CircleCall {
            center,
            radius,
            color,
            opacity,
            filled,
        });
    }

    fn text(&mut self, text: &str, pos: DVec2, _color: Rgb, opacity: f64, _font: &str) {
        self.texts.push(TextCall {
            text: text.to_string(),
            pos,
            opacity,
        });
    }
}
