//! `Surface` implementation over the 2D canvas context.

use drift_core::{Rgb, Surface};
use glam::DVec2;
use std::f64::consts::TAU;
use web_sys as web;

pub struct Canvas2d {
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    #[inline]
    pub fn ctx(&self) -> &web::CanvasRenderingContext2d {
        &self.ctx
    }
}

fn rgba(color: Rgb, opacity: f64) -> String {
    format!("rgba({}, {}, {}, {opacity})", color[0], color[1], color[2])
}

impl Surface for Canvas2d {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn circle(&mut self, center: DVec2, radius: f64, color: Rgb, opacity: f64, filled: bool) {
        let style = rgba(color, opacity);
        self.ctx.set_fill_style_str(&style);
        self.ctx.set_stroke_style_str(&style);
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.close_path();
        if filled {
            self.ctx.fill();
        } else {
            self.ctx.stroke();
        }
    }

    fn text(&mut self, text: &str, pos: DVec2, color: Rgb, opacity: f64, font: &str) {
        self.ctx.set_text_align("center");
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(&rgba(color, opacity));
        _ = self.ctx.fill_text(text, pos.x, pos.y);
    }
}
