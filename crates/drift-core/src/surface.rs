//! Drawing-surface abstraction.
//!
//! The engine never talks to a platform canvas directly; it issues the small
//! set of drawing commands the animation needs through this trait. The web
//! front-end implements it over `CanvasRenderingContext2d`; tests implement
//! it with a recording double. Coordinates are surface-space pixels, origin
//! top-left, y-down.

use glam::DVec2;

/// RGB triple, composed with a separate opacity into an RGBA style.
pub type Rgb = [u8; 3];

pub trait Surface {
    /// Clear the whole surface.
    fn clear(&mut self, width: f64, height: f64);

    /// Draw a circle, filled when `filled` is set, outlined otherwise.
    fn circle(&mut self, center: DVec2, radius: f64, color: Rgb, opacity: f64, filled: bool);

    /// Draw horizontally centered text in the given font.
    fn text(&mut self, text: &str, pos: DVec2, color: Rgb, opacity: f64, font: &str);
}
