/// Cubic ease-in-out interpolation.
///
/// Returns the eased value at elapsed time `t` for a transition starting at
/// `b`, changing by `c`, over duration `d`: cubic acceleration across the
/// first half of `d`, cubic deceleration across the second. Continuous and
/// monotonic over `[0, d]` for `c >= 0`.
///
/// Precondition: `d > 0` and `t >= 0`; neither is checked here.
pub fn ease_in_out_cubic(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        c / 2.0 * t * t * t + b
    } else {
        let t = t - 2.0;
        c / 2.0 * (t * t * t + 2.0) + b
    }
}
