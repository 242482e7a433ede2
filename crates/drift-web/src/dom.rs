use drift_core::Viewport;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> Viewport {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport { width, height }
}

/// Size the canvas backing store to the CSS viewport times the device pixel
/// ratio, pin the CSS size, and scale the 2D context so the engine keeps
/// drawing in device-independent pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> Viewport {
    let Some(window) = web::window() else {
        return Viewport {
            width: 0.0,
            height: 0.0,
        };
    };
    let viewport = viewport_size(&window);
    let dpr = window.device_pixel_ratio().max(1.0);

    canvas.set_width((viewport.width * dpr) as u32);
    canvas.set_height((viewport.height * dpr) as u32);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
    if let Err(e) = ctx.scale(dpr, dpr) {
        log::error!("[dom] context scale failed: {e:?}");
    }

    viewport
}
