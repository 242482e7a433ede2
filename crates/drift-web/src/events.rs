//! Event wiring: pointer tracking, leave sentinel, resize.

use drift_core::Scene;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Pointer position in CSS pixels relative to the canvas. The 2D context is
/// DPR-scaled, so CSS pixels are the engine's surface space.
#[inline]
pub fn pointer_css_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    DVec2::new(
        f64::from(ev.client_x()) - rect.left(),
        f64::from(ev.client_y()) - rect.top(),
    )
}

/// Track the pointer across the window; pointer events cover mouse and touch.
pub fn wire_pointer(canvas: &web::HtmlCanvasElement, pointer: Rc<RefCell<DVec2>>) {
    let Some(window) = web::window() else {
        return;
    };

    {
        let canvas = canvas.clone();
        let pointer = pointer.clone();
        let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            *pointer.borrow_mut() = pointer_css_px(&ev, &canvas);
        }) as Box<dyn FnMut(_)>);
        _ = window
            .add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref());
        on_move.forget();
    }

    {
        let on_leave = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            *pointer.borrow_mut() = Scene::pointer_away();
        }) as Box<dyn FnMut(_)>);
        _ = window
            .add_event_listener_with_callback("pointerout", on_leave.as_ref().unchecked_ref());
        on_leave.forget();
    }

    // keep touch drags from scrolling the page underneath the animation
    {
        let on_touch = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        _ = window
            .add_event_listener_with_callback("touchstart", on_touch.as_ref().unchecked_ref());
        on_touch.forget();
    }
}

/// Resync the canvas backing store and the scene viewport when the window
/// resizes or the device rotates.
pub fn wire_resize(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    scene: Rc<RefCell<Scene>>,
) {
    let canvas = canvas.clone();
    let ctx = ctx.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        let viewport = dom::sync_canvas_backing_size(&canvas, &ctx);
        scene.borrow_mut().set_viewport(viewport);
        log::info!(
            "[resize] {}x{}",
            viewport.width as u32,
            viewport.height as u32
        );
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}
