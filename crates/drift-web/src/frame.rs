//! requestAnimationFrame loop driving the scene.

use drift_core::Scene;
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::surface::Canvas2d;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub surface: Canvas2d,
    pub pointer: Rc<RefCell<DVec2>>,
    pub performance: web::Performance,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now_ms = self.performance.now();
        let pointer = *self.pointer.borrow();
        self.scene.borrow_mut().frame(&mut self.surface, now_ms, pointer);
    }
}

/// Run `FrameContext::frame` before every display refresh, forever; teardown
/// is the page going away.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
