#![cfg(target_arch = "wasm32")]
//! Browser entry point: binds the drift engine to a fullscreen 2D canvas.

use drift_core::{Scene, SceneParams};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("drift-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("drift-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #drift-canvas"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{e:?}"))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;

    let viewport = dom::sync_canvas_backing_size(&canvas, &ctx);
    let performance = window
        .performance()
        .ok_or_else(|| anyhow::anyhow!("no performance clock"))?;
    let now_ms = performance.now();

    // seed from the clock so every page load drifts differently
    let scene = Rc::new(RefCell::new(Scene::new(
        SceneParams::new(viewport, now_ms.to_bits()),
        now_ms,
    )));
    // start off-screen until the first pointer event arrives
    let pointer = Rc::new(RefCell::new(Scene::pointer_away()));

    events::wire_pointer(&canvas, pointer.clone());
    events::wire_resize(&canvas, &ctx, scene.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        surface: surface::Canvas2d::new(ctx),
        pointer,
        performance,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
