#![cfg(target_arch = "wasm32")]
use field_core::{DensitySetting, LatestOrientation, Sensitivity, SketchConfig, TtfFont};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod color;
mod constants;
mod controls;
mod dom;
mod events;
mod font;
mod frame;
mod orientation;
mod overlay;
mod render;
mod signals;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback(
            "resize",
            resize_closure.as_ref().unchecked_ref(),
        );
    }
    resize_closure.forget();
}

fn spawn_font_load(path: String, slot: Rc<RefCell<Option<TtfFont>>>) {
    spawn_local(async move {
        match font::load_font(&path).await {
            Ok(f) => *slot.borrow_mut() = Some(f),
            // Frames keep drawing the text backdrop without points.
            Err(e) => log::error!("font load error: {:?}", e),
        }
    });
}

fn spawn_microphone(mic: Rc<audio::Microphone>) {
    spawn_local(async move {
        if let Err(e) = mic.connect().await {
            log::error!("microphone error: {:?}", e);
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("field-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    let sketch = SketchConfig::default();
    let density = Rc::new(RefCell::new(DensitySetting::default()));
    let sensitivity = Rc::new(RefCell::new(Sensitivity::default()));
    let latest = Rc::new(LatestOrientation::default());
    let orientation = Rc::new(orientation::OrientationController::new(latest.clone()));
    let mic = Rc::new(audio::Microphone::new()?);
    let font_slot: Rc<RefCell<Option<TtfFont>>> = Rc::new(RefCell::new(None));

    spawn_font_load(sketch.font_path.clone(), font_slot.clone());
    spawn_microphone(mic.clone());

    events::wire_start_button(&document, orientation.clone(), mic.clone());
    events::wire_controls(&document, density.clone(), sensitivity.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas: canvas.clone(),
        painter: render::Painter::new(ctx.clone()),
        canvas_measure: render::CanvasMeasure::new(ctx),
        font: font_slot,
        fit_config: sketch.fit_config(),
        sketch,
        density,
        signals: signals::LiveSignals {
            mic,
            sensitivity,
            orientation: latest,
        },
        orientation,
        frame_counter: 0,
        last_instant: Instant::now(),
        outline_warned: false,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
