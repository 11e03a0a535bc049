use crate::constants::{
    FRAME_INTERVAL_SEC, FRAME_PACING_SLACK_SEC, TEXT_OVER_COLOR, TEXT_UNDER_COLOR,
};
use crate::orientation::OrientationController;
use crate::render::{CanvasMeasure, Painter};
use crate::signals::LiveSignals;
use field_core::{
    render_frame, CanvasExtent, DensitySetting, FieldError, FrameRequest, OutlineSource,
    SketchConfig, TextFitConfig, TextMeasure, TtfFont,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub painter: Painter,
    pub canvas_measure: CanvasMeasure,
    pub font: Rc<RefCell<Option<TtfFont>>>,

    pub sketch: SketchConfig,
    pub fit_config: TextFitConfig,
    pub density: Rc<RefCell<DensitySetting>>,

    pub signals: LiveSignals,
    pub orientation: Rc<OrientationController>,

    pub frame_counter: u64,
    pub last_instant: Instant,
    pub outline_warned: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let elapsed = (now - self.last_instant).as_secs_f32();
        if elapsed < FRAME_INTERVAL_SEC - FRAME_PACING_SLACK_SEC {
            return;
        }
        self.last_instant = now;

        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        let font = self.font.borrow();
        let measure: &dyn TextMeasure = match font.as_ref() {
            Some(f) => f,
            None => &self.canvas_measure,
        };
        let outlines = font.as_ref().map(|f| f as &dyn OutlineSource);
        let request = FrameRequest {
            config: &self.fit_config,
            extent: CanvasExtent::new(width as f32, height as f32),
            density: self.density.borrow().sampling_rate(),
            frame_counter: self.frame_counter + 1,
        };

        let frame = match render_frame(&request, measure, outlines, &self.signals) {
            Ok(f) => f,
            Err(e @ FieldError::InvalidExtent { .. }) => {
                log::debug!("[frame] skipped: {e}");
                return;
            }
            Err(e) => {
                log::error!("[frame] {e}");
                return;
            }
        };
        self.frame_counter += 1;

        if let Some(e) = &frame.outline_error {
            if !self.outline_warned {
                log::warn!("[frame] drawing text only: {e}");
                self.outline_warned = true;
            }
        }

        self.painter.clear(width, height);
        if self.sketch.show_text_under {
            self.painter.draw_backdrop(&frame.backdrop, TEXT_UNDER_COLOR);
        }
        self.painter.draw_points(&frame.points, frame.unit);
        if self.sketch.show_text_over {
            self.painter.draw_backdrop(&frame.backdrop, TEXT_OVER_COLOR);
        }
        if !self.orientation.is_granted() {
            self.painter.draw_permission_notice(width, height);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
