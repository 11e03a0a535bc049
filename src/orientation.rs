use field_core::LatestOrientation;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Device orientation permission and listener state.
///
/// Platforms exposing `DeviceOrientationEvent.requestPermission` (iOS 13+)
/// start without permission; everywhere else it is granted up front.
pub struct OrientationController {
    granted: Cell<bool>,
    initialized: Cell<bool>,
    latest: Rc<LatestOrientation>,
}

fn request_permission_fn() -> Option<(JsValue, js_sys::Function)> {
    let window = web::window()?;
    let ctor =
        js_sys::Reflect::get(&window, &JsValue::from_str("DeviceOrientationEvent")).ok()?;
    if ctor.is_undefined() {
        return None;
    }
    let request = js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission")).ok()?;
    let request = request.dyn_into::<js_sys::Function>().ok()?;
    Some((ctor, request))
}

impl OrientationController {
    pub fn new(latest: Rc<LatestOrientation>) -> Self {
        Self {
            granted: Cell::new(!Self::needs_permission()),
            initialized: Cell::new(false),
            latest,
        }
    }

    pub fn needs_permission() -> bool {
        request_permission_fn().is_some()
    }

    pub fn is_granted(&self) -> bool {
        self.granted.get()
    }

    /// Prompt for permission where required. Must run from a user gesture.
    pub async fn request_permission(&self) -> bool {
        let Some((ctor, request)) = request_permission_fn() else {
            self.granted.set(true);
            return true;
        };
        let result = match request.call0(&ctor) {
            Ok(promise) => JsFuture::from(js_sys::Promise::from(promise)).await,
            Err(e) => Err(e),
        };
        let granted = match result {
            Ok(response) => response.as_string().as_deref() == Some("granted"),
            Err(e) => {
                log::error!("Error requesting device orientation permission: {:?}", e);
                false
            }
        };
        self.granted.set(granted);
        granted
    }

    /// Start listening for `deviceorientation`. Returns false when already
    /// listening or permission is missing.
    pub fn init(&self) -> bool {
        if self.initialized.get() || !self.granted.get() {
            return false;
        }
        let Some(window) = web::window() else {
            return false;
        };
        let latest = self.latest.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::DeviceOrientationEvent| {
            latest.set(ev.alpha(), ev.beta(), ev.gamma());
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(
            "deviceorientation",
            closure.as_ref().unchecked_ref(),
        );
        closure.forget();
        self.initialized.set(true);
        true
    }
}
