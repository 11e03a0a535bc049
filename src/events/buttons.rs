use crate::audio::Microphone;
use crate::constants::START_BUTTON_ID;
use crate::controls::Control;
use crate::dom;
use crate::orientation::OrientationController;
use crate::overlay;
use field_core::{DensitySetting, Sensitivity};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Start button: hide the intro, ask for orientation permission, then resume
/// audio whether or not orientation was granted.
pub fn wire_start_button(
    document: &web::Document,
    orientation: Rc<OrientationController>,
    mic: Rc<Microphone>,
) {
    let doc = document.clone();
    dom::add_click_listener(document, START_BUTTON_ID, move || {
        overlay::hide_intro(&doc);
        // Resume inside the gesture; some browsers refuse it from a later task.
        mic.resume();
        let orientation = orientation.clone();
        spawn_local(async move {
            let granted = orientation.request_permission().await;
            log::info!("[orientation] permission granted={}", granted);
            if granted {
                orientation.init();
            }
        });
    });
}

pub fn wire_controls(
    document: &web::Document,
    density: Rc<RefCell<DensitySetting>>,
    sensitivity: Rc<RefCell<Sensitivity>>,
) {
    for control in Control::ALL {
        let density = density.clone();
        let sensitivity = sensitivity.clone();
        dom::add_click_listener(document, control.element_id(), move || {
            let value =
                control.apply(&mut density.borrow_mut(), &mut sensitivity.borrow_mut());
            log::info!("[controls] {:?} -> {:.2}", control, value);
        });
    }
}
