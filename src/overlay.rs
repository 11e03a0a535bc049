use crate::constants::{CONTROL_BUTTON_CLASS, CONTROL_DESCRIPTION_CLASS, INTRO_ID};
use crate::dom;
use web_sys as web;

/// Hide the intro panel, fade the control buttons and drop their descriptions.
pub fn hide_intro(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(INTRO_ID) {
        _ = el.set_attribute("style", "display:none");
    }
    dom::style_all(document, &format!(".{}", CONTROL_BUTTON_CLASS), "opacity", "0");
    dom::style_all(
        document,
        &format!(".{}", CONTROL_DESCRIPTION_CLASS),
        "display",
        "none",
    );
}
